//! gr-project: graph document format, validation and graph sources.

pub mod samples;
pub mod schema;
pub mod source;
pub mod validate;

pub use samples::SampleGrid;
pub use schema::*;
pub use source::{DocumentFormat, GraphSource, LoadedGraph};
pub use validate::{ValidationError, validate_document};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] gr_graph::GraphError),

    #[error("Unsupported graph document format: {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: String },

    #[error("Unknown sample grid '{name}' (available: {available})")]
    UnknownSample { name: String, available: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<GraphDocument> {
    let content = std::fs::read_to_string(path)?;
    let document: GraphDocument = serde_yaml::from_str(&content)?;
    validate_document(&document)?;
    Ok(document)
}

pub fn save_yaml(path: &Path, document: &GraphDocument) -> ProjectResult<()> {
    validate_document(document)?;
    let content = serde_yaml::to_string(document)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<GraphDocument> {
    let content = std::fs::read_to_string(path)?;
    let document: GraphDocument = serde_json::from_str(&content)?;
    validate_document(&document)?;
    Ok(document)
}

pub fn save_json(path: &Path, document: &GraphDocument) -> ProjectResult<()> {
    validate_document(document)?;
    let content = serde_json::to_string_pretty(document)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a document, picking the parser from the file extension.
pub fn load_document(path: &Path) -> ProjectResult<GraphDocument> {
    match DocumentFormat::from_path(path)? {
        DocumentFormat::Json => load_json(path),
        DocumentFormat::Yaml => load_yaml(path),
    }
}

/// Save a document, picking the serializer from the file extension.
pub fn save_document(path: &Path, document: &GraphDocument) -> ProjectResult<()> {
    match DocumentFormat::from_path(path)? {
        DocumentFormat::Json => save_json(path, document),
        DocumentFormat::Yaml => save_yaml(path, document),
    }
}
