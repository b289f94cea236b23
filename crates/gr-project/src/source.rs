//! Graph sources: where an analysis gets its graph and generator set.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use gr_core::NodeId;
use gr_graph::Graph;
use tracing::info;

use crate::samples::SampleGrid;
use crate::{ProjectError, ProjectResult, load_document};

/// A graph ready for analysis, plus the generators its source declared.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub name: Option<String>,
    pub graph: Graph,
    pub generators: BTreeSet<NodeId>,
}

/// File formats understood by [`GraphSource::Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => Err(ProjectError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Closed set of graph providers. Graphs come from declarative documents or
/// from in-process builders; nothing is ever evaluated as code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// A JSON or YAML graph document on disk.
    Document(PathBuf),
    /// A built-in sample grid.
    Sample(SampleGrid),
}

impl GraphSource {
    pub fn load(&self) -> ProjectResult<LoadedGraph> {
        let loaded = match self {
            GraphSource::Document(path) => {
                let document = load_document(path)?;
                LoadedGraph {
                    graph: document.to_graph()?,
                    generators: document.generator_set(),
                    name: document.name,
                }
            }
            GraphSource::Sample(sample) => sample.load()?,
        };
        info!(
            source = %self,
            nodes = loaded.graph.node_count(),
            edges = loaded.graph.edge_count(),
            generators = loaded.generators.len(),
            "graph loaded"
        );
        Ok(loaded)
    }
}

impl fmt::Display for GraphSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphSource::Document(path) => write!(f, "{}", path.display()),
            GraphSource::Sample(sample) => write!(f, "sample:{}", sample.name()),
        }
    }
}
