//! Shared application service layer for gridrisk.
//!
//! Loads graphs from documents or sample grids, runs analyses with
//! caller options, and turns results into reports for the CLI.

pub mod error;
pub mod options;
pub mod project_service;
pub mod run_service;
pub mod summary;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use gr_project::LoadedGraph;
pub use options::AnalysisOptions;
pub use project_service::{
    GraphDescription, describe, edge_summary, load_sample, load_source, validate_file,
};
pub use run_service::{merged_generators, reinforcement_plan, run_analysis, run_and_save};
pub use summary::render_summary;
