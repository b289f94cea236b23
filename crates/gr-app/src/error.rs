//! Error types for the gr-app service layer.

/// Application error type wrapping the backend crates' errors for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for gr-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<gr_project::ProjectError> for AppError {
    fn from(err: gr_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<gr_graph::GraphError> for AppError {
    fn from(err: gr_graph::GraphError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<gr_sim::SimError> for AppError {
    fn from(err: gr_sim::SimError) -> Self {
        AppError::Analysis(err.to_string())
    }
}

impl From<gr_results::ResultsError> for AppError {
    fn from(err: gr_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
