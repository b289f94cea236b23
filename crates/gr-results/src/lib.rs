//! gr-results: analysis report types, content digests and report files.

pub mod hash;
pub mod store;
pub mod types;

pub use hash::report_digest;
pub use store::{load_report, save_report};
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report digest mismatch: file says {recorded}, content hashes to {computed}")]
    DigestMismatch { recorded: String, computed: String },
}
