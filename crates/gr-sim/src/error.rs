//! Error types for analysis operations.

use thiserror::Error;

/// Errors raised by the analysis entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Unknown selection method '{method}' (expected greedy, mst or none)")]
    UnknownMethod { method: String },

    #[error(transparent)]
    Core(#[from] gr_core::GrError),
}

pub type SimResult<T> = Result<T, SimError>;
