//! gr-core: stable foundation for gridrisk.
//!
//! Contains:
//! - numeric (Real, finiteness check, reinforcement constants)
//! - ids (opaque node and edge identifiers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{GrError, GrResult};
pub use ids::*;
pub use numeric::*;
