//! Content-based hashing for analysis reports.

use sha2::{Digest, Sha256};

use crate::ResultsResult;
use crate::types::AnalysisReport;

/// SHA-256 (lowercase hex) of the report's canonical JSON.
pub fn report_digest(report: &AnalysisReport) -> ResultsResult<String> {
    let mut hasher = Sha256::new();

    let report_json = serde_json::to_string(report)?;
    hasher.update(report_json.as_bytes());

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}
