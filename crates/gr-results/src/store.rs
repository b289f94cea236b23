//! Report file read/write.

use std::fs;
use std::path::Path;

use crate::hash::report_digest;
use crate::types::{AnalysisReport, ReportFile};
use crate::{ResultsError, ResultsResult};

impl ReportFile {
    /// Wrap a report, stamping it with its digest and the current UTC time.
    pub fn new(report: AnalysisReport) -> ResultsResult<Self> {
        Ok(Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            digest: report_digest(&report)?,
            report,
        })
    }
}

/// Write a report as pretty JSON, creating parent directories as needed.
pub fn save_report(path: &Path, file: &ReportFile) -> ResultsResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(file)?;
    fs::write(path, content)?;
    Ok(())
}

/// Read a report file and check that its digest still matches the content.
pub fn load_report(path: &Path) -> ResultsResult<ReportFile> {
    let content = fs::read_to_string(path)?;
    let file: ReportFile = serde_json::from_str(&content)?;

    let computed = report_digest(&file.report)?;
    if computed != file.digest {
        return Err(ResultsError::DigestMismatch {
            recorded: file.digest,
            computed,
        });
    }
    Ok(file)
}
