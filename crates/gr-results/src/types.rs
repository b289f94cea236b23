//! Report data types.

use serde::{Deserialize, Serialize};

/// Everything one analysis produced, keyed by plain string ids.
///
/// Field order and list order are deterministic, so equal analyses
/// serialize to identical bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub wind_speed: f64,
    pub method: String,
    pub k: usize,
    pub selected: Vec<String>,
    pub surviving: Vec<String>,
    pub failed: Vec<String>,
    pub components: Vec<Vec<String>>,
    #[serde(default)]
    pub generators: Vec<String>,
    #[serde(default)]
    pub blackout_zones: Vec<Vec<String>>,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSummary>,
}

impl AnalysisReport {
    /// Number of nodes left without a generator.
    pub fn blacked_out_node_count(&self) -> usize {
        self.blackout_zones.iter().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeSummary {
    pub id: String,
    pub u: String,
    pub v: String,
    pub strength: f64,
    pub effective_reinforce_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
}

/// On-disk wrapper: the report plus its digest and a creation timestamp.
///
/// The timestamp sits outside the digested content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportFile {
    pub generated_at: String,
    pub digest: String,
    pub report: AnalysisReport,
}
