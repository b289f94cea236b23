//! Caller-supplied analysis settings.

use gr_sim::SelectionMethod;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WIND_SPEED: f64 = 7.0;
pub const DEFAULT_K: usize = 1;

/// Settings for one analysis run. Missing fields take their defaults when
/// deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub wind_speed: f64,
    pub method: SelectionMethod,
    pub k: usize,
    /// Added to whatever generators the graph source declares.
    pub generators: Vec<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            wind_speed: DEFAULT_WIND_SPEED,
            method: SelectionMethod::default(),
            k: DEFAULT_K,
            generators: Vec::new(),
        }
    }
}
