//! The `analyze` entry point used by every driver (CLI, services, tests).

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use gr_core::{EdgeId, NodeId, Real, ensure_finite};
use gr_graph::Graph;
use tracing::{debug, info, warn};

use crate::error::{SimError, SimResult};
use crate::greedy::greedy_select_top_k_reinforcements;
use crate::planner::kruskal_reinforcement_plan;
use crate::reinforce::simulate_with_reinforcements;

/// How reinforcement edges are chosen before simulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SelectionMethod {
    /// Top-k by marginal failure reduction per cost.
    #[default]
    Greedy,
    /// First k edges of the Kruskal reinforcement plan.
    Mst,
    /// No reinforcement.
    None,
}

impl SelectionMethod {
    pub const ALL: [SelectionMethod; 3] = [Self::Greedy, Self::Mst, Self::None];

    pub fn as_str(self) -> &'static str {
        match self {
            SelectionMethod::Greedy => "greedy",
            SelectionMethod::Mst => "mst",
            SelectionMethod::None => "none",
        }
    }
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMethod {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SimError::UnknownMethod {
                method: s.to_string(),
            })
    }
}

/// Plain-id result of [`analyze`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisResult {
    pub selected: Vec<EdgeId>,
    pub surviving: Vec<EdgeId>,
    pub failed: Vec<EdgeId>,
    /// Each component's nodes in id order; components ordered by smallest node.
    pub components: Vec<Vec<NodeId>>,
    /// Empty unless a non-empty generator set was supplied.
    pub blackout_zones: Vec<Vec<NodeId>>,
}

/// Select reinforcements with `method`, simulate `wind_speed`, and report
/// survivors, failures, components and (given generators) blackout zones.
///
/// Pure with respect to `graph`: identical inputs give identical results.
pub fn analyze(
    graph: &Graph,
    wind_speed: Real,
    method: SelectionMethod,
    k: usize,
    generators: Option<&BTreeSet<NodeId>>,
) -> SimResult<AnalysisResult> {
    ensure_finite(wind_speed, "wind_speed")?;

    let selected: Vec<EdgeId> = match method {
        SelectionMethod::Greedy => greedy_select_top_k_reinforcements(graph, wind_speed, k),
        SelectionMethod::Mst => kruskal_reinforcement_plan(graph)
            .into_iter()
            .take(k)
            .map(|e| e.id.clone())
            .collect(),
        SelectionMethod::None => Vec::new(),
    };
    debug!(%method, k, ?selected, "reinforcements selected");

    let reinforced: BTreeSet<EdgeId> = selected.iter().cloned().collect();
    let outcome = simulate_with_reinforcements(graph, wind_speed, &reinforced);

    let blackout_zones = match generators {
        Some(gens) if !gens.is_empty() => {
            let missing: Vec<&NodeId> = gens
                .iter()
                .filter(|g| !graph.contains_node(g.as_str()))
                .collect();
            if !missing.is_empty() {
                warn!(?missing, "generator ids not present in graph");
            }
            outcome
                .blackout_zones(gens)
                .into_iter()
                .map(|zone| zone.into_iter().collect())
                .collect()
        }
        _ => Vec::new(),
    };

    let result = AnalysisResult {
        selected,
        surviving: outcome.surviving_ids(),
        failed: outcome.failed_ids(),
        components: outcome
            .components
            .into_iter()
            .map(|c| c.into_iter().collect())
            .collect(),
        blackout_zones,
    };

    info!(
        wind_speed,
        %method,
        selected = result.selected.len(),
        failed = result.failed.len(),
        components = result.components.len(),
        blackout_zones = result.blackout_zones.len(),
        "analysis complete"
    );
    Ok(result)
}

/// [`analyze`] with the method given by name (`greedy`, `mst`, `none`).
pub fn analyze_by_name(
    graph: &Graph,
    wind_speed: Real,
    method: &str,
    k: usize,
    generators: Option<&BTreeSet<NodeId>>,
) -> SimResult<AnalysisResult> {
    let method: SelectionMethod = method.parse()?;
    analyze(graph, wind_speed, method, k, generators)
}
