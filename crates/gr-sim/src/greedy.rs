//! Greedy reinforcement selection by marginal benefit per unit cost.
//!
//! Each failing edge is scored in isolation: reinforce only that edge, re-run
//! the failure simulation and count how many fewer edges fail. Interactions
//! between reinforcements are not evaluated, so this is a baseline ranking and
//! not a global optimum. Cost is O(E) simulations of O(E) each.

use std::borrow::Cow;

use gr_core::{EdgeId, Real};
use gr_graph::{Edge, Graph};
use tracing::debug;

use crate::failure::simulate_wind_failures;

/// A failing edge scored for reinforcement.
#[derive(Debug, Clone, PartialEq)]
pub struct ReinforcementCandidate {
    pub edge_id: EdgeId,
    /// Failed edges removed by reinforcing this edge alone.
    pub benefit: usize,
    pub cost: Real,
    /// `benefit / cost`, or `+inf` when `cost <= 0`.
    pub score: Real,
}

/// Score every edge that fails at `wind_speed`, best first.
///
/// Edges that already survive are never candidates. The sort is stable, so
/// equal scores keep edge insertion order.
pub fn rank_reinforcement_candidates(graph: &Graph, wind_speed: Real) -> Vec<ReinforcementCandidate> {
    let edges = graph.edges();
    let baseline_failed = simulate_wind_failures(edges, wind_speed).failed_count();

    let failing: Vec<usize> = edges
        .iter()
        .enumerate()
        .filter(|(_, e)| e.fails_at(wind_speed))
        .map(|(i, _)| i)
        .collect();

    let score = |i: usize| score_candidate(edges, i, wind_speed, baseline_failed);

    #[cfg(feature = "parallel")]
    let mut candidates: Vec<ReinforcementCandidate> = {
        use rayon::prelude::*;
        failing.par_iter().map(|&i| score(i)).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let mut candidates: Vec<ReinforcementCandidate> = failing.iter().map(|&i| score(i)).collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        wind_speed,
        baseline_failed,
        candidates = candidates.len(),
        "scored reinforcement candidates"
    );
    candidates
}

/// Ids of the top `k` candidates from [`rank_reinforcement_candidates`].
///
/// Returns fewer than `k` ids when fewer edges fail.
pub fn greedy_select_top_k_reinforcements(graph: &Graph, wind_speed: Real, k: usize) -> Vec<EdgeId> {
    rank_reinforcement_candidates(graph, wind_speed)
        .into_iter()
        .take(k)
        .map(|c| c.edge_id)
        .collect()
}

fn score_candidate(
    edges: &[Edge],
    index: usize,
    wind_speed: Real,
    baseline_failed: usize,
) -> ReinforcementCandidate {
    let target = &edges[index];
    let counterfactual = edges.iter().enumerate().map(|(i, e)| {
        if i == index {
            Cow::Owned(e.reinforced(wind_speed))
        } else {
            Cow::Borrowed(e)
        }
    });
    let failed_after = simulate_wind_failures(counterfactual, wind_speed).failed_count();

    let benefit = baseline_failed.saturating_sub(failed_after);
    let cost = target.effective_reinforce_cost();
    let score = if cost > 0.0 {
        benefit as Real / cost
    } else {
        Real::INFINITY
    };

    ReinforcementCandidate {
        edge_id: target.id.clone(),
        benefit,
        cost,
        score,
    }
}
