//! Wind-failure analysis for gridrisk networks.
//!
//! Provides:
//! - Kruskal reinforcement planner over effective reinforcement cost
//! - Wind failure simulation (strict `strength < wind_speed` rule)
//! - Connected components and blackout zones over any edge subset
//! - Greedy marginal-benefit reinforcement selector
//! - Reinforced simulation and the `analyze` entry point

pub mod analyze;
pub mod components;
pub mod error;
pub mod failure;
pub mod greedy;
pub mod planner;
pub mod reinforce;

use std::collections::BTreeSet;

use gr_core::{EdgeId, NodeId, Real};
use gr_graph::{Edge, Graph};

// Re-exports for public API
pub use analyze::{AnalysisResult, SelectionMethod, analyze, analyze_by_name};
pub use components::{Component, blackout_zones, blackout_zones_of, connected_components};
pub use error::{SimError, SimResult};
pub use failure::{FailurePartition, simulate_wind_failures};
pub use greedy::{
    ReinforcementCandidate, greedy_select_top_k_reinforcements, rank_reinforcement_candidates,
};
pub use planner::kruskal_reinforcement_plan;
pub use reinforce::{SimulationOutcome, reinforced_edges, simulate_with_reinforcements};

/// Method-style access to the analyses, defaulting every edge subset to the graph's own edges.
pub trait GridAnalysis {
    fn kruskal_reinforcement_plan(&self) -> Vec<&Edge>;
    fn simulate_wind_failures(&self, wind_speed: Real) -> FailurePartition<&Edge>;
    fn connected_components(&self) -> Vec<Component>;
    fn blackout_zones(&self, generators: &BTreeSet<NodeId>) -> Vec<Component>;
    fn greedy_select_top_k_reinforcements(&self, wind_speed: Real, k: usize) -> Vec<EdgeId>;
    fn simulate_with_reinforcements(
        &self,
        wind_speed: Real,
        reinforced: &BTreeSet<EdgeId>,
    ) -> SimulationOutcome<'_>;
}

impl GridAnalysis for Graph {
    fn kruskal_reinforcement_plan(&self) -> Vec<&Edge> {
        planner::kruskal_reinforcement_plan(self)
    }

    fn simulate_wind_failures(&self, wind_speed: Real) -> FailurePartition<&Edge> {
        failure::simulate_wind_failures(self.edges(), wind_speed)
    }

    fn connected_components(&self) -> Vec<Component> {
        components::connected_components(self, self.edges())
    }

    fn blackout_zones(&self, generators: &BTreeSet<NodeId>) -> Vec<Component> {
        components::blackout_zones(self, generators, self.edges())
    }

    fn greedy_select_top_k_reinforcements(&self, wind_speed: Real, k: usize) -> Vec<EdgeId> {
        greedy::greedy_select_top_k_reinforcements(self, wind_speed, k)
    }

    fn simulate_with_reinforcements(
        &self,
        wind_speed: Real,
        reinforced: &BTreeSet<EdgeId>,
    ) -> SimulationOutcome<'_> {
        reinforce::simulate_with_reinforcements(self, wind_speed, reinforced)
    }
}
