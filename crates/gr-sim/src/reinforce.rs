//! Simulation with a set of reinforced edges.

use std::borrow::Cow;
use std::collections::BTreeSet;

use gr_core::{EdgeId, NodeId, Real};
use gr_graph::{Edge, Graph};
use tracing::debug;

use crate::components::{Component, blackout_zones_of, connected_components};
use crate::failure::simulate_wind_failures;

/// Outcome of one wind simulation.
///
/// Unreinforced edges are borrowed from the graph; reinforced ones are owned
/// copies with raised strength and the original id.
#[derive(Debug, Clone)]
pub struct SimulationOutcome<'g> {
    pub surviving: Vec<Cow<'g, Edge>>,
    pub failed: Vec<Cow<'g, Edge>>,
    /// Components over the surviving edges.
    pub components: Vec<Component>,
}

impl SimulationOutcome<'_> {
    pub fn surviving_ids(&self) -> Vec<EdgeId> {
        self.surviving.iter().map(|e| e.id.clone()).collect()
    }

    pub fn failed_ids(&self) -> Vec<EdgeId> {
        self.failed.iter().map(|e| e.id.clone()).collect()
    }

    /// Surviving components that contain no generator.
    pub fn blackout_zones(&self, generators: &BTreeSet<NodeId>) -> Vec<Component> {
        blackout_zones_of(&self.components, generators)
    }
}

/// The graph's edges with every id in `reinforced` raised to survive `wind_speed`.
///
/// The graph itself is untouched; other edges are passed through by reference.
pub fn reinforced_edges<'g>(
    graph: &'g Graph,
    wind_speed: Real,
    reinforced: &BTreeSet<EdgeId>,
) -> Vec<Cow<'g, Edge>> {
    graph
        .edges()
        .iter()
        .map(|e| {
            if reinforced.contains(&e.id) {
                Cow::Owned(e.reinforced(wind_speed))
            } else {
                Cow::Borrowed(e)
            }
        })
        .collect()
}

/// Run the failure simulation with `reinforced` edges strengthened, then
/// compute components over whatever survives.
///
/// Ids in `reinforced` that the graph does not contain are ignored.
pub fn simulate_with_reinforcements<'g>(
    graph: &'g Graph,
    wind_speed: Real,
    reinforced: &BTreeSet<EdgeId>,
) -> SimulationOutcome<'g> {
    let unknown: Vec<&EdgeId> = reinforced
        .iter()
        .filter(|id| !graph.contains_edge(id.as_str()))
        .collect();
    if !unknown.is_empty() {
        debug!(?unknown, "ignoring reinforcement ids not present in graph");
    }

    let edges = reinforced_edges(graph, wind_speed, reinforced);
    let partition = simulate_wind_failures(edges, wind_speed);
    let components = connected_components(graph, &partition.surviving);

    SimulationOutcome {
        surviving: partition.surviving,
        failed: partition.failed,
        components,
    }
}
