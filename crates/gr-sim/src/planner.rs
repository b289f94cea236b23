//! Kruskal reinforcement planner.

use gr_core::NodeId;
use gr_graph::{DisjointSet, Edge, Graph};
use tracing::debug;

/// Minimum-cost spanning forest over `effective_reinforce_cost`.
///
/// Edges are stable-sorted by ascending cost (ties keep insertion order) and
/// accepted while they join two different components. The scan stops at
/// `node_count - 1` edges. On a disconnected graph the result is one tree per
/// component, so fewer edges come back; that is not an error.
pub fn kruskal_reinforcement_plan(graph: &Graph) -> Vec<&Edge> {
    let target = graph.node_count().saturating_sub(1);

    let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
    sorted.sort_by(|a, b| {
        a.effective_reinforce_cost()
            .total_cmp(&b.effective_reinforce_cost())
    });

    let mut forest: DisjointSet<&NodeId> = DisjointSet::new();
    for node in graph.nodes() {
        forest.insert(node);
    }

    let mut plan = Vec::with_capacity(target);
    for edge in sorted {
        if plan.len() >= target {
            break;
        }
        if forest.union(&&edge.u, &&edge.v) {
            plan.push(edge);
        }
    }

    debug!(
        accepted = plan.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "reinforcement plan built"
    );
    plan
}
