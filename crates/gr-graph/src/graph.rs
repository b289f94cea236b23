//! Core network data structures.

use std::collections::{BTreeSet, HashMap};

use gr_core::{EdgeId, NodeId, REINFORCE_COST_EPSILON, REINFORCEMENT_MARGIN, Real};

use crate::error::{GraphError, GraphResult};
use crate::validate;

/// An undirected line segment between two nodes.
///
/// Edges are plain values. Reinforcement never touches an edge in place;
/// [`Edge::reinforced`] returns a new value carrying the same id.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub u: NodeId,
    pub v: NodeId,
    /// Wind resistance. The edge fails when `strength < wind_speed`.
    pub strength: Real,
    /// Not used by any analysis; carried through to reports.
    pub capacity: Option<Real>,
    /// Explicit reinforcement cost. When absent the cost is derived from strength.
    pub reinforce_cost: Option<Real>,
}

impl Edge {
    /// Cost of reinforcing this edge: the explicit cost when set, else
    /// `1 / (strength + REINFORCE_COST_EPSILON)`.
    pub fn effective_reinforce_cost(&self) -> Real {
        match self.reinforce_cost {
            Some(cost) => cost,
            None => 1.0 / (self.strength + REINFORCE_COST_EPSILON),
        }
    }

    /// True if this edge goes down at `wind_speed` (strict: an edge exactly at the threshold survives).
    pub fn fails_at(&self, wind_speed: Real) -> bool {
        self.strength < wind_speed
    }

    /// A copy of this edge strengthened to survive `wind_speed`.
    pub fn reinforced(&self, wind_speed: Real) -> Edge {
        Edge {
            strength: self.strength.max(wind_speed + REINFORCEMENT_MARGIN),
            ..self.clone()
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

/// Parameters for [`Graph::add_edge`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewEdge {
    pub u: NodeId,
    pub v: NodeId,
    pub strength: Real,
    pub capacity: Option<Real>,
    pub reinforce_cost: Option<Real>,
    /// When `None`, the graph synthesizes `"{u}-{v}-{edge_count}"`.
    pub id: Option<EdgeId>,
}

impl NewEdge {
    pub fn new(u: impl Into<NodeId>, v: impl Into<NodeId>, strength: Real) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            strength,
            capacity: None,
            reinforce_cost: None,
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<EdgeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_capacity(mut self, capacity: Real) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_reinforce_cost(mut self, cost: Real) -> Self {
        self.reinforce_cost = Some(cost);
        self
    }
}

/// The network: an ordered node set plus an insertion-ordered edge list.
///
/// Edge insertion order is significant: it is the tie-break order for the
/// stable sorts used by the planner and the greedy selector.
/// Every edge endpoint is a member of the node set.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: BTreeSet<NodeId>,
    edges: Vec<Edge>,
    /// Edge id -> position in `edges`.
    edge_index: HashMap<EdgeId, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Returns false if it was already present.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> bool {
        self.nodes.insert(id.into())
    }

    /// Append an edge, adding both endpoints as nodes.
    ///
    /// Rejects duplicate edge ids (explicit or synthesized) and non-finite
    /// attributes; on error the graph is left unchanged.
    pub fn add_edge(&mut self, new_edge: NewEdge) -> GraphResult<EdgeId> {
        let NewEdge {
            u,
            v,
            strength,
            capacity,
            reinforce_cost,
            id,
        } = new_edge;

        let id = id.unwrap_or_else(|| EdgeId::new(format!("{}-{}-{}", u, v, self.edges.len())));
        validate::validate_edge(&id, &u, &v, strength, capacity, reinforce_cost)?;
        if self.edge_index.contains_key(&id) {
            return Err(GraphError::DuplicateEdgeId { id });
        }

        self.nodes.insert(u.clone());
        self.nodes.insert(v.clone());
        self.edge_index.insert(id.clone(), self.edges.len());
        self.edges.push(Edge {
            id: id.clone(),
            u,
            v,
            strength,
            capacity,
            reinforce_cost,
        });
        Ok(id)
    }

    /// All nodes, in id order.
    pub fn nodes(&self) -> &BTreeSet<NodeId> {
        &self.nodes
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edge_index.get(id).map(|&i| &self.edges[i])
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edge_index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(id: &str, strength: Real) -> Edge {
        Edge {
            id: id.into(),
            u: "A".into(),
            v: "B".into(),
            strength,
            capacity: None,
            reinforce_cost: None,
        }
    }

    #[test]
    fn derived_cost_is_inverse_strength() {
        let e = edge("x", 5.0);
        assert!((e.effective_reinforce_cost() - 1.0 / 5.0).abs() < 1e-6);
    }

    #[test]
    fn explicit_cost_wins() {
        let e = Edge {
            reinforce_cost: Some(0.25),
            ..edge("y", 2.0)
        };
        assert_eq!(e.effective_reinforce_cost(), 0.25);
    }

    #[test]
    fn zero_strength_cost_is_finite() {
        let e = edge("z", 0.0);
        assert!(e.effective_reinforce_cost().is_finite());
        assert!(e.effective_reinforce_cost() > 0.0);
    }

    #[test]
    fn threshold_edge_survives() {
        let e = edge("t", 7.0);
        assert!(!e.fails_at(7.0));
        assert!(e.fails_at(7.5));
    }

    #[test]
    fn reinforced_is_a_new_value() {
        let e = edge("r", 3.0);
        let r = e.reinforced(7.0);
        assert_eq!(r.id, e.id);
        assert_eq!(r.strength, 8.0);
        assert_eq!(e.strength, 3.0);
        assert!(!r.fails_at(7.0));

        // Already stronger than needed: strength is kept.
        let strong = edge("s", 20.0).reinforced(7.0);
        assert_eq!(strong.strength, 20.0);
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = Graph::new();
        assert!(g.add_node("A"));
        assert!(!g.add_node("A"));
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn synthesized_ids_use_edge_count() {
        let mut g = Graph::new();
        let a = g.add_edge(NewEdge::new("A", "B", 1.0)).unwrap();
        let b = g.add_edge(NewEdge::new("B", "C", 1.0)).unwrap();
        assert_eq!(a.as_str(), "A-B-0");
        assert_eq!(b.as_str(), "B-C-1");
    }

    #[test]
    fn duplicate_id_rejected_without_side_effects() {
        let mut g = Graph::new();
        g.add_edge(NewEdge::new("A", "B", 1.0).with_id("e1")).unwrap();
        let err = g
            .add_edge(NewEdge::new("C", "D", 1.0).with_id("e1"))
            .unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEdgeId { .. }));
        assert_eq!(g.edge_count(), 1);
        assert!(!g.contains_node("C"));
    }

    #[test]
    fn self_loops_and_parallel_edges_accepted() {
        let mut g = Graph::new();
        g.add_edge(NewEdge::new("A", "A", 1.0)).unwrap();
        g.add_edge(NewEdge::new("A", "B", 1.0)).unwrap();
        g.add_edge(NewEdge::new("B", "A", 2.0)).unwrap();
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.node_count(), 2);
        assert!(g.edges()[0].is_self_loop());
    }
}
