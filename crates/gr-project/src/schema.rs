//! Graph document schema.

use std::collections::{BTreeSet, HashSet};

use gr_core::NodeId;
use gr_graph::{Graph, GraphResult, NewEdge};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GraphDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Node ids acting as power sources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generators: Vec<String>,
    /// Extra nodes with no incident edge.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub u: String,
    pub v: String,
    #[serde(default)]
    pub strength: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reinforce_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
}

impl GraphDocument {
    /// Build the in-memory graph. Edges are added in document order.
    pub fn to_graph(&self) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        for node in &self.nodes {
            graph.add_node(node.as_str());
        }
        for def in &self.edges {
            let mut edge = NewEdge::new(def.u.as_str(), def.v.as_str(), def.strength);
            edge.id = def.id.as_deref().map(Into::into);
            edge.capacity = def.capacity;
            edge.reinforce_cost = def.reinforce_cost;
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    pub fn generator_set(&self) -> BTreeSet<NodeId> {
        self.generators.iter().map(NodeId::from).collect()
    }

    /// Capture a graph as a document. Every edge gets its explicit id, and
    /// only nodes without incident edges are listed under `nodes`.
    pub fn from_graph(
        graph: &Graph,
        generators: &BTreeSet<NodeId>,
        name: Option<String>,
    ) -> GraphDocument {
        let connected: HashSet<&NodeId> = graph
            .edges()
            .iter()
            .flat_map(|e| [&e.u, &e.v])
            .collect();

        GraphDocument {
            name,
            generators: generators.iter().map(|g| g.to_string()).collect(),
            nodes: graph
                .nodes()
                .iter()
                .filter(|n| !connected.contains(n))
                .map(|n| n.to_string())
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|e| EdgeDef {
                    id: Some(e.id.to_string()),
                    u: e.u.to_string(),
                    v: e.v.to_string(),
                    strength: e.strength,
                    reinforce_cost: e.reinforce_cost,
                    capacity: e.capacity,
                })
                .collect(),
        }
    }
}
