//! Graph loading, validation and introspection.

use std::path::Path;

use gr_graph::{Edge, Graph};
use gr_project::{GraphDocument, GraphSource, LoadedGraph, SampleGrid, load_document};
use gr_results::EdgeSummary;

use crate::error::AppResult;

/// Node list and per-edge cost table of a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphDescription {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeSummary>,
}

/// Load a graph document (JSON or YAML, by extension).
pub fn load_source(path: &Path) -> AppResult<LoadedGraph> {
    Ok(GraphSource::Document(path.to_path_buf()).load()?)
}

/// Load a built-in sample grid by name, e.g. `toy-4`.
pub fn load_sample(name: &str) -> AppResult<LoadedGraph> {
    let sample: SampleGrid = name.parse()?;
    Ok(GraphSource::Sample(sample).load()?)
}

/// Parse and validate a document, including building its graph so that
/// synthesized edge id collisions are reported too.
pub fn validate_file(path: &Path) -> AppResult<GraphDocument> {
    let document = load_document(path)?;
    document.to_graph()?;
    Ok(document)
}

pub fn edge_summary(edge: &Edge) -> EdgeSummary {
    EdgeSummary {
        id: edge.id.to_string(),
        u: edge.u.to_string(),
        v: edge.v.to_string(),
        strength: edge.strength,
        effective_reinforce_cost: edge.effective_reinforce_cost(),
        capacity: edge.capacity,
    }
}

pub fn describe(graph: &Graph) -> GraphDescription {
    GraphDescription {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        nodes: graph.nodes().iter().map(|n| n.to_string()).collect(),
        edges: graph.edges().iter().map(edge_summary).collect(),
    }
}
