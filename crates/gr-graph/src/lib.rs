//! gr-graph: network model layer for gridrisk.
//!
//! Provides:
//! - Edge value type with optional capacity and reinforcement cost
//! - Graph owning an ordered node set and an insertion-ordered edge list
//! - Disjoint-set (union-find) used for spanning-tree construction
//!
//! # Example
//!
//! ```
//! use gr_graph::{Graph, NewEdge};
//!
//! let mut graph = Graph::new();
//! graph.add_edge(NewEdge::new("A", "B", 5.0).with_id("e1")).unwrap();
//! graph.add_edge(NewEdge::new("B", "C", 8.0)).unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! assert!(graph.edge("B-C-1").is_some());
//! ```

pub mod error;
pub mod graph;
pub mod union_find;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, NewEdge};
pub use union_find::DisjointSet;
