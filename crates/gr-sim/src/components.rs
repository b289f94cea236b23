//! Connectivity and blackout-zone detection.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap, HashSet};

use gr_core::NodeId;
use gr_graph::{Edge, Graph};

/// A connected set of nodes.
pub type Component = BTreeSet<NodeId>;

/// Connected components of `graph` when only `edges` are in service.
///
/// Every node of the graph lands in exactly one component; nodes with no
/// incident edge in `edges` become singletons. Components are emitted in the
/// order of their smallest node id. Traversal is an explicit-stack DFS so
/// long chains cannot exhaust the call stack.
pub fn connected_components<E: Borrow<Edge>>(graph: &Graph, edges: &[E]) -> Vec<Component> {
    let mut adjacency: HashMap<&NodeId, Vec<&NodeId>> = HashMap::new();
    for edge in edges {
        let edge: &Edge = edge.borrow();
        adjacency.entry(&edge.u).or_default().push(&edge.v);
        adjacency.entry(&edge.v).or_default().push(&edge.u);
    }

    let mut visited: HashSet<&NodeId> = HashSet::with_capacity(graph.node_count());
    let mut components = Vec::new();
    for start in graph.nodes() {
        if visited.contains(start) {
            continue;
        }

        let mut component = Component::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            component.insert(node.clone());
            for &next in adjacency.get(node).map(Vec::as_slice).unwrap_or_default() {
                // Edges handed in from outside may name nodes the graph does not own.
                if !visited.contains(next) && graph.contains_node(next.as_str()) {
                    stack.push(next);
                }
            }
        }
        components.push(component);
    }
    components
}

/// Components with `edges` in service that contain no generator node.
///
/// With an empty generator set every component is a blackout zone.
pub fn blackout_zones<E: Borrow<Edge>>(
    graph: &Graph,
    generators: &BTreeSet<NodeId>,
    edges: &[E],
) -> Vec<Component> {
    blackout_zones_of(&connected_components(graph, edges), generators)
}

/// Filter already-computed components down to those without a generator.
pub fn blackout_zones_of(components: &[Component], generators: &BTreeSet<NodeId>) -> Vec<Component> {
    components
        .iter()
        .filter(|c| c.is_disjoint(generators))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gr_graph::NewEdge;

    fn names(c: &Component) -> Vec<&str> {
        c.iter().map(NodeId::as_str).collect()
    }

    fn chain(len: usize) -> Graph {
        let mut g = Graph::new();
        for i in 0..len {
            g.add_edge(NewEdge::new(format!("n{i:05}"), format!("n{:05}", i + 1), 1.0))
                .unwrap();
        }
        g
    }

    #[test]
    fn no_edges_gives_singletons() {
        let g = chain(3);
        let comps = connected_components(&g, &[] as &[&Edge]);
        assert_eq!(comps.len(), 4);
        assert!(comps.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn long_chain_is_one_component() {
        let g = chain(50_000);
        let comps = connected_components(&g, g.edges());
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].len(), 50_001);
    }

    #[test]
    fn components_in_smallest_node_order() {
        let mut g = Graph::new();
        g.add_edge(NewEdge::new("C", "B", 1.0)).unwrap();
        g.add_edge(NewEdge::new("D", "A", 1.0)).unwrap();
        let comps = connected_components(&g, g.edges());
        assert_eq!(names(&comps[0]), vec!["A", "D"]);
        assert_eq!(names(&comps[1]), vec!["B", "C"]);
    }

    #[test]
    fn empty_graph_has_no_components() {
        let g = Graph::new();
        assert!(connected_components(&g, g.edges()).is_empty());
        assert!(blackout_zones(&g, &BTreeSet::new(), g.edges()).is_empty());
    }

    #[test]
    fn foreign_endpoints_are_ignored() {
        let mut g = Graph::new();
        g.add_node("A");
        let outside = Edge {
            id: "x".into(),
            u: "A".into(),
            v: "ghost".into(),
            strength: 1.0,
            capacity: None,
            reinforce_cost: None,
        };
        let comps = connected_components(&g, &[outside]);
        assert_eq!(comps.len(), 1);
        assert_eq!(names(&comps[0]), vec!["A"]);
    }

    #[test]
    fn blackout_without_generators_is_everything() {
        let g = chain(2);
        let zones = blackout_zones(&g, &BTreeSet::new(), &[] as &[&Edge]);
        assert_eq!(zones.len(), 3);
    }

    #[test]
    fn blackout_excludes_powered_components() {
        let mut g = Graph::new();
        g.add_edge(NewEdge::new("A", "B", 1.0)).unwrap();
        g.add_edge(NewEdge::new("C", "D", 1.0)).unwrap();
        let generators: BTreeSet<NodeId> = [NodeId::from("A")].into_iter().collect();
        let zones = blackout_zones(&g, &generators, g.edges());
        assert_eq!(zones.len(), 1);
        assert_eq!(names(&zones[0]), vec!["C", "D"]);

        let both: BTreeSet<NodeId> = ["A", "D"].into_iter().map(NodeId::from).collect();
        assert!(blackout_zones(&g, &both, g.edges()).is_empty());
    }
}
