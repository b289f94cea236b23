//! Integration test: the five-edge, four-node reference grid.
//!
//! Network: A-B(5) B-C(8) C-D(3) A-D(10) B-D(6), wind 7.0
//!
//! Checks:
//! - failure partition and resulting components
//! - Kruskal plan order and cycle rejection
//! - greedy pick and reinforced re-simulation
//! - `analyze` output for each method, with and without generators

use std::collections::BTreeSet;

use gr_core::{EdgeId, NodeId};
use gr_graph::{Graph, NewEdge};
use gr_sim::{GridAnalysis, SelectionMethod, analyze, rank_reinforcement_candidates};

fn reference_grid() -> Graph {
    let mut g = Graph::new();
    g.add_edge(NewEdge::new("A", "B", 5.0).with_id("e1")).unwrap();
    g.add_edge(NewEdge::new("B", "C", 8.0).with_id("e2")).unwrap();
    g.add_edge(NewEdge::new("C", "D", 3.0).with_id("e3")).unwrap();
    g.add_edge(NewEdge::new("A", "D", 10.0).with_id("e4")).unwrap();
    g.add_edge(NewEdge::new("B", "D", 6.0).with_id("e5")).unwrap();
    g
}

fn ids<'a>(iter: impl IntoIterator<Item = &'a EdgeId>) -> Vec<&'a str> {
    iter.into_iter().map(EdgeId::as_str).collect()
}

fn node_names(nodes: &[NodeId]) -> Vec<&str> {
    nodes.iter().map(NodeId::as_str).collect()
}

fn node_set(names: &[&str]) -> BTreeSet<NodeId> {
    names.iter().copied().map(NodeId::from).collect()
}

#[test]
fn wind_seven_partition() {
    let g = reference_grid();
    let part = g.simulate_wind_failures(7.0);
    assert_eq!(ids(part.failed_ids()), vec!["e1", "e3", "e5"]);
    assert_eq!(ids(part.surviving_ids()), vec!["e2", "e4"]);

    let comps = gr_sim::connected_components(&g, &part.surviving);
    assert_eq!(comps, vec![node_set(&["A", "D"]), node_set(&["B", "C"])]);
}

#[test]
fn kruskal_accepts_e4_e2_e5() {
    let g = reference_grid();
    let plan = g.kruskal_reinforcement_plan();
    let plan_ids: Vec<&str> = plan.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(plan_ids, vec!["e4", "e2", "e5"]);
    assert_eq!(plan.len(), g.node_count() - 1);

    let costs: Vec<f64> = plan.iter().map(|e| e.effective_reinforce_cost()).collect();
    assert!((costs[0] - 0.1).abs() < 1e-5);
    assert!((costs[1] - 0.125).abs() < 1e-5);
    assert!((costs[2] - 1.0 / 6.0).abs() < 1e-5);
}

#[test]
fn greedy_prefers_strongest_failing_edge() {
    // Every failing edge has benefit 1, so score is strength-ordered: e5 (6) > e1 (5) > e3 (3).
    let g = reference_grid();
    let ranked = rank_reinforcement_candidates(&g, 7.0);
    let order: Vec<&str> = ranked.iter().map(|c| c.edge_id.as_str()).collect();
    assert_eq!(order, vec!["e5", "e1", "e3"]);

    assert_eq!(ids(&g.greedy_select_top_k_reinforcements(7.0, 1)), vec!["e5"]);
    assert_eq!(g.greedy_select_top_k_reinforcements(7.0, 10).len(), 3);
}

#[test]
fn reinforcing_reduces_failures() {
    let g = reference_grid();
    let baseline = g.simulate_wind_failures(7.0).failed_count();
    let chosen: BTreeSet<EdgeId> = g.greedy_select_top_k_reinforcements(7.0, 1).into_iter().collect();
    let out = g.simulate_with_reinforcements(7.0, &chosen);
    assert_eq!(out.failed.len(), baseline - 1);
    assert_eq!(
        out.components,
        vec![node_set(&["A", "B", "C", "D"])],
        "e5 joins B-C with A-D"
    );
}

#[test]
fn analyze_greedy_with_generator() {
    let g = reference_grid();
    let gens = node_set(&["A"]);
    let res = analyze(&g, 7.0, SelectionMethod::Greedy, 1, Some(&gens)).unwrap();
    assert_eq!(ids(&res.selected), vec!["e5"]);
    assert_eq!(ids(&res.surviving), vec!["e2", "e4", "e5"]);
    assert_eq!(ids(&res.failed), vec!["e1", "e3"]);
    assert_eq!(res.components.len(), 1);
    assert_eq!(node_names(&res.components[0]), vec!["A", "B", "C", "D"]);
    assert!(res.blackout_zones.is_empty());
}

#[test]
fn analyze_mst_takes_plan_prefix() {
    let g = reference_grid();
    let res = analyze(&g, 7.0, SelectionMethod::Mst, 2, None).unwrap();
    assert_eq!(ids(&res.selected), vec!["e4", "e2"]);
    // e4 and e2 already survive, so nothing changes.
    assert_eq!(ids(&res.failed), vec!["e1", "e3", "e5"]);
}

#[test]
fn analyze_none_reports_blackouts() {
    let g = reference_grid();
    let gens = node_set(&["A"]);
    let res = analyze(&g, 7.0, SelectionMethod::None, 5, Some(&gens)).unwrap();
    assert!(res.selected.is_empty());
    assert_eq!(res.blackout_zones.len(), 1);
    assert_eq!(node_names(&res.blackout_zones[0]), vec!["B", "C"]);
}

#[test]
fn analyze_is_idempotent() {
    let g = reference_grid();
    let gens = node_set(&["A", "C"]);
    for method in SelectionMethod::ALL {
        let first = analyze(&g, 6.5, method, 2, Some(&gens)).unwrap();
        let second = analyze(&g, 6.5, method, 2, Some(&gens)).unwrap();
        assert_eq!(first, second);
    }
}
