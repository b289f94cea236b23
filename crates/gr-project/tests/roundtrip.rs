use std::collections::BTreeSet;

use gr_core::NodeId;
use gr_graph::{Graph, NewEdge};
use gr_project::schema::*;
use gr_project::{
    ProjectError, ValidationError, load_document, load_json, load_yaml, save_document, save_json,
    save_yaml, validate_document,
};

fn simple_document() -> GraphDocument {
    GraphDocument {
        name: Some("two lines".to_string()),
        generators: vec!["A".to_string()],
        nodes: vec!["Z".to_string()],
        edges: vec![
            EdgeDef {
                id: Some("ab".to_string()),
                u: "A".to_string(),
                v: "B".to_string(),
                strength: 5.0,
                reinforce_cost: Some(1.5),
                capacity: None,
            },
            EdgeDef {
                id: None,
                u: "B".to_string(),
                v: "C".to_string(),
                strength: 2.0,
                reinforce_cost: None,
                capacity: Some(30.0),
            },
        ],
    }
}

#[test]
fn roundtrip_json() {
    let document = simple_document();
    validate_document(&document).unwrap();

    let path = std::env::temp_dir().join("gr_project_roundtrip.json");
    save_json(&path, &document).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(document, loaded);
}

#[test]
fn roundtrip_yaml() {
    let document = simple_document();

    let path = std::env::temp_dir().join("gr_project_roundtrip.yaml");
    save_yaml(&path, &document).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(document, loaded);
}

#[test]
fn roundtrip_by_extension() {
    let document = simple_document();
    let path = std::env::temp_dir().join("gr_project_roundtrip_ext.yml");
    save_document(&path, &document).unwrap();
    assert_eq!(load_document(&path).unwrap(), document);
}

#[test]
fn graph_to_document_and_back() {
    let mut graph = Graph::new();
    graph
        .add_edge(NewEdge::new("P", "Q", 9.0).with_reinforce_cost(0.3))
        .unwrap();
    graph
        .add_edge(NewEdge::new("Q", "R", 1.0).with_id("qr"))
        .unwrap();
    let generators: BTreeSet<NodeId> = [NodeId::from("P")].into_iter().collect();

    let document = GraphDocument::from_graph(&graph, &generators, None);
    let path = std::env::temp_dir().join("gr_project_from_graph.json");
    save_json(&path, &document).unwrap();

    let rebuilt = load_json(&path).unwrap();
    assert_eq!(rebuilt.generator_set(), generators);
    assert_eq!(rebuilt.to_graph().unwrap().edges(), graph.edges());
}

#[test]
fn saving_invalid_document_fails() {
    let path = std::env::temp_dir().join("gr_project_invalid.json");
    let err = save_json(&path, &GraphDocument::default()).unwrap_err();
    assert!(matches!(
        err,
        ProjectError::Validation(ValidationError::EmptyGraph)
    ));
}

#[test]
fn malformed_json_is_a_json_error() {
    let path = std::env::temp_dir().join("gr_project_malformed.json");
    std::fs::write(&path, "{ \"edges\": [ { \"u\": \"A\" } ] }").unwrap();
    assert!(matches!(load_json(&path), Err(ProjectError::Json(_))));
}
