//! Tests for the editor document model and its conversion to a flow graph.
use deskcheck::error::{DiagramError, GraphConversionError};
use deskcheck::prelude::*;

const COUNTING_DIAGRAM: &str = r##"{
  "nodes": [
    {
      "id": "n1", "type": "start-end",
      "position": { "x": 100, "y": 20 }, "size": { "width": 120, "height": 50 },
      "label": "Inicio", "connections": ["n2"]
    },
    {
      "id": "n2", "type": "data",
      "position": { "x": 100, "y": 100 }, "size": { "width": 120, "height": 50 },
      "label": "i = 1", "color": "#e0f2fe", "connections": ["n3"]
    },
    {
      "id": "n3", "type": "decision",
      "position": { "x": 100, "y": 180 }, "size": { "width": 120, "height": 80 },
      "label": "i <= 3", "connections": ["n4", "n6"]
    },
    {
      "id": "n4", "type": "display",
      "position": { "x": 100, "y": 290 }, "size": { "width": 120, "height": 50 },
      "label": "i", "connections": ["n5"]
    },
    {
      "id": "n5", "type": "process",
      "position": { "x": 100, "y": 370 }, "size": { "width": 120, "height": 50 },
      "label": "i = i + 1", "connections": ["n3"]
    },
    {
      "id": "n6", "type": "start-end",
      "position": { "x": 300, "y": 180 }, "size": { "width": 120, "height": 50 },
      "label": "Fin", "connections": []
    }
  ],
  "connections": [
    { "id": "c1", "from": "n1", "to": "n2", "fromAnchor": "bottom", "toAnchor": "top" },
    { "id": "c2", "from": "n2", "to": "n3" },
    { "id": "c3", "from": "n3", "to": "n4", "label": "Sí" },
    { "id": "c4", "from": "n3", "to": "n6", "label": "No", "controlPointOffset": { "x": 10, "y": 0 } },
    { "id": "c5", "from": "n4", "to": "n5" },
    { "id": "c6", "from": "n5", "to": "n3" }
  ],
  "canvas": { "zoom": 1.25, "pan": { "x": -40, "y": 0 } }
}"##;

#[test]
fn test_parse_editor_document() {
    let diagram = Diagram::from_json(COUNTING_DIAGRAM).unwrap();

    assert_eq!(diagram.nodes.len(), 6);
    assert_eq!(diagram.nodes[1].color.as_deref(), Some("#e0f2fe"));
    assert_eq!(diagram.connections[3].label.as_deref(), Some("No"));
    assert_eq!(diagram.canvas.zoom, 1.25);
}

#[test]
fn test_document_round_trip() {
    let diagram = Diagram::from_json(COUNTING_DIAGRAM).unwrap();
    let reparsed = Diagram::from_json(&diagram.to_json().unwrap()).unwrap();
    assert_eq!(diagram, reparsed);

    let json = diagram.to_json().unwrap();
    assert!(json.contains("\"type\": \"start-end\""));
    assert!(json.contains("\"fromAnchor\": \"bottom\""));
}

#[test]
fn test_missing_fields_take_defaults() {
    let diagram = Diagram::from_json(r#"{ "nodes": [{ "id": "a", "type": "process" }] }"#).unwrap();
    assert_eq!(diagram.nodes[0].label, "");
    assert!(diagram.connections.is_empty());
    assert_eq!(diagram.canvas.zoom, 1.0);

    let diagram = Diagram::from_json(r#"{ "canvas": { "zoom": 2 } }"#).unwrap();
    assert_eq!(diagram.canvas.zoom, 2.0);
}

#[test]
fn test_invalid_json_is_an_error() {
    let result = Diagram::from_json("{ \"nodes\": [ }");
    assert!(matches!(result, Err(DiagramError::JsonParseError(_))));
}

#[test]
fn test_missing_file_is_an_error() {
    let result = Diagram::from_file("does/not/exist.json");
    assert!(matches!(result, Err(DiagramError::Io { .. })));
}

#[test]
fn test_conversion_maps_shapes() {
    let graph = Diagram::from_json(COUNTING_DIAGRAM)
        .unwrap()
        .into_flow_graph()
        .unwrap();

    let kinds: Vec<NodeKind> = graph.nodes.iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::StartEnd,
            NodeKind::Data,
            NodeKind::Decision,
            NodeKind::Display,
            NodeKind::Process,
            NodeKind::StartEnd,
        ]
    );
    assert_eq!(graph.connections.len(), 6);
    assert_eq!(graph.find_node("n5").map(|n| n.label.as_str()), Some("i = i + 1"));
}

#[test]
fn test_unsupported_shapes_become_other() {
    let diagram = Diagram::from_json(
        r#"{ "nodes": [
            { "id": "a", "type": "loop-limit", "label": "i" },
            { "id": "b", "type": "manual-input", "label": "x = 3" }
        ] }"#,
    )
    .unwrap();
    let graph = diagram.clone().into_flow_graph().unwrap();
    assert!(graph.nodes.iter().all(|n| n.kind == NodeKind::Other));

    // The shape name itself survives a save/load cycle.
    let reparsed = Diagram::from_json(&diagram.to_json().unwrap()).unwrap();
    assert_eq!(reparsed.nodes[0].shape, "loop-limit");
}

#[test]
fn test_node_kind_serde() {
    assert_eq!(
        serde_json::to_string(&NodeKind::StartEnd).unwrap(),
        "\"start-end\""
    );
    let kind: NodeKind = serde_json::from_str("\"merge\"").unwrap();
    assert_eq!(kind, NodeKind::Other);
}

#[test]
fn test_duplicate_node_ids_are_rejected() {
    let diagram = Diagram::from_json(
        r#"{ "nodes": [
            { "id": "a", "type": "process", "label": "x = 1" },
            { "id": "a", "type": "data", "label": "y" }
        ] }"#,
    )
    .unwrap();
    let result = diagram.into_flow_graph();
    assert!(matches!(
        result,
        Err(GraphConversionError::ValidationError(msg)) if msg.contains("'a'")
    ));
}

#[test]
fn test_document_generates_trace_table() {
    let graph = Diagram::from_json(COUNTING_DIAGRAM)
        .unwrap()
        .into_flow_graph()
        .unwrap();
    let table = Synthesizer::default().generate(&graph);

    let conditions: Vec<&str> = table.rows.iter().map(|r| r.value("n3").unwrap()).collect();
    assert_eq!(conditions, vec!["Sí", "Sí", "Sí", "No"]);
    // A display-shape node is an output column, which stays empty inside loops.
    assert!(table.rows.iter().all(|r| r.value("n4") == Some("-")));
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("deskcheck-diagram-{}.json", std::process::id()));
    let path = path.to_str().unwrap();

    let diagram = Diagram::from_json(COUNTING_DIAGRAM).unwrap();
    diagram.save(path).unwrap();
    let loaded = Diagram::from_file(path).unwrap();
    std::fs::remove_file(path).unwrap();

    assert_eq!(diagram, loaded);
}
