//! Tests for folding column roles into a flow analysis.
mod common;
use common::*;
use deskcheck::analysis::ProcessStep;
use deskcheck::prelude::*;
use deskcheck::summary::build_prompt;

fn analyze(graph: &FlowGraph) -> FlowAnalysis {
    let synthesizer = Synthesizer::default();
    let columns = synthesizer.columns(graph);
    synthesizer.analyze(graph, &columns)
}

#[test]
fn test_loop_analysis() {
    let analysis = analyze(&create_counting_loop());

    assert!(!analysis.is_linear_algorithm());
    let (condition, increment) = analysis.loop_structure().unwrap();
    assert_eq!(condition.variable, "x");
    assert_eq!(condition.limit, 5);
    assert_eq!(increment.delta, 1);
    assert_eq!(analysis.initial_value("x"), 1);
    assert_eq!(analysis.initial_value("y"), 0);
    assert_eq!(analysis.role_of("show").name(), "display");
}

#[test]
fn test_loop_needs_an_init_var() {
    let graph = FlowGraph::new(
        vec![
            FlowNode::new("c", NodeKind::Decision, "x <= 3"),
            FlowNode::new("u", NodeKind::Process, "x = x + 1"),
        ],
        vec![Connection::new("c", "u")],
    );
    let analysis = analyze(&graph);
    assert!(analysis.condition.is_some());
    assert!(analysis.increment.is_some());
    assert!(analysis.loop_structure().is_none());
}

#[test]
fn test_linear_analysis() {
    let analysis = analyze(&create_linear_sum());

    assert!(analysis.is_linear_algorithm());
    assert_eq!(analysis.input_vars, vec!["a", "b"]);
    assert_eq!(
        analysis.operations,
        vec![ProcessStep {
            node_id: "sum".to_string(),
            variable: "c".to_string(),
            expression: "a + b".to_string(),
        }]
    );
    assert_eq!(analysis.output_vars[0].names, vec!["c"]);
}

#[test]
fn test_inputs_with_condition_are_not_linear() {
    let graph = FlowGraph::new(
        vec![
            FlowNode::new("r", NodeKind::Data, "n"),
            FlowNode::new("c", NodeKind::Decision, "n > 0"),
        ],
        vec![Connection::new("r", "c")],
    );
    assert!(!analyze(&graph).is_linear_algorithm());
}

#[test]
fn test_unseen_column_role_is_unknown() {
    let analysis = analyze(&create_counting_loop());
    assert_eq!(analysis.role_of("nowhere"), &ColumnRole::Unknown);
}

#[test]
fn test_summary_prompt() {
    let columns = vec![Column::new("a", "x = 1"), Column::new("b", "x <= 5")];

    assert_eq!(
        build_prompt(&columns, None),
        "Describe en 2 oraciones qué hace este algoritmo:\n1. x = 1\n2. x <= 5"
    );
    // Blank context is dropped.
    assert_eq!(build_prompt(&columns, Some("  ")), build_prompt(&columns, None));
    assert!(
        build_prompt(&columns, Some("cuenta"))
            .ends_with("\n\nContexto adicional proporcionado por el usuario:\ncuenta")
    );
}
