//! Tests for label classification.
use deskcheck::classifier::{Comparison, InitVar, LoopCondition, LoopIncrement, classify};
use deskcheck::prelude::*;

fn role(kind: NodeKind, label: &str) -> ColumnRole {
    classify(Some(kind), label)
}

#[test]
fn test_connector_wins_regardless_of_label() {
    assert_eq!(role(NodeKind::Connector, "x = 1"), ColumnRole::Connector);
    assert_eq!(role(NodeKind::Connector, "A"), ColumnRole::Connector);
}

#[test]
fn test_data_node_without_assignment_is_input() {
    assert_eq!(
        role(NodeKind::Data, " a, b ,, c "),
        ColumnRole::Input {
            names: vec!["a".to_string(), "b".to_string(), "c".to_string()]
        }
    );
}

#[test]
fn test_display_and_document_nodes_are_outputs() {
    let expected = ColumnRole::Output {
        names: vec!["total".to_string(), "n".to_string()],
    };
    assert_eq!(role(NodeKind::Display, "total, n"), expected);
    assert_eq!(role(NodeKind::Document, "total, n"), expected);
}

#[test]
fn test_decision_condition() {
    assert_eq!(
        role(NodeKind::Decision, "i <= 10"),
        ColumnRole::Condition(LoopCondition {
            variable: "i".to_string(),
            operator: Comparison::LessOrEqual,
            limit: 10,
        })
    );
    assert_eq!(
        role(NodeKind::Decision, "contador!=3"),
        ColumnRole::Condition(LoopCondition {
            variable: "contador".to_string(),
            operator: Comparison::NotEqual,
            limit: 3,
        })
    );
}

#[test]
fn test_condition_requires_decision_node() {
    // A process node comparing values is not a loop condition.
    assert_eq!(role(NodeKind::Process, "i <= 10"), ColumnRole::Unknown);
}

#[test]
fn test_condition_requires_integer_limit() {
    assert_eq!(role(NodeKind::Decision, "i <= n"), ColumnRole::Unknown);
}

#[test]
fn test_increment_and_decrement() {
    assert_eq!(
        role(NodeKind::Process, "i = i + 2"),
        ColumnRole::Increment(LoopIncrement {
            variable: "i".to_string(),
            delta: 2,
        })
    );
    assert_eq!(
        role(NodeKind::Process, "i=i-3"),
        ColumnRole::Increment(LoopIncrement {
            variable: "i".to_string(),
            delta: -3,
        })
    );
}

#[test]
fn test_increment_needs_same_identifier() {
    // `j = i + 1` is an ordinary process step, not a loop step.
    assert_eq!(
        role(NodeKind::Process, "j = i + 1"),
        ColumnRole::Process {
            variable: "j".to_string(),
            expression: "i + 1".to_string(),
        }
    );
}

#[test]
fn test_process_assignment() {
    assert_eq!(
        role(NodeKind::Process, "promedio = (a + b) / 2"),
        ColumnRole::Process {
            variable: "promedio".to_string(),
            expression: "(a + b) / 2".to_string(),
        }
    );
}

#[test]
fn test_process_node_literal_assignment_is_process() {
    assert_eq!(
        role(NodeKind::Process, "x = 1"),
        ColumnRole::Process {
            variable: "x".to_string(),
            expression: "1".to_string(),
        }
    );
}

#[test]
fn test_init_with_multiple_assignments() {
    assert_eq!(
        role(NodeKind::Data, "i = 1, suma = 0"),
        ColumnRole::Init {
            assignments: vec![
                InitVar {
                    name: "i".to_string(),
                    value: 1
                },
                InitVar {
                    name: "suma".to_string(),
                    value: 0
                },
            ]
        }
    );
}

#[test]
fn test_init_declines_self_update() {
    // Contains a literal assignment, but also `i = i + 1`.
    assert_eq!(role(NodeKind::Data, "j = 0, i = i + 1"), ColumnRole::Unknown);
}

#[test]
fn test_init_never_on_decision() {
    assert_eq!(role(NodeKind::Decision, "x = 1"), ColumnRole::Unknown);
}

#[test]
fn test_overflowing_integer_declines() {
    assert_eq!(
        role(NodeKind::Data, "x = 99999999999999999999"),
        ColumnRole::Unknown
    );
    assert_eq!(
        role(NodeKind::Decision, "x <= 99999999999999999999"),
        ColumnRole::Unknown
    );
}

#[test]
fn test_word_list_is_display() {
    assert_eq!(role(NodeKind::Other, "resultado, total"), ColumnRole::Display);
    assert_eq!(role(NodeKind::Process, "Calcular promedio"), ColumnRole::Display);
}

#[test]
fn test_unknown_fallback() {
    assert_eq!(role(NodeKind::Process, "¿terminó?"), ColumnRole::Unknown);
    assert_eq!(role(NodeKind::Process, ""), ColumnRole::Unknown);
}

#[test]
fn test_label_is_trimmed() {
    assert_eq!(
        role(NodeKind::Decision, "  x < 4  "),
        ColumnRole::Condition(LoopCondition {
            variable: "x".to_string(),
            operator: Comparison::Less,
            limit: 4,
        })
    );
}

#[test]
fn test_missing_node_is_unknown() {
    assert_eq!(classify(None, "x = 1"), ColumnRole::Unknown);
}

struct PseudoCodeLoop;

impl LabelMatcher for PseudoCodeLoop {
    fn name(&self) -> &str {
        "pseudo-code-loop"
    }
    fn matches(&self, _kind: NodeKind, label: &str) -> Option<ColumnRole> {
        let rest = label.strip_prefix("mientras ")?;
        let (variable, limit) = rest.split_once(" <= ")?;
        Some(ColumnRole::Condition(LoopCondition {
            variable: variable.trim().to_string(),
            operator: Comparison::LessOrEqual,
            limit: limit.trim().parse().ok()?,
        }))
    }
}

#[test]
fn test_custom_matcher_takes_priority() {
    let classifier = Classifier::new().with_custom_matcher(Box::new(PseudoCodeLoop));

    assert_eq!(
        classifier.classify(Some(NodeKind::Process), "mientras n <= 7"),
        ColumnRole::Condition(LoopCondition {
            variable: "n".to_string(),
            operator: Comparison::LessOrEqual,
            limit: 7,
        })
    );
    // Everything else still goes through the built-in matchers.
    assert_eq!(
        classifier.classify(Some(NodeKind::Data), "a"),
        ColumnRole::Input {
            names: vec!["a".to_string()]
        }
    );
}
