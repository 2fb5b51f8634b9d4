//! Common test utilities for building flow graphs and inspecting tables.
use deskcheck::prelude::*;

fn graph(nodes: &[(&str, NodeKind, &str)], connections: &[(&str, &str)]) -> FlowGraph {
    FlowGraph::new(
        nodes
            .iter()
            .map(|(id, kind, label)| FlowNode::new(*id, *kind, *label))
            .collect(),
        connections
            .iter()
            .map(|(from, to)| Connection::new(*from, *to))
            .collect(),
    )
}

/// A counted loop.
///
/// Logic: `x = 1`; while `x <= 5` { print `x`; `x = x + 1` }
#[allow(dead_code)]
pub fn create_counting_loop() -> FlowGraph {
    create_loop("x = 1", "x <= 5", "x = x + 1")
}

/// A loop with the given init, condition and increment labels.
///
/// Columns, in order: `init`, `cond`, `show`, `step`. `show` is a bare `x`
/// on a process shape, which prints the counter on every passing row.
#[allow(dead_code)]
pub fn create_loop(init: &str, condition: &str, increment: &str) -> FlowGraph {
    graph(
        &[
            ("start", NodeKind::StartEnd, "Inicio"),
            ("init", NodeKind::Data, init),
            ("cond", NodeKind::Decision, condition),
            ("show", NodeKind::Process, "x"),
            ("step", NodeKind::Process, increment),
            ("end", NodeKind::StartEnd, "Fin"),
        ],
        &[
            ("start", "init"),
            ("init", "cond"),
            ("cond", "show"),
            ("cond", "end"),
            ("show", "step"),
            ("step", "cond"),
        ],
    )
}

/// A straight-line program: read `a, b`, compute `c = a + b`, show `c`.
///
/// Columns, in order: `read`, `sum`, `show`.
#[allow(dead_code)]
pub fn create_linear_sum() -> FlowGraph {
    create_linear("a, b", "c = a + b", "c")
}

#[allow(dead_code)]
pub fn create_linear(inputs: &str, process: &str, outputs: &str) -> FlowGraph {
    graph(
        &[
            ("start", NodeKind::StartEnd, "Inicio"),
            ("read", NodeKind::Data, inputs),
            ("sum", NodeKind::Process, process),
            ("show", NodeKind::Display, outputs),
            ("end", NodeKind::StartEnd, "Fin"),
        ],
        &[
            ("start", "read"),
            ("read", "sum"),
            ("sum", "show"),
            ("show", "end"),
        ],
    )
}

/// A graph that describes neither a loop nor a program reading inputs.
#[allow(dead_code)]
pub fn create_unrecognized_flow() -> FlowGraph {
    graph(
        &[
            ("start", NodeKind::StartEnd, "Inicio"),
            ("think", NodeKind::Process, "pensar en algo"),
            ("ask", NodeKind::Decision, "¿listo?"),
            ("end", NodeKind::StartEnd, "Fin"),
        ],
        &[("start", "think"), ("think", "ask"), ("ask", "end")],
    )
}

/// The synthetic rows `1..=count` with a single `"-"` column.
#[allow(dead_code)]
pub fn rows_with_iterations(iterations: impl IntoIterator<Item = u64>) -> Vec<TraceRow> {
    let columns = vec![Column::new("n", "n")];
    iterations
        .into_iter()
        .map(|i| TraceRow::empty(i, &columns))
        .collect()
}

/// The cells of one column, top to bottom.
#[allow(dead_code)]
pub fn column_values<'a>(rows: &'a [TraceRow], node_id: &str) -> Vec<&'a str> {
    rows.iter().map(|r| r.value(node_id).unwrap_or("<missing>")).collect()
}

#[allow(dead_code)]
pub fn iterations(rows: &[TraceRow]) -> Vec<u64> {
    rows.iter().map(|r| r.iteration).collect()
}
