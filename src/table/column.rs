use super::labels::TraceLabels;
use crate::diagram::{FlowGraph, FlowNode, NodeKind};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One node's slot in the trace table.
///
/// `label` is what the user sees and may rename freely; `original_label` is
/// what classification reads, so a cosmetic rename never changes the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub node_id: String,
    pub label: String,
    pub original_label: String,
}

impl Column {
    pub fn new(node_id: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            node_id: node_id.into(),
            original_label: label.clone(),
            label,
        }
    }

    /// Returns a copy of the column with a new display label.
    pub fn renamed(&self, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..self.clone()
        }
    }
}

/// Builds the trace-table columns for a graph.
///
/// Nodes are ordered breadth-first from the first start/end node, following
/// connections in the order they were declared. Start/end nodes themselves
/// never become columns. Without a start node, or when the traversal reaches
/// nothing, the input order of the non start/end nodes is used instead.
pub fn build_columns(graph: &FlowGraph, labels: &TraceLabels) -> Vec<Column> {
    let mut ordered = breadth_first_order(graph);
    if ordered.is_empty() {
        ordered = graph
            .nodes
            .iter()
            .filter(|n| n.kind != NodeKind::StartEnd)
            .collect();
    }

    ordered
        .into_iter()
        .map(|node| Column::new(node.id.clone(), column_label(node, labels)))
        .collect()
}

fn breadth_first_order(graph: &FlowGraph) -> Vec<&FlowNode> {
    let Some(start) = graph.nodes.iter().find(|n| n.kind == NodeKind::StartEnd) else {
        return Vec::new();
    };

    let by_id: AHashMap<&str, &FlowNode> =
        graph.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let mut outgoing: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for conn in &graph.connections {
        outgoing
            .entry(conn.from.as_str())
            .or_default()
            .push(conn.to.as_str());
    }

    let mut ordered = Vec::new();
    let mut visited = AHashSet::new();
    let mut queue = VecDeque::from([start.id.as_str()]);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        if let Some(node) = by_id.get(current) {
            if node.kind != NodeKind::StartEnd {
                ordered.push(*node);
            }
        }
        for &next in outgoing.get(current).into_iter().flatten() {
            if !visited.contains(next) {
                queue.push_back(next);
            }
        }
    }
    ordered
}

fn column_label(node: &FlowNode, labels: &TraceLabels) -> String {
    if node.label.is_empty() {
        let short_id: String = node.id.chars().take(4).collect();
        format!("{} {}", labels.unnamed_node, short_id)
    } else {
        node.label.clone()
    }
}
