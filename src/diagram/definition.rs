use serde::{Deserialize, Serialize};

/// The semantic kind of a flowchart shape, as far as trace synthesis cares.
///
/// The editor palette has many more shapes than this; every shape without a
/// dedicated variant maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    StartEnd,
    Process,
    Decision,
    Data,
    Display,
    Document,
    Connector,
    #[serde(other)]
    Other,
}

impl NodeKind {
    /// Maps an editor shape name (e.g. `"start-end"`, `"loop-limit"`) to a kind.
    pub fn from_shape(shape: &str) -> Self {
        match shape {
            "start-end" => NodeKind::StartEnd,
            "process" => NodeKind::Process,
            "decision" => NodeKind::Decision,
            "data" => NodeKind::Data,
            "display" => NodeKind::Display,
            "document" => NodeKind::Document,
            "connector" => NodeKind::Connector,
            _ => NodeKind::Other,
        }
    }

    /// Display and document shapes both show values to the user.
    pub fn is_output(&self) -> bool {
        matches!(self, NodeKind::Display | NodeKind::Document)
    }
}

/// A single labeled node of the flowchart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
}

impl FlowNode {
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
        }
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// The canonical graph the synthesizer works on: an ordered node list plus
/// the connections used for breadth-first ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub connections: Vec<Connection>,
}

impl FlowGraph {
    pub fn new(nodes: Vec<FlowNode>, connections: Vec<Connection>) -> Self {
        Self { nodes, connections }
    }

    pub fn find_node(&self, node_id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }
}
