use super::conversion::IntoFlowGraph;
use super::definition::{Connection, FlowGraph, FlowNode, NodeKind};
use crate::error::{DiagramError, GraphConversionError};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Viewport state saved alongside the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub zoom: f64,
    pub pan: Position,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Position::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Right,
    Bottom,
    Left,
}

/// A node as the editor stores it. The shape name is kept verbatim so that
/// palette shapes without a dedicated `NodeKind` survive a save/load cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramNode {
    pub id: String,
    #[serde(rename = "type")]
    pub shape: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub connections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramConnection {
    #[serde(default)]
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_anchor: Option<Anchor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_anchor: Option<Anchor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_point_offset: Option<Position>,
}

/// The exported editor document: `{ nodes, connections, canvas }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    #[serde(default)]
    pub nodes: Vec<DiagramNode>,
    #[serde(default)]
    pub connections: Vec<DiagramConnection>,
    #[serde(default)]
    pub canvas: Canvas,
}

impl Diagram {
    /// Parses an exported diagram document.
    pub fn from_json(json: &str) -> Result<Self, DiagramError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the diagram in the same pretty-printed form the editor exports.
    pub fn to_json(&self) -> Result<String, DiagramError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a diagram from a JSON file on disk.
    pub fn from_file(path: &str) -> Result<Self, DiagramError> {
        let content = fs::read_to_string(path).map_err(|source| DiagramError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Writes the diagram to a JSON file on disk.
    pub fn save(&self, path: &str) -> Result<(), DiagramError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| DiagramError::Io {
            path: path.to_string(),
            source,
        })
    }
}

impl IntoFlowGraph for Diagram {
    fn into_flow_graph(self) -> Result<FlowGraph, GraphConversionError> {
        let mut seen = AHashSet::new();
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for node in self.nodes {
            if !seen.insert(node.id.clone()) {
                return Err(GraphConversionError::ValidationError(format!(
                    "Duplicate node id '{}'",
                    node.id
                )));
            }
            nodes.push(FlowNode {
                kind: NodeKind::from_shape(&node.shape),
                id: node.id,
                label: node.label,
            });
        }

        let connections = self
            .connections
            .into_iter()
            .map(|c| Connection {
                from: c.from,
                to: c.to,
            })
            .collect();

        Ok(FlowGraph { nodes, connections })
    }
}
