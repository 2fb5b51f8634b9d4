use super::definition::FlowGraph;
use crate::error::GraphConversionError;

/// A trait for host data models that can be converted into a `FlowGraph`.
///
/// The synthesizer never reads editor documents directly. Implement this trait
/// on your own structs to translate whatever your editor stores into the
/// ordered node list and connection list the synthesizer consumes.
///
/// # Example
///
/// ```rust
/// use deskcheck::diagram::{FlowGraph, FlowNode, IntoFlowGraph, NodeKind};
/// use deskcheck::error::GraphConversionError;
///
/// struct Step { id: u32, text: String }
/// struct Script { steps: Vec<Step> }
///
/// impl IntoFlowGraph for Script {
///     fn into_flow_graph(self) -> Result<FlowGraph, GraphConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|s| FlowNode::new(s.id.to_string(), NodeKind::Process, s.text))
///             .collect();
///         Ok(FlowGraph::new(nodes, vec![]))
///     }
/// }
/// ```
pub trait IntoFlowGraph {
    /// Consumes the object and converts it into a synthesizer-ready graph.
    fn into_flow_graph(self) -> Result<FlowGraph, GraphConversionError>;
}

impl IntoFlowGraph for FlowGraph {
    fn into_flow_graph(self) -> Result<FlowGraph, GraphConversionError> {
        Ok(self)
    }
}
