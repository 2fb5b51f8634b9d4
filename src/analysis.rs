use crate::classifier::{Classifier, ColumnRole, InitVar, LoopCondition, LoopIncrement};
use crate::diagram::{FlowGraph, NodeKind};
use crate::table::Column;
use ahash::AHashMap;
use serde::Serialize;
use tracing::debug;

static UNKNOWN_ROLE: ColumnRole = ColumnRole::Unknown;

/// A process column's assignment, `variable = expression`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub node_id: String,
    pub variable: String,
    pub expression: String,
}

/// The variable names an output column shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputStep {
    pub node_id: String,
    pub names: Vec<String>,
}

/// The implicit program reconstructed from every column's role.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FlowAnalysis {
    pub roles: AHashMap<String, ColumnRole>,
    pub init_vars: Vec<InitVar>,
    /// The last condition column encountered; earlier ones are discarded.
    pub condition: Option<LoopCondition>,
    /// The last increment column encountered; earlier ones are discarded.
    pub increment: Option<LoopIncrement>,
    pub input_vars: Vec<String>,
    pub operations: Vec<ProcessStep>,
    pub output_vars: Vec<OutputStep>,
}

impl FlowAnalysis {
    /// Classifies every column and folds the roles into one analysis.
    pub fn build(graph: &FlowGraph, columns: &[Column], classifier: &Classifier) -> Self {
        let kinds: AHashMap<&str, NodeKind> = graph
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), n.kind))
            .collect();

        let mut analysis = FlowAnalysis::default();
        for column in columns {
            let kind = kinds.get(column.node_id.as_str()).copied();
            let role = classifier.classify(kind, &column.original_label);
            analysis.record(&column.node_id, &role);
            analysis.roles.insert(column.node_id.clone(), role);
        }

        debug!(
            columns = columns.len(),
            init_vars = analysis.init_vars.len(),
            inputs = analysis.input_vars.len(),
            has_condition = analysis.condition.is_some(),
            has_increment = analysis.increment.is_some(),
            "flow analysis built"
        );
        analysis
    }

    fn record(&mut self, node_id: &str, role: &ColumnRole) {
        match role {
            ColumnRole::Init { assignments } => self.init_vars.extend(assignments.iter().cloned()),
            ColumnRole::Condition(condition) => {
                if let Some(previous) = self.condition.replace(condition.clone()) {
                    debug!(?previous, current = ?condition, "loop condition replaced");
                }
            }
            ColumnRole::Increment(increment) => {
                if let Some(previous) = self.increment.replace(increment.clone()) {
                    debug!(?previous, current = ?increment, "loop increment replaced");
                }
            }
            ColumnRole::Input { names } => self.input_vars.extend(names.iter().cloned()),
            ColumnRole::Output { names } => self.output_vars.push(OutputStep {
                node_id: node_id.to_string(),
                names: names.clone(),
            }),
            ColumnRole::Process {
                variable,
                expression,
            } => self.operations.push(ProcessStep {
                node_id: node_id.to_string(),
                variable: variable.clone(),
                expression: expression.clone(),
            }),
            ColumnRole::Connector | ColumnRole::Display | ColumnRole::Unknown => {}
        }
    }

    /// The role of a column, `Unknown` for columns the analysis never saw.
    pub fn role_of(&self, node_id: &str) -> &ColumnRole {
        self.roles.get(node_id).unwrap_or(&UNKNOWN_ROLE)
    }

    /// Input variables were found and no loop condition was.
    pub fn is_linear_algorithm(&self) -> bool {
        !self.input_vars.is_empty() && self.condition.is_none()
    }

    /// The init / condition / increment triple, when the graph has a complete loop.
    pub fn loop_structure(&self) -> Option<(&LoopCondition, &LoopIncrement)> {
        if self.init_vars.is_empty() {
            return None;
        }
        Some((self.condition.as_ref()?, self.increment.as_ref()?))
    }

    /// The initial value of `variable`, taken from the first matching init var.
    pub fn initial_value(&self, variable: &str) -> i64 {
        self.init_vars
            .iter()
            .find(|v| v.name == variable)
            .map_or(0, |v| v.value)
    }
}
