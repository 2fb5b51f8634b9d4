use serde::{Deserialize, Serialize};

/// Localized text used when rendering trace cells.
///
/// The defaults reproduce the Spanish-language editor the trace tables were
/// designed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceLabels {
    /// Condition cell when the loop condition holds.
    pub yes: String,
    /// Condition cell when the loop condition fails.
    pub no: String,
    /// Prefix of display cells inside a loop, e.g. `imprimir 3`.
    pub print: String,
    /// Prefix of connector cells, e.g. `Ir a A`.
    pub go_to: String,
    /// Prefix of the fallback column label given to unlabeled nodes.
    pub unnamed_node: String,
}

impl Default for TraceLabels {
    fn default() -> Self {
        Self {
            yes: "Sí".to_string(),
            no: "No".to_string(),
            print: "imprimir".to_string(),
            go_to: "Ir a".to_string(),
            unnamed_node: "Proceso".to_string(),
        }
    }
}

impl TraceLabels {
    /// English cell text, convenient for tests and non-Spanish hosts.
    pub fn english() -> Self {
        Self {
            yes: "Yes".to_string(),
            no: "No".to_string(),
            print: "print".to_string(),
            go_to: "go to".to_string(),
            unnamed_node: "Process".to_string(),
        }
    }

    pub fn condition(&self, holds: bool) -> &str {
        if holds { &self.yes } else { &self.no }
    }
}
