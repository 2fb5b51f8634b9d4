use super::column::Column;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The sentinel rendered in a cell that has no value for a row.
pub const EMPTY_CELL: &str = "-";

/// One generated row: a loop iteration or a synthetic test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRow {
    pub id: String,
    pub iteration: u64,
    /// Cell text keyed by column node id; exactly one entry per column.
    pub values: BTreeMap<String, String>,
}

impl TraceRow {
    pub fn new(iteration: u64, values: BTreeMap<String, String>) -> Self {
        Self {
            id: format!("row-{}", iteration),
            iteration,
            values,
        }
    }

    /// A row where every column holds the empty sentinel.
    pub fn empty(iteration: u64, columns: &[Column]) -> Self {
        let values = columns
            .iter()
            .map(|c| (c.node_id.clone(), EMPTY_CELL.to_string()))
            .collect();
        Self::new(iteration, values)
    }

    pub fn value(&self, node_id: &str) -> Option<&str> {
        self.values.get(node_id).map(String::as_str)
    }
}
