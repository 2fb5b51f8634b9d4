use crate::table::{Column, TraceRow};

/// Cap on the number of rows of an uninformative table.
pub const MAX_PLACEHOLDER_ROWS: u64 = 10;

/// Rows for a graph with neither a loop nor inputs: every cell is empty.
pub fn placeholder_rows(test_count: u64, columns: &[Column]) -> Vec<TraceRow> {
    (1..=test_count.min(MAX_PLACEHOLDER_ROWS))
        .map(|iteration| TraceRow::empty(iteration, columns))
        .collect()
}
