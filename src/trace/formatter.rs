use crate::synthesizer::TraceTable;
use crate::table::{Column, EMPTY_CELL, TraceRow};
use crate::view::ViewWindow;

const ITERATION_HEADER: &str = "#";

/// Formats trace tables into aligned plain-text grids
pub struct TableFormatter;

impl TableFormatter {
    /// Format a table through the view mode it was generated for.
    pub fn format_table(table: &TraceTable) -> String {
        Self::format_window(&table.columns, &table.view())
    }

    /// Format a windowed row set, drawing the ellipsis marker where the window puts it.
    pub fn format_window(columns: &[Column], window: &ViewWindow) -> String {
        let header: Vec<&str> = std::iter::once(ITERATION_HEADER)
            .chain(columns.iter().map(|c| c.label.as_str()))
            .collect();
        let body: Vec<Vec<String>> = window
            .rows
            .iter()
            .map(|row| Self::row_cells(columns, row))
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        Self::push_line(&mut out, header.as_slice(), &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        Self::push_line(&mut out, rule.as_slice(), &widths);

        for (index, cells) in body.iter().enumerate() {
            if window.show_ellipsis && window.ellipsis_index == Some(index) {
                out.push_str(&Self::ellipsis_line(window.hidden_count));
                out.push('\n');
            }
            Self::push_line(&mut out, cells.as_slice(), &widths);
        }
        out
    }

    fn row_cells(columns: &[Column], row: &TraceRow) -> Vec<String> {
        std::iter::once(row.iteration.to_string())
            .chain(
                columns
                    .iter()
                    .map(|c| row.value(&c.node_id).unwrap_or(EMPTY_CELL).to_string()),
            )
            .collect()
    }

    fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| Self::pad(cell.as_ref(), *width))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    // Width is counted in chars, not bytes.
    fn pad(cell: &str, width: usize) -> String {
        let fill = width.saturating_sub(cell.chars().count());
        format!("{}{}", cell, " ".repeat(fill))
    }

    fn ellipsis_line(hidden: u64) -> String {
        match hidden {
            1 => "... (1 row hidden)".to_string(),
            n => format!("... ({} rows hidden)", n),
        }
    }
}
