use crate::analysis::FlowAnalysis;
use crate::classifier::{ColumnRole, LoopCondition, LoopIncrement};
use crate::planner::plan_iterations;
use crate::table::{Column, EMPTY_CELL, TraceLabels, TraceRow};
use ahash::AHashMap;
use itertools::Itertools;
use std::collections::BTreeMap;
use tracing::debug;

/// Plans above this size are split into head and tail segments in summary mode.
pub const SUMMARY_SPLIT_THRESHOLD: u64 = 6;

/// Executes a counted loop one iteration at a time, one row per iteration.
pub struct LoopSimulator<'a> {
    analysis: &'a FlowAnalysis,
    columns: &'a [Column],
    labels: &'a TraceLabels,
    condition: &'a LoopCondition,
    increment: &'a LoopIncrement,
    /// Tracked in `i128` so stepping past `i64` bounds still fails the check.
    init: i128,
    /// Init vars other than the loop counter, visible to display cells.
    state: AHashMap<&'a str, i64>,
    planned: u64,
}

impl<'a> LoopSimulator<'a> {
    /// Returns `None` unless the analysis found an init / condition / increment triple.
    pub fn new(
        analysis: &'a FlowAnalysis,
        columns: &'a [Column],
        labels: &'a TraceLabels,
    ) -> Option<Self> {
        let (condition, increment) = analysis.loop_structure()?;
        let init = analysis.initial_value(&condition.variable);
        let state = analysis
            .init_vars
            .iter()
            .filter(|v| v.name != condition.variable)
            .map(|v| (v.name.as_str(), v.value))
            .collect();
        let planned = plan_iterations(condition, increment, init);
        debug!(
            variable = %condition.variable,
            init,
            limit = condition.limit,
            delta = increment.delta,
            planned,
            "loop planned"
        );

        Some(Self {
            analysis,
            columns,
            labels,
            condition,
            increment,
            init: i128::from(init),
            state,
            planned,
        })
    }

    /// Planned rows, including the terminal failing check.
    pub fn planned_iterations(&self) -> u64 {
        self.planned
    }

    /// Whether summary mode simulates only the head and tail of this loop.
    pub fn splits_in_summary(&self) -> bool {
        self.planned > SUMMARY_SPLIT_THRESHOLD
    }

    /// Simulates `min(test_count, planned)` iterations in one contiguous pass.
    pub fn run(&self, test_count: u64) -> Vec<TraceRow> {
        let mut rows = Vec::new();
        self.run_segment(1, test_count.min(self.planned), self.init, &mut rows);
        rows
    }

    /// Simulates the first and last thirds of the whole loop, skipping the middle.
    ///
    /// The tail's starting value is derived as `init + skipped * delta` instead
    /// of replaying the skipped iterations. Meant for plans where
    /// [`LoopSimulator::splits_in_summary`] holds; smaller plans yield one head segment.
    pub fn run_summary(&self) -> Vec<TraceRow> {
        let third = self.planned.div_ceil(3).max(2);
        let mut rows = Vec::new();
        let head_completed = self.run_segment(1, third.min(self.planned), self.init, &mut rows);

        let tail_start = self.planned.saturating_sub(third);
        if head_completed && tail_start > third {
            let start_value = self.init + tail_start as i128 * self.increment.delta as i128;
            self.run_segment(tail_start + 1, self.planned, start_value, &mut rows);
        }
        rows
    }

    /// Runs iterations `first..=last` starting from `value`. Returns `false`
    /// when the condition failed and the segment stopped early.
    fn run_segment(&self, first: u64, last: u64, mut value: i128, rows: &mut Vec<TraceRow>) -> bool {
        for iteration in first..=last {
            let (row, holds) = self.render_row(iteration, value);
            rows.push(row);
            if !holds {
                return false;
            }
            value += i128::from(self.increment.delta);
        }
        true
    }

    fn render_row(&self, iteration: u64, value: i128) -> (TraceRow, bool) {
        let holds = self.condition.holds_for(value);
        let values: BTreeMap<String, String> = self
            .columns
            .iter()
            .map(|column| {
                let cell = self.render_cell(column, iteration, value, holds);
                (column.node_id.clone(), cell)
            })
            .collect();
        (TraceRow::new(iteration, values), holds)
    }

    fn render_cell(&self, column: &Column, iteration: u64, value: i128, holds: bool) -> String {
        match self.analysis.role_of(&column.node_id) {
            ColumnRole::Init { .. } if iteration == 1 => {
                self.analysis.init_vars.iter().join(", ")
            }
            ColumnRole::Condition(_) => self.labels.condition(holds).to_string(),
            ColumnRole::Display if holds => {
                let names = column.original_label.trim().split(',').map(str::trim);
                self.print_cell(names, value)
            }
            ColumnRole::Increment(_) if holds => format!(
                "{} = {}",
                self.increment.variable,
                value + i128::from(self.increment.delta)
            ),
            ColumnRole::Connector if holds => {
                format!("{} {}", self.labels.go_to, column.label.trim())
            }
            _ => EMPTY_CELL.to_string(),
        }
    }

    fn print_cell<'n>(&self, names: impl Iterator<Item = &'n str>, value: i128) -> String {
        let shown = names
            .map(|name| {
                if name == self.increment.variable {
                    value.to_string()
                } else {
                    self.state
                        .get(name)
                        .map_or_else(|| name.to_string(), i64::to_string)
                }
            })
            .join(", ");
        format!("{} {}", self.labels.print, shown)
    }
}
