use crate::analysis::FlowAnalysis;
use crate::classifier::ColumnRole;
use crate::expr::{self, format_number};
use crate::table::{Column, EMPTY_CELL, TraceRow};
use ahash::AHashMap;
use itertools::Itertools;
use rand::Rng;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use tracing::debug;

/// Range of the synthetic integer inputs generated for each test case.
pub const INPUT_RANGE: RangeInclusive<u32> = 1..=100;

/// Runs a straight-line program once per synthetic test case.
pub struct LinearExecutor<'a> {
    analysis: &'a FlowAnalysis,
    columns: &'a [Column],
}

impl<'a> LinearExecutor<'a> {
    pub fn new(analysis: &'a FlowAnalysis, columns: &'a [Column]) -> Self {
        Self { analysis, columns }
    }

    /// Produces one row per test case, `iteration` being the 1-based test index.
    pub fn run<R: Rng>(&self, test_count: u64, rng: &mut R) -> Vec<TraceRow> {
        (1..=test_count)
            .map(|iteration| {
                let state = self.generate_inputs(rng);
                self.execute(iteration, state)
            })
            .collect()
    }

    /// One random value per distinct declared input variable.
    fn generate_inputs<R: Rng>(&self, rng: &mut R) -> AHashMap<String, f64> {
        let mut state = AHashMap::new();
        for name in &self.analysis.input_vars {
            if !state.contains_key(name) {
                state.insert(name.clone(), f64::from(rng.random_range(INPUT_RANGE)));
            }
        }
        state
    }

    fn execute(&self, iteration: u64, mut state: AHashMap<String, f64>) -> TraceRow {
        let mut values = BTreeMap::new();
        for column in self.columns {
            let cell = match self.analysis.role_of(&column.node_id) {
                ColumnRole::Input { names } => names
                    .iter()
                    .map(|name| state.get(name).map_or_else(|| "?".to_string(), |v| format_number(*v)))
                    .join(", "),
                ColumnRole::Process {
                    variable,
                    expression,
                } => {
                    let result = evaluate_or_zero(expression, &state);
                    state.insert(variable.clone(), result);
                    format!("{} = {}", variable, format_number(result))
                }
                ColumnRole::Output { names } => show_values(names.iter().map(String::as_str), &state),
                ColumnRole::Display => {
                    let names = column.original_label.trim().split(',').map(str::trim);
                    show_values(names, &state)
                }
                _ => EMPTY_CELL.to_string(),
            };
            values.insert(column.node_id.clone(), cell);
        }
        TraceRow::new(iteration, values)
    }
}

/// Evaluates a process expression; any failure counts as `0`.
pub fn evaluate_or_zero(expression: &str, state: &AHashMap<String, f64>) -> f64 {
    match expr::evaluate(expression, state) {
        Ok(value) => value,
        Err(e) => {
            debug!(expression, error = %e, "expression evaluation failed, using 0");
            0.0
        }
    }
}

fn show_values<'n>(names: impl Iterator<Item = &'n str>, state: &AHashMap<String, f64>) -> String {
    names
        .map(|name| state.get(name).map_or_else(|| name.to_string(), |v| format_number(*v)))
        .join(", ")
}
