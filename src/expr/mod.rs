//! Sandboxed arithmetic for process-node expressions.
//!
//! Process labels such as `c = (a + b) / 2` carry a small arithmetic
//! expression. It is tokenized, parsed into an [`Expression`] tree and
//! evaluated against the live variable state; nothing is ever handed to a
//! general-purpose evaluator.

pub mod engine;
pub mod expression;
pub mod parser;

pub use engine::ExpressionEngine;
pub use expression::{Expression, format_number};
pub use parser::{MAX_NESTING, MAX_TOKENS, parse};

use crate::error::ExpressionError;
use ahash::AHashMap;

/// Parses and evaluates `source` in one step.
pub fn evaluate(source: &str, bindings: &AHashMap<String, f64>) -> Result<f64, ExpressionError> {
    let expression = parse(source)?;
    ExpressionEngine::new(bindings).evaluate(&expression)
}
