//! The optional natural-language description of a flow.
//!
//! A summary is produced by an injected [`Summarizer`] after the rows are
//! materialized. It only ever sees the column list, and a failing summarizer
//! yields an empty string instead of affecting the table.

use crate::error::SummaryError;
use crate::table::Column;
use tracing::{debug, warn};

/// Sampling settings handed to the summarizer along with the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A capability that turns a prompt into a short description of the flow,
/// typically backed by a language model.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, request: &SummaryRequest) -> Result<String, SummaryError>;
}

impl<F> Summarizer for F
where
    F: Fn(&SummaryRequest) -> Result<String, SummaryError> + Send + Sync,
{
    fn summarize(&self, request: &SummaryRequest) -> Result<String, SummaryError> {
        self(request)
    }
}

/// Builds the prompt: the numbered column labels plus optional user context.
pub fn build_prompt(columns: &[Column], context: Option<&str>) -> String {
    let steps = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{}. {}", i + 1, col.label))
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = format!("Describe en 2 oraciones qué hace este algoritmo:\n{}", steps);
    if let Some(context) = context.map(str::trim).filter(|c| !c.is_empty()) {
        prompt.push_str("\n\nContexto adicional proporcionado por el usuario:\n");
        prompt.push_str(context);
    }
    prompt
}

/// Runs the summarizer, degrading every failure to an empty summary.
pub fn summarize_flow(
    summarizer: Option<&dyn Summarizer>,
    columns: &[Column],
    context: Option<&str>,
) -> String {
    let Some(summarizer) = summarizer else {
        return String::new();
    };

    let request = SummaryRequest {
        prompt: build_prompt(columns, context),
        temperature: 0.5,
        max_tokens: 150,
    };
    match summarizer.summarize(&request) {
        Ok(summary) => {
            debug!(chars = summary.len(), "flow summary generated");
            summary.trim().to_string()
        }
        Err(e) => {
            warn!(error = %e, "flow summary unavailable");
            String::new()
        }
    }
}
