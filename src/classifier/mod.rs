//! Label classification: maps a node kind and its label text to a
//! [`ColumnRole`] through an ordered registry of [`LabelMatcher`]s.

mod matchers;
pub mod role;

pub use matchers::LabelMatcher;
pub use role::*;

use crate::diagram::NodeKind;
use matchers::default_matchers;
use tracing::trace;

/// An ordered, first-match-wins registry of label matchers.
pub struct Classifier {
    matchers: Vec<Box<dyn LabelMatcher>>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            matchers: default_matchers(),
        }
    }

    /// Registers a matcher ahead of every built-in one.
    pub fn with_custom_matcher(mut self, matcher: Box<dyn LabelMatcher>) -> Self {
        self.matchers.insert(0, matcher);
        self
    }

    /// Classifies a label. `kind` is `None` when the column points at a node
    /// that no longer exists; such a column is always `Unknown`.
    pub fn classify(&self, kind: Option<NodeKind>, label: &str) -> ColumnRole {
        let Some(kind) = kind else {
            return ColumnRole::Unknown;
        };
        let label = label.trim();

        for matcher in &self.matchers {
            if let Some(role) = matcher.matches(kind, label) {
                trace!(matcher = matcher.name(), role = role.name(), label, "label classified");
                return role;
            }
        }
        ColumnRole::Unknown
    }
}

/// Classifies a label with the built-in matchers.
pub fn classify(kind: Option<NodeKind>, label: &str) -> ColumnRole {
    Classifier::new().classify(kind, label)
}
