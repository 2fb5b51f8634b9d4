//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the deskcheck crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use deskcheck::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph = Diagram::from_file("path/to/diagram.json")?.into_flow_graph()?;
//!
//! let synthesizer = Synthesizer::builder()
//!     .test_count(8)
//!     .view_mode(ViewMode::Summary)
//!     .build();
//! let table = synthesizer.generate(&graph);
//!
//! println!("{}", TableFormatter::format_table(&table));
//! # Ok(())
//! # }
//! ```

// Synthesis
pub use crate::synthesizer::{Synthesizer, SynthesizerBuilder, TraceTable};

// Graph model and conversion
pub use crate::diagram::{Connection, Diagram, FlowGraph, FlowNode, IntoFlowGraph, NodeKind};

// Table model and views
pub use crate::table::{Column, TraceLabels, TraceRow};
pub use crate::view::{ViewMode, ViewWindow};

// Classification and analysis
pub use crate::analysis::FlowAnalysis;
pub use crate::classifier::{Classifier, ColumnRole, LabelMatcher};

// Summaries
pub use crate::summary::{Summarizer, SummaryRequest};

// Error types
pub use crate::error::{DiagramError, ExpressionError, GraphConversionError, SummaryError};

// Table formatting
pub use crate::trace::TableFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
