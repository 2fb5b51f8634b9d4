//! # Deskcheck - Trace Table Synthesis for Flowcharts
//!
//! **Deskcheck** turns a beginner-level flowchart into a *trace table*: one
//! column per node, one row per loop iteration or synthetic test case, each cell
//! showing what that node does on that row. It reads the labels the way a
//! student writes them (`x = 1`, `x <= 5`, `x = x + 1`, `input a, b`) and
//! either simulates the counted loop they describe or executes the straight-line
//! program with random inputs.
//!
//! ## Core Workflow
//!
//! The synthesizer is format-agnostic. It operates on a canonical [`diagram::FlowGraph`]:
//!
//! 1.  **Load Your Data**: Parse an exported editor document with [`diagram::Diagram`], or
//!     your own format into your own Rust structs.
//! 2.  **Convert to a Flow Graph**: Implement the `IntoFlowGraph` trait for your structs
//!     (the editor document already does).
//! 3.  **Configure**: Use `Synthesizer::builder` to choose the test count, view mode,
//!     labels and an optional summarizer.
//! 4.  **Generate**: Call `generate` and render the table, or project it through another
//!     view mode without regenerating.
//!
//! ## Quick Start
//!
//! ```rust
//! use deskcheck::prelude::*;
//!
//! let graph = FlowGraph::new(
//!     vec![
//!         FlowNode::new("s", NodeKind::StartEnd, "Inicio"),
//!         FlowNode::new("i", NodeKind::Data, "x = 1"),
//!         FlowNode::new("c", NodeKind::Decision, "x <= 5"),
//!         FlowNode::new("p", NodeKind::Display, "x"),
//!         FlowNode::new("u", NodeKind::Process, "x = x + 1"),
//!         FlowNode::new("e", NodeKind::StartEnd, "Fin"),
//!     ],
//!     vec![
//!         Connection::new("s", "i"),
//!         Connection::new("i", "c"),
//!         Connection::new("c", "p"),
//!         Connection::new("p", "u"),
//!         Connection::new("u", "c"),
//!         Connection::new("c", "e"),
//!     ],
//! );
//!
//! let synthesizer = Synthesizer::builder().test_count(10).build();
//! let table = synthesizer.generate(&graph);
//!
//! // Five passing checks plus the one that exits the loop.
//! assert_eq!(table.rows.len(), 6);
//! assert_eq!(table.rows[5].value("c"), Some("No"));
//!
//! println!("{}", TableFormatter::format_table(&table));
//! ```

pub mod analysis;
pub mod classifier;
pub mod diagram;
pub mod error;
pub mod expr;
pub mod planner;
pub mod prelude;
pub mod simulator;
pub mod summary;
pub mod synthesizer;
pub mod table;
pub mod trace;
pub mod view;
