use crate::analysis::FlowAnalysis;
use crate::classifier::Classifier;
use crate::diagram::FlowGraph;
use crate::simulator::{LinearExecutor, LoopSimulator, SimulationStrategy, placeholder_rows};
use crate::summary::{Summarizer, summarize_flow};
use crate::table::{Column, TraceLabels, TraceRow, build_columns};
use crate::view::{ViewMode, ViewWindow, select_window};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

pub const MIN_TEST_COUNT: u64 = 3;
pub const MAX_TEST_COUNT: u64 = 50;
pub const DEFAULT_TEST_COUNT: u64 = 10;

/// A generated trace table, ready to be windowed and rendered.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceTable {
    pub columns: Vec<Column>,
    pub rows: Vec<TraceRow>,
    pub flow_analysis_summary: String,
    pub strategy: SimulationStrategy,
    pub view_mode: ViewMode,
}

impl TraceTable {
    /// The rows as seen through the view mode the table was generated for.
    pub fn view(&self) -> ViewWindow {
        select_window(&self.rows, self.view_mode)
    }

    /// The rows as seen through another view mode, without regenerating.
    pub fn window(&self, mode: ViewMode) -> ViewWindow {
        select_window(&self.rows, mode)
    }

    /// Changes a column's display label. Roles are unaffected.
    pub fn rename_column(&mut self, node_id: &str, label: &str) -> bool {
        match self.columns.iter_mut().find(|c| c.node_id == node_id) {
            Some(column) => {
                column.label = label.to_string();
                true
            }
            None => false,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub struct SynthesizerBuilder {
    test_count: u64,
    view_mode: ViewMode,
    labels: TraceLabels,
    classifier: Classifier,
    summarizer: Option<Box<dyn Summarizer>>,
    summary_context: Option<String>,
}

impl Default for SynthesizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SynthesizerBuilder {
    pub fn new() -> Self {
        Self {
            test_count: DEFAULT_TEST_COUNT,
            view_mode: ViewMode::default(),
            labels: TraceLabels::default(),
            classifier: Classifier::new(),
            summarizer: None,
            summary_context: None,
        }
    }

    /// Requested rows; clamped to `MIN_TEST_COUNT..=MAX_TEST_COUNT` on build.
    pub fn test_count(mut self, test_count: u64) -> Self {
        self.test_count = test_count;
        self
    }

    pub fn view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn labels(mut self, labels: TraceLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn summarizer(mut self, summarizer: impl Summarizer + 'static) -> Self {
        self.summarizer = Some(Box::new(summarizer));
        self
    }

    /// Extra context appended to the summary prompt.
    pub fn summary_context(mut self, context: impl Into<String>) -> Self {
        self.summary_context = Some(context.into());
        self
    }

    pub fn build(self) -> Synthesizer {
        let test_count = self.test_count.clamp(MIN_TEST_COUNT, MAX_TEST_COUNT);
        if test_count != self.test_count {
            debug!(requested = self.test_count, test_count, "test count clamped");
        }
        Synthesizer {
            test_count,
            view_mode: self.view_mode,
            labels: self.labels,
            classifier: self.classifier,
            summarizer: self.summarizer,
            summary_context: self.summary_context,
        }
    }
}

/// Turns a flow graph into a trace table.
///
/// Generation never fails: unrecognized labels render as empty cells and a
/// graph with no recognizable program still yields placeholder rows.
pub struct Synthesizer {
    test_count: u64,
    view_mode: ViewMode,
    labels: TraceLabels,
    classifier: Classifier,
    summarizer: Option<Box<dyn Summarizer>>,
    summary_context: Option<String>,
}

impl Default for Synthesizer {
    fn default() -> Self {
        SynthesizerBuilder::new().build()
    }
}

impl Synthesizer {
    pub fn builder() -> SynthesizerBuilder {
        SynthesizerBuilder::new()
    }

    pub fn test_count(&self) -> u64 {
        self.test_count
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn labels(&self) -> &TraceLabels {
        &self.labels
    }

    /// The graph's columns in breadth-first order from the start node.
    pub fn columns(&self, graph: &FlowGraph) -> Vec<Column> {
        build_columns(graph, &self.labels)
    }

    pub fn analyze(&self, graph: &FlowGraph, columns: &[Column]) -> FlowAnalysis {
        FlowAnalysis::build(graph, columns, &self.classifier)
    }

    /// Builds the columns and generates the table.
    pub fn generate(&self, graph: &FlowGraph) -> TraceTable {
        let columns = self.columns(graph);
        self.generate_with_columns(graph, columns)
    }

    /// Generates the table for an existing, possibly renamed, column list.
    pub fn generate_with_columns(&self, graph: &FlowGraph, columns: Vec<Column>) -> TraceTable {
        self.generate_with_rng(graph, columns, &mut rand::rng())
    }

    /// Like [`Synthesizer::generate_with_columns`] with an explicit source of
    /// randomness for the linear path's synthetic inputs.
    pub fn generate_with_rng<R: Rng>(
        &self,
        graph: &FlowGraph,
        columns: Vec<Column>,
        rng: &mut R,
    ) -> TraceTable {
        let analysis = self.analyze(graph, &columns);
        let (rows, strategy) = self.simulate(&analysis, &columns, rng);
        info!(
            strategy = %strategy,
            rows = rows.len(),
            columns = columns.len(),
            "trace table generated"
        );

        let flow_analysis_summary = summarize_flow(
            self.summarizer.as_deref(),
            &columns,
            self.summary_context.as_deref(),
        );

        TraceTable {
            columns,
            rows,
            flow_analysis_summary,
            strategy,
            view_mode: self.view_mode,
        }
    }

    fn simulate<R: Rng>(
        &self,
        analysis: &FlowAnalysis,
        columns: &[Column],
        rng: &mut R,
    ) -> (Vec<TraceRow>, SimulationStrategy) {
        if let Some(simulator) = LoopSimulator::new(analysis, columns, &self.labels) {
            let planned_iterations = simulator.planned_iterations();
            let split = self.view_mode == ViewMode::Summary && simulator.splits_in_summary();
            let rows = if split {
                simulator.run_summary()
            } else {
                simulator.run(self.test_count)
            };
            return (
                rows,
                SimulationStrategy::Loop {
                    planned_iterations,
                    split,
                },
            );
        }

        if analysis.is_linear_algorithm() {
            let rows = LinearExecutor::new(analysis, columns).run(self.test_count, rng);
            return (rows, SimulationStrategy::Linear);
        }

        debug!("no loop or input structure found, emitting placeholder rows");
        (
            placeholder_rows(self.test_count, columns),
            SimulationStrategy::Placeholder,
        )
    }
}
