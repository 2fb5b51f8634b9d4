use clap::{Parser, ValueEnum};
use deskcheck::prelude::*;
use deskcheck::summary::build_prompt;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewCli {
    All,
    Summary,
    Start,
    End,
}

impl From<ViewCli> for ViewMode {
    fn from(view: ViewCli) -> Self {
        match view {
            ViewCli::All => ViewMode::All,
            ViewCli::Summary => ViewMode::Summary,
            ViewCli::Start => ViewMode::Start,
            ViewCli::End => ViewMode::End,
        }
    }
}

/// Generate the trace table of a flowchart diagram
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the exported diagram JSON file
    diagram_path: String,

    /// Number of rows (loop iterations or test cases) to generate, 3 to 50
    #[arg(short, long, default_value_t = 10)]
    tests: u64,

    /// Which rows of the generated table to show
    #[arg(short, long, value_enum, default_value = "all")]
    view: ViewCli,

    /// Print the full table as JSON instead of a text grid
    #[arg(long)]
    json: bool,

    /// Use English cell text instead of the Spanish defaults
    #[arg(long)]
    english: bool,

    /// Print the prompt a summarizer would receive for this diagram
    #[arg(long)]
    show_prompt: bool,

    /// Extra context appended to the prompt printed by --show-prompt
    #[arg(short, long, requires = "show_prompt")]
    context: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli);
}

fn run(cli: Cli) {
    let start = Instant::now();

    let diagram = Diagram::from_file(&cli.diagram_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load diagram '{}': {}",
            cli.diagram_path, e
        ))
    });
    let graph = diagram
        .into_flow_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert diagram: {}", e)));

    let labels = if cli.english {
        TraceLabels::english()
    } else {
        TraceLabels::default()
    };
    let synthesizer = Synthesizer::builder()
        .test_count(cli.tests)
        .view_mode(cli.view.into())
        .labels(labels)
        .build();

    let table = synthesizer.generate(&graph);
    info!(elapsed = ?start.elapsed(), "diagram processed");

    if cli.json {
        let json = table
            .to_json()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize table: {}", e)));
        println!("{}", json);
        return;
    }

    println!(
        "{} nodes, {} columns, {} rows ({})\n",
        graph.nodes.len(),
        table.columns.len(),
        table.rows.len(),
        table.strategy
    );
    print!("{}", TableFormatter::format_table(&table));
    if cli.show_prompt {
        println!("\n{}", build_prompt(&table.columns, cli.context.as_deref()));
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
