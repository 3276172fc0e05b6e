// algotrace: step-by-step algorithm traces with terminal playback

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use algotrace::algorithms::{self, AlgorithmInput, AlgorithmKind};
use algotrace::catalog::{self, Category};
use algotrace::errors::{AlgoError, Result};
use algotrace::input::{self, DEFAULT_ARRAY, DEFAULT_SCRIPT};
use algotrace::normalize::{normalize, NormalizedStep};
use algotrace::playback::Playback;
use algotrace::trace::Trace;
use algotrace::ui::App;

/// Step-by-step traces of classic algorithms.
#[derive(Parser)]
#[command(name = "algotrace", version, about = "Step-by-step algorithm traces with terminal playback")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the algorithms that can be traced.
    List {
        /// Only show one category: sorting, searching, graph, data-structure.
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },

    /// Print every step of a trace as text.
    Show(InputArgs),

    /// Print the normalized trace as JSON.
    Export(InputArgs),

    /// Open the interactive player.
    Play {
        #[command(flatten)]
        input: InputArgs,

        /// Auto-play speed in steps per second.
        #[arg(short, long, default_value_t = 2.0)]
        speed: f64,
    },
}

/// Algorithm selection and its input.
#[derive(Args)]
struct InputArgs {
    /// Algorithm id, name, or alias (e.g. bubble-sort, "Quick Sort", bfs).
    algorithm: String,

    /// Numbers to sort or search, comma or space separated.
    #[arg(short, long, allow_hyphen_values = true)]
    array: Option<String>,

    /// Value to search for.
    #[arg(short, long, allow_negative_numbers = true)]
    target: Option<f64>,

    /// JSON graph file with `nodes`, `edges`, and optional `start`.
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Start node for graph algorithms.
    #[arg(long)]
    start: Option<String>,

    /// Destination node; Dijkstra finishes by tracing the path to it.
    #[arg(long)]
    to: Option<String>,

    /// Stack/queue script, e.g. "push 1, push 2, pop, peek".
    #[arg(long)]
    ops: Option<String>,
}

fn parse_category(s: &str) -> std::result::Result<Category, String> {
    Category::parse(s).ok_or_else(|| {
        format!(
            "unknown category '{}' (expected sorting, searching, graph, or data-structure)",
            s
        )
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::List { category } => {
            run_list(category);
            Ok(())
        }
        Commands::Show(args) => run_show(&args),
        Commands::Export(args) => run_export(&args),
        Commands::Play { input, speed } => run_play(&input, speed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_list(category: Option<Category>) {
    let records: Vec<_> = match category {
        Some(c) => catalog::by_category(c).collect(),
        None => catalog::all().iter().collect(),
    };
    for info in records {
        println!(
            "{:<22} {:<15} {:<13} time {:<22} space {}",
            info.id(),
            info.category,
            info.difficulty,
            info.time_complexity,
            info.space_complexity
        );
    }
}

/// Resolve the algorithm and fill in defaults for omitted inputs
fn build_input(args: &InputArgs) -> Result<(AlgorithmKind, AlgorithmInput)> {
    let kind = AlgorithmKind::from_name(&args.algorithm).ok_or_else(|| {
        AlgoError::UnknownAlgorithm {
            name: args.algorithm.clone(),
        }
    })?;

    let mut run_input = AlgorithmInput {
        array: match &args.array {
            Some(text) => input::parse_sequence(text)?,
            None => DEFAULT_ARRAY.to_vec(),
        },
        target: args.target,
        destination: args.to.clone(),
        ..Default::default()
    };

    match catalog::get(kind).category {
        Category::Graph => {
            let graph = match &args.graph {
                Some(path) => {
                    info!("Loading graph from {}", path.display());
                    input::load_graph(path)?
                }
                None => input::demo_graph(),
            };
            run_input.start = args.start.clone().or(graph.start);
            run_input.nodes = graph.nodes;
            run_input.edges = graph.edges;
        }
        Category::DataStructure => {
            let script = args.ops.as_deref().unwrap_or(DEFAULT_SCRIPT);
            run_input.operations = input::parse_operations(script)?;
        }
        Category::Sorting | Category::Searching => {}
    }

    Ok((kind, run_input))
}

fn build_trace(args: &InputArgs) -> Result<(AlgorithmKind, Trace<NormalizedStep>)> {
    let (kind, run_input) = build_input(args)?;
    let family = algorithms::run(kind, &run_input);
    let trace = normalize(&family);
    info!(
        "{}: {} steps, ~{} bytes",
        kind,
        trace.len(),
        trace.memory_usage()
    );
    if trace.is_empty() {
        warn!("{}: nothing to visualize (missing target or start node?)", kind);
    }
    Ok((kind, trace))
}

fn run_show(args: &InputArgs) -> Result<()> {
    let (kind, trace) = build_trace(args)?;
    if trace.is_empty() {
        println!("{}: nothing to visualize", kind);
        return Ok(());
    }

    println!("{} ({} steps)", kind, trace.len());
    let width = trace.len().to_string().len();
    for step in &trace {
        println!(
            "{:>width$}. {}",
            step.sequence_number + 1,
            step.description,
            width = width
        );
    }
    Ok(())
}

fn run_export(args: &InputArgs) -> Result<()> {
    let (_, trace) = build_trace(args)?;
    let json = serde_json::to_string_pretty(trace.steps()).map_err(io::Error::from)?;
    println!("{}", json);
    Ok(())
}

fn run_play(args: &InputArgs, speed: f64) -> Result<()> {
    let (kind, trace) = build_trace(args)?;
    let info = catalog::get(kind);
    info!("Starting player for {}", kind);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Playback::new(trace), info, speed);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
