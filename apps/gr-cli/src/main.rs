use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use gr_app::{
    AnalysisOptions, AppError, AppResult, LoadedGraph, describe, load_sample, load_source,
    reinforcement_plan, render_summary, run_analysis, run_and_save, validate_file,
};
use gr_sim::SelectionMethod;
use tracing::Level;

#[derive(Parser)]
#[command(name = "gridrisk")]
#[command(about = "gridrisk - Wind-failure risk analysis for power grids", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select reinforcements, simulate a wind event and report the outcome
    Analyze {
        #[command(flatten)]
        source: SourceArgs,
        /// Wind speed; edges with strength below it fail
        #[arg(short, long, default_value_t = 7.0)]
        wind: f64,
        /// Reinforcement selection method (greedy, mst or none)
        #[arg(short, long, default_value = "greedy")]
        method: SelectionMethod,
        /// Number of edges to reinforce
        #[arg(short = 'k', long = "k", default_value_t = 1)]
        k: usize,
        /// Extra generator node ids (repeatable or comma separated)
        #[arg(short, long = "generators", value_delimiter = ',')]
        generators: Vec<String>,
        /// Write the report (with digest) to this JSON file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the Kruskal reinforcement plan with costs
    Plan {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List nodes, edges and reinforcement costs
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Validate a graph document
    Validate {
        /// Path to a JSON or YAML graph document
        path: PathBuf,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Path to a JSON or YAML graph document
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Name of a built-in sample grid (toy-4, ring-5)
    #[arg(long)]
    sample: Option<String>,
}

impl SourceArgs {
    fn label(&self) -> String {
        match (&self.file, &self.sample) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(name)) => format!("sample:{}", name.trim().to_ascii_lowercase()),
            (None, None) => String::new(),
        }
    }

    fn load(&self) -> AppResult<LoadedGraph> {
        match (&self.file, &self.sample) {
            (Some(path), _) => load_source(path),
            (None, Some(name)) => load_sample(name),
            (None, None) => Err(AppError::InvalidInput(
                "either --file or --sample is required".to_string(),
            )),
        }
    }
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            source,
            wind,
            method,
            k,
            generators,
            out,
        } => {
            let options = AnalysisOptions {
                wind_speed: wind,
                method,
                k,
                generators,
            };
            cmd_analyze(&source, &options, out.as_deref())
        }
        Commands::Plan { source } => cmd_plan(&source),
        Commands::Inspect { source } => cmd_inspect(&source),
        Commands::Validate { path } => cmd_validate(&path),
    }
}

fn cmd_analyze(
    source: &SourceArgs,
    options: &AnalysisOptions,
    out: Option<&Path>,
) -> AppResult<()> {
    let loaded = source.load()?;
    let label = source.label();

    let report = match out {
        Some(out) => {
            let file = run_and_save(&loaded, options, &label, out)?;
            println!("Report written to {} (digest {})", out.display(), file.digest);
            file.report
        }
        None => run_analysis(&loaded, options, &label)?,
    };
    print!("{}", render_summary(&report));
    Ok(())
}

fn cmd_plan(source: &SourceArgs) -> AppResult<()> {
    let loaded = source.load()?;
    let plan = reinforcement_plan(&loaded.graph);

    if plan.is_empty() {
        println!("No reinforcement plan (graph has no mergeable edges)");
        return Ok(());
    }
    let total: f64 = plan.iter().map(|e| e.effective_reinforce_cost).sum();
    println!("Reinforcement plan ({} edges, total cost {:.4}):", plan.len(), total);
    for (i, edge) in plan.iter().enumerate() {
        println!(
            "  {:>3}. {:<12} {} - {}  strength {:<8} cost {:.4}",
            i + 1,
            edge.id,
            edge.u,
            edge.v,
            edge.strength,
            edge.effective_reinforce_cost
        );
    }
    Ok(())
}

fn cmd_inspect(source: &SourceArgs) -> AppResult<()> {
    let loaded = source.load()?;
    let description = describe(&loaded.graph);

    if let Some(name) = &loaded.name {
        println!("Graph: {}", name);
    }
    println!(
        "{} nodes, {} edges",
        description.node_count, description.edge_count
    );
    println!("Nodes: {}", description.nodes.join(", "));
    if !loaded.generators.is_empty() {
        let generators: Vec<&str> = loaded.generators.iter().map(|g| g.as_str()).collect();
        println!("Generators: {}", generators.join(", "));
    }
    println!("Edges:");
    for edge in &description.edges {
        let capacity = edge
            .capacity
            .map(|c| format!("  capacity {}", c))
            .unwrap_or_default();
        println!(
            "  {:<12} {} - {}  strength {:<8} cost {:.4}{}",
            edge.id, edge.u, edge.v, edge.strength, edge.effective_reinforce_cost, capacity
        );
    }
    Ok(())
}

fn cmd_validate(path: &Path) -> AppResult<()> {
    println!("Validating graph document: {}", path.display());
    let document = validate_file(path)?;
    println!(
        "✓ Document is valid ({} edges, {} listed nodes, {} generators)",
        document.edges.len(),
        document.nodes.len(),
        document.generators.len()
    );
    Ok(())
}
