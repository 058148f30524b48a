//! Ripple CLI - compile-impact analysis from the command line.
//!
//! Loads a dependency graph snapshot (JSON) and answers impact, closure,
//! depth and path queries against it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use ripple::{Config, DependencyGraph};
use tracing_subscriber::EnvFilter;

mod cli;

/// Ripple: compile-impact and dependency path analysis for build graphs.
#[derive(Parser)]
#[command(name = "ripple")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Graph snapshot (JSON); overrides `graph` in the config file
    #[arg(short, long, global = true)]
    graph: Option<PathBuf>,

    /// Config file (defaults to ./ripple.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every unit whose change forces a unit to recompile
    Impact {
        /// Unit id
        unit: String,
    },

    /// Classify every reachable unit as a compile, export or runtime dependency
    Closure {
        /// Unit id
        unit: String,
    },

    /// Show the hop count from a unit to everything it reaches
    Depths {
        /// Unit id
        unit: String,
    },

    /// Find the shortest dependency path between two units
    Path {
        /// Source unit id
        from: String,

        /// Target unit id
        to: String,

        /// Require the first hop to be a compile edge
        #[arg(long)]
        compile: bool,
    },

    /// For each unit, list the given units it forces to recompile
    Affected {
        /// Roots to analyze (defaults to every unit in the graph)
        units: Vec<String>,
    },
}

fn run(cli: Cli) -> ripple::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;
    let graph_path = config.graph_path(cli.graph)?;
    let graph = DependencyGraph::<String>::from_path(&graph_path)?;

    let output = cli::Output {
        json: cli.json || config.json,
        max_display: config.max_display,
    };

    match cli.command {
        Commands::Impact { unit } => cli::impact::run(&graph, &unit, &output),
        Commands::Closure { unit } => cli::closure::run(&graph, &unit, &output),
        Commands::Depths { unit } => cli::depths::run(&graph, &unit, &output),
        Commands::Path { from, to, compile } => {
            cli::path::run(&graph, &from, &to, compile, &output)
        }
        Commands::Affected { units } => cli::affected::run(&graph, units, &output),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
