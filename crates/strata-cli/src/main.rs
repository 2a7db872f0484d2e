//! Strata CLI - Command-line interface for Strata
//!
//! This is the main entry point for users interacting with Strata.
//! It provides commands for building, inspecting, and storing C4 models.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod demo;

#[derive(Parser)]
#[command(name = "strata")]
#[command(author = "Strata Contributors")]
#[command(version)]
#[command(about = "C4 architecture models as a graph", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Strata in the current directory
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Build the Financial Risk System example workspace
    Demo {
        /// Output file for the workspace JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the elements and relationships of a workspace file
    Show {
        /// Workspace JSON file
        file: PathBuf,
    },

    /// Show the elements connected to an element through relationships
    Relations {
        /// Workspace JSON file
        file: PathBuf,

        /// The element to analyze (id, canonical name, or name)
        element: String,

        /// Maximum depth to search (0 = unlimited)
        #[arg(short, long, default_value = "0")]
        depth: usize,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Save a workspace file into the local store
    Save {
        /// Workspace JSON file
        file: PathBuf,

        /// Project directory holding the store (defaults to current directory)
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },

    /// Export the stored workspace to JSON
    Export {
        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Project directory holding the store (defaults to current directory)
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Init { path } => commands::init(&path),
        Commands::Demo { output } => commands::demo(output.as_deref()),
        Commands::Show { file } => commands::show(&file),
        Commands::Relations {
            file,
            element,
            depth,
            json,
        } => commands::relations(&file, &element, depth, json),
        Commands::Save { file, path } => commands::save(&file, &path),
        Commands::Export { output, path } => commands::export(output.as_deref(), &path),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
