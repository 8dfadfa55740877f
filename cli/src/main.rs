//! # Project CLI Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the `project` scaffolding tool. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the optional configuration file
//! - Routing execution to the selected scaffold workflow
//!
//! ## Architecture
//!
//! - Each workflow is a variant of the `Commands` enum, mapped to a handler in
//!   its own module under `commands/`.
//! - All errors propagate to this level, are printed once with their full
//!   context chain, and end the process with exit status 1.
//! - The runtime is single-threaded; every step is awaited to completion
//!   before the next one starts.
//!
//! ## Examples
//!
//! ```bash
//! # Scaffold a FastAPI backend
//! project fastapi
//!
//! # Scaffold an Angular frontend and validate its development container
//! project -v angular --docker
//!
//! # Use an alternate configuration file
//! PROJECT_CLI_CONFIG=~/scaffold.toml project backend
//! ```
//!
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Scaffold workflows (fastapi, angular)
mod common; // Shared utilities (docker, fs, git, process, ui)
mod core; // Core infrastructure (errors, config, templating, workflow context)

use crate::common::ui;
use crate::core::error::ScaffoldError;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "project",
    about = "🚀 Project scaffolding: FastAPI backends and Angular frontends",
    long_about = "Creates a new repository, initializes Git and writes a Docker Compose setup.\n\
                  The Angular workflow can additionally build and start the development container.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the user config directory.
    #[arg(long, global = true, env = "PROJECT_CLI_CONFIG", hide = true)]
    config: Option<PathBuf>,
}

/// Enum defining the available scaffold workflows.
#[derive(Parser, Debug)]
enum Commands {
    /// Create a containerized FastAPI backend
    #[command(alias = "backend")]
    Fastapi(commands::fastapi::FastapiArgs),
    /// Create an Angular frontend, optionally validating its dev container
    #[command(alias = "frontend")]
    Angular(commands::angular::AngularArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => exit_on_parse_error(e),
    };

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config = match crate::core::config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    let command_result = match cli.command {
        Commands::Fastapi(args) => commands::fastapi::handle_fastapi(args, &config).await,
        Commands::Angular(args) => commands::angular::handle_angular(args, &config).await,
    };

    if let Err(e) = command_result {
        fail(e);
    }
}

fn fail(e: anyhow::Error) -> ! {
    tracing::error!("Command execution failed: {:?}", e);
    ui::error(&format!("{:#}", e));
    std::process::exit(1);
}

/// Help and version go to stdout with status 0. Every other parse error,
/// including an unknown or missing workflow, prints usage and exits 1.
fn exit_on_parse_error(e: clap::Error) -> ! {
    if !e.use_stderr() {
        e.exit();
    }
    match e.kind() {
        ErrorKind::InvalidSubcommand
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let requested = match e.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.clone(),
                _ => "<none>".to_string(),
            };
            ui::error(&ScaffoldError::UnknownCommand(requested).to_string());
        }
        _ => {}
    }
    // Printing can only fail if stderr is gone; the exit status still reports it.
    let _ = e.print();
    std::process::exit(1);
}
