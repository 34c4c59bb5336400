//! # Express Starter Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point for the `create-express-starter` binary.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system (stderr, `RUST_LOG`-filtered)
//! - Running the scaffolding session and applying the exit policy
//!
//! ## Architecture
//!
//! The CLI surface is a single optional positional argument (the target
//! directory); everything else is collected interactively by the session.
//! Errors propagate up to this level, where the exit policy distinguishes a
//! user-cancelled session (reported, exit 0) from session-fatal failures
//! (reported with their cause, exit 1).
//!
//! ## Examples
//!
//! ```bash
//! # Fully interactive
//! create-express-starter
//!
//! # Skip the project-name prompt
//! create-express-starter my-api
//!
//! # Verbose diagnostics on stderr
//! RUST_LOG=debug create-express-starter my-api
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // The scaffolding session.
mod common; // Shared utilities (paths, fs, prompts).
mod core; // Core infrastructure (errors, config, session context).

use crate::core::error::StarterError;

/// Defines the command-line surface using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "create-express-starter",
    about = "🚅 Interactive scaffolder for Express.js projects",
    long_about = "Scaffold a new Express.js project from the bundled templates.\n\
                  Answers a short questionnaire (hot reloading, CORS), then copies\n\
                  the matching template and patches its package.json.",
    version
)]
struct Cli {
    #[command(flatten)]
    scaffold: commands::scaffold::ScaffoldArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the prompts on stdout.
    // Default to warnings only; RUST_LOG overrides.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::scaffold::handle_scaffold(cli.scaffold) {
        // A cancelled session is a handled outcome, not a process failure:
        // report it and exit 0, leaving whatever existed on disk untouched.
        if matches!(e.downcast_ref::<StarterError>(), Some(StarterError::Cancelled)) {
            println!("{} {}", console::style("✖").red(), e);
            return Ok(());
        }
        tracing::error!("Scaffolding session failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
