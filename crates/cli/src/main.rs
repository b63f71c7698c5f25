//! Researcher CLI - inspect the hybrid YAML/.env/environment configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and `RESEARCHER_*` environment variables.
//! - Load the resolved configuration exactly once and hand it to the command.
//! - Map configuration errors to structured exit codes.
//!
//! Does NOT handle:
//! - Placeholder resolution or precedence (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr so stdout carries only command output.
//! - The process environment is never modified; `.env` values stay in memory.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use researcher_config::{ConfigLoader, ResolvedConfig};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    if let Err(e) = run_command(cli.command, &config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

fn load_config(cli: &Cli) -> Result<ResolvedConfig, researcher_config::ConfigError> {
    let mut loader = ConfigLoader::new();

    // Blank/whitespace-only values are ignored to allow fallback to defaults
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(ref path) = cli.dotenv_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_dotenv_path(path.clone());
    }
    if cli.no_dotenv {
        loader = loader.skip_dotenv();
    }

    loader.from_env().build()
}
