//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use researcher_config::ResolvedConfig;

use crate::args::Commands;
use crate::commands;

/// Dispatch a subcommand against the already resolved configuration.
pub(crate) fn run_command(command: Commands, config: &ResolvedConfig) -> Result<()> {
    match command {
        Commands::Get { path, default } => commands::get::run(config, &path, default.as_deref()),
        Commands::ApiKey { service, reveal } => commands::api_key::run(config, &service, reveal),
        Commands::Show { format } => commands::show::run(config, format),
        Commands::Openai => commands::services::run_openai(config),
        Commands::BrightData => commands::services::run_bright_data(config),
        Commands::Env => commands::env::run(config),
    }
}
