//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and `RESEARCHER_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `main`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "researcher-cli")]
#[command(about = "Inspect the researcher configuration resolved from YAML, .env, and the environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  researcher-cli get api.openai.model\n  researcher-cli api-key openai --reveal\n  researcher-cli --config ./config.yml --dotenv ./.env show --format json\n  researcher-cli env\n"
)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(long = "config", global = true, env = "RESEARCHER_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Path to the .env file with variable overrides
    #[arg(long = "dotenv", global = true, env = "RESEARCHER_DOTENV_PATH", value_name = "FILE")]
    pub dotenv_path: Option<PathBuf>,

    /// Ignore the .env file entirely
    #[arg(long, global = true)]
    pub no_dotenv: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value at a dotted path (e.g. api.openai.model)
    Get {
        /// Dotted key path
        path: String,

        /// Value to print when the path does not exist
        #[arg(long)]
        default: Option<String>,
    },

    /// Print the API key configured for a service
    ApiKey {
        /// Service name under `api.` (e.g. openai, bright_data)
        service: String,

        /// Print the key in clear text instead of masking it
        #[arg(long)]
        reveal: bool,
    },

    /// Print the whole resolved configuration with secrets masked
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },

    /// Print the OpenAI service block as JSON
    Openai,

    /// Print the Bright Data service block as JSON
    BrightData,

    /// Print the resolved environment name and flags
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_get_with_default() {
        let cli = Cli::try_parse_from([
            "researcher-cli",
            "--config",
            "cfg.yml",
            "get",
            "api.openai.model",
            "--default",
            "gpt-4",
        ])
        .unwrap();
        assert_eq!(cli.config_path, Some(PathBuf::from("cfg.yml")));
        match cli.command {
            Commands::Get { path, default } => {
                assert_eq!(path, "api.openai.model");
                assert_eq!(default.as_deref(), Some("gpt-4"));
            }
            _ => panic!("expected get command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["researcher-cli", "env", "--no-dotenv"]).unwrap();
        assert!(cli.no_dotenv);
    }
}
