//! Configuration loader for YAML files, dotenv files, and environment variables.
//!
//! Responsibilities:
//! - Read the YAML document and the optional `.env` file.
//! - Resolve `${NAME:default}` placeholders with process env > dotenv > default.
//! - Provide a builder-pattern `ConfigLoader` for choosing file locations.
//!
//! Does NOT handle:
//! - Lookups on the resolved tree (see `resolved.rs`).
//! - Writing configuration back to disk.
//!
//! Invariants / Assumptions:
//! - The process environment is never mutated; dotenv values are kept in memory.
//! - The `DOTENV_DISABLED` variable is checked before any dotenv file is read.

mod builder;
mod dotenv;
mod env;
mod error;
mod file;
mod path;
mod placeholder;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use dotenv::read_dotenv;
pub use env::{EnvOverrides, Tier, env_var_or_none};
pub use error::ConfigError;
pub(crate) use file::parse_config_str;
pub use placeholder::{Placeholder, resolve_str, resolve_value};
