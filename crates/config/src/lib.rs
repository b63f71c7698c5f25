//! Hybrid configuration for the researcher project.
//!
//! This crate merges a YAML file, a `.env` file, and the process environment
//! into one read-only [`ResolvedConfig`]. String values in the YAML file may
//! embed `${NAME}` or `${NAME:default}` placeholders, which resolve with the
//! precedence process environment > dotenv file > inline default.
//!
//! ```no_run
//! use researcher_config::ResolvedConfig;
//!
//! let config = ResolvedConfig::load("config.yml", ".env")?;
//! let model = config.get_str("api.openai.model")?;
//! if config.is_development() {
//!     println!("using {model} in development");
//! }
//! # Ok::<(), researcher_config::ConfigError>(())
//! ```

pub mod constants;
mod loader;
mod resolved;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, EnvOverrides, Placeholder, Tier, env_var_or_none, read_dotenv,
    resolve_str, resolve_value,
};
pub use resolved::ResolvedConfig;
pub use types::{BrightDataConfig, OpenAiConfig};
