//! CLI command implementations.
//!
//! Every command is a pure read over a `ResolvedConfig` loaded once in `main`.

pub mod api_key;
pub mod env;
pub mod get;
pub mod services;
pub mod show;
