//! Output rendering for resolved configuration values.
//!
//! Responsibilities:
//! - Print scalars as plain text and subtrees as YAML or JSON.
//! - Mask secrets before they reach stdout.
//!
//! Invariants:
//! - Secret values are masked unless the caller explicitly reveals them.

use anyhow::Result;
use researcher_config::constants::REDACTED;
use secrecy::{ExposeSecret, SecretString};
use serde_yaml::Value;

use crate::args::OutputFormat;

/// Render a value: scalars as bare text, everything else as YAML.
pub fn render_value(value: &Value) -> Result<String> {
    Ok(match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)?.trim_end().to_string(),
    })
}

/// Render a whole tree in the requested format.
pub fn render_tree(value: &Value, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    })
}

/// Mask a secret, keeping empty values visibly empty.
pub fn mask(secret: &SecretString) -> String {
    if secret.expose_secret().is_empty() {
        String::new()
    } else {
        REDACTED.to_string()
    }
}

/// Mask an optional secret for JSON output.
pub fn mask_opt(secret: &Option<SecretString>) -> Option<String> {
    secret.as_ref().map(mask)
}
