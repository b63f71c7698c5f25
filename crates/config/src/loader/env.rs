//! Environment override tiers for placeholder resolution.
//!
//! Responsibilities:
//! - Snapshot the process environment without mutating it.
//! - Pair the snapshot with the variables parsed from a dotenv file.
//! - Answer "which tier supplies NAME" lookups in precedence order.
//!
//! Does NOT handle:
//! - Reading the dotenv file (see dotenv.rs).
//! - Scanning strings for placeholders (see placeholder.rs).
//!
//! Invariants:
//! - Process environment takes precedence over dotenv values for the same key.
//! - Empty or whitespace-only process variables are treated as unset; values are trimmed.
//! - Dotenv values count as present even when empty (`KEY=`).

use std::collections::HashMap;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        // No trimming needed, return original to avoid allocation
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

/// The source that supplied a placeholder's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// The real process environment.
    Process,
    /// The parsed dotenv file.
    Dotenv,
    /// The default written inside the placeholder.
    Default,
}

/// Flat variable lookup combining the process environment and a dotenv file.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    process: HashMap<String, String>,
    dotenv: HashMap<String, String>,
}

impl EnvOverrides {
    /// Build overrides from explicit maps.
    ///
    /// Blank process values are dropped so they behave like unset variables.
    pub fn new(
        process: impl IntoIterator<Item = (String, String)>,
        dotenv: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            process: process
                .into_iter()
                .filter_map(|(key, value)| non_blank(value).map(|value| (key, value)))
                .collect(),
            dotenv: dotenv.into_iter().collect(),
        }
    }

    /// Snapshot the current process environment and pair it with dotenv values.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process(dotenv: HashMap<String, String>) -> Self {
        let process = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
        Self::new(process, dotenv)
    }

    /// Look up `name`, returning the value and the tier it came from.
    ///
    /// Returns None when neither the process environment nor the dotenv file has it.
    pub fn lookup(&self, name: &str) -> Option<(&str, Tier)> {
        if let Some(value) = self.process.get(name) {
            return Some((value.as_str(), Tier::Process));
        }
        self.dotenv
            .get(name)
            .map(|value| (value.as_str(), Tier::Dotenv))
    }

    /// Number of variables that came from the dotenv file.
    pub fn dotenv_len(&self) -> usize {
        self.dotenv.len()
    }
}
