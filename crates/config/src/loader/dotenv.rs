//! Dotenv file parsing into an override map.
//!
//! Responsibilities:
//! - Parse `KEY=VALUE` lines from a dotenv file into a map.
//! - Skip lines that are not `KEY=VALUE` pairs, logging only their byte position.
//!
//! Does NOT handle:
//! - Exporting variables into the process environment. The file is only read.
//! - Deciding whether the dotenv tier is enabled (see builder.rs).
//!
//! Invariants:
//! - A missing file yields an empty map, not an error.
//! - Values are captured literally after the first `=`: no quote stripping,
//!   no escapes, no `$VAR` expansion. Surrounding whitespace is trimmed.
//! - Later lines win when a key repeats.
//! - Explicitly empty values (`KEY=`) are kept.
//! - Log output and errors NEVER include line contents.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use super::error::ConfigError;

const EXPORT_PREFIX: &str = "export ";

/// Read a dotenv file without touching the process environment.
///
/// # Errors
///
/// Returns `ConfigError::DotenvIo` for read failures other than a missing file.
pub fn read_dotenv(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no dotenv file, using zero overrides");
            return Ok(HashMap::new());
        }
        Err(e) => return Err(ConfigError::DotenvIo { kind: e.kind() }),
    };

    let vars = parse_dotenv_str(&content);
    debug!(path = %path.display(), count = vars.len(), "loaded dotenv overrides");
    Ok(vars)
}

/// Parse dotenv text, skipping comments, blank lines, and malformed lines.
pub(crate) fn parse_dotenv_str(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    let mut position = 0;
    for line in content.split_inclusive('\n') {
        let start = position;
        position += line.len();

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_line(trimmed) {
            Some((key, value)) => {
                vars.insert(key.to_string(), value.to_string());
            }
            None => warn!(position = start, "skipping malformed .env line"),
        }
    }
    vars
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.strip_prefix(EXPORT_PREFIX).unwrap_or(key).trim();
    if key.is_empty() || key.chars().any(char::is_whitespace) {
        return None;
    }
    Some((key, value.trim()))
}
