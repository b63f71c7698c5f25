//! Typed service blocks read from the resolved configuration.
//!
//! Responsibilities:
//! - Define the OpenAI and Bright Data configuration blocks.
//! - Deserialize secrets straight into `secrecy::SecretString`.
//! - Accept numbers written either as YAML integers or as resolved placeholder strings.
//!
//! Invariants:
//! - Every field is optional; a missing key is `None`, never an error.
//! - Secret values use `SecretString` so `Debug` output never shows them.

use secrecy::SecretString;
use serde::Deserialize;

/// Module for deserializing optional secrets.
mod secret_string_opt {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Module for numbers that may arrive as strings after placeholder resolution.
mod lenient_u32_opt {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        String(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<NumberOrString>::deserialize(deserializer)? {
            None => Ok(None),
            Some(NumberOrString::Number(n)) => Ok(Some(n)),
            Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
            Some(NumberOrString::String(s)) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected a non-negative integer, got {s:?}"))),
        }
    }
}

/// OpenAI connection settings (`api.openai`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenAiConfig {
    /// API key for bearer authentication.
    #[serde(default, deserialize_with = "secret_string_opt::deserialize")]
    pub api_key: Option<SecretString>,
    /// Base URL of the API.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model name.
    #[serde(default)]
    pub model: Option<String>,
    /// Upper bound on generated tokens.
    #[serde(default, deserialize_with = "lenient_u32_opt::deserialize")]
    pub max_tokens: Option<u32>,
}

/// Bright Data connection settings (`api.bright_data`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrightDataConfig {
    /// API key for bearer authentication.
    #[serde(default, deserialize_with = "secret_string_opt::deserialize")]
    pub api_key: Option<SecretString>,
    /// Base URL of the API.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Account username.
    #[serde(default)]
    pub username: Option<String>,
}
