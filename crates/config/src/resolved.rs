//! The resolved configuration tree and its typed accessors.
//!
//! Responsibilities:
//! - Hold the YAML tree after every placeholder has been substituted.
//! - Navigate the tree by dotted paths (`api.openai.model`).
//! - Expose typed accessors for API keys, service blocks, and environment flags.
//! - Produce a redacted copy of the tree for display.
//!
//! Does NOT handle:
//! - Reading files or choosing tiers (see `loader`).
//!
//! Invariants:
//! - The tree is never mutated after construction; every accessor is a pure read.
//! - Numeric path segments index into sequences.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde_yaml::value::TaggedValue;
use serde_yaml::{Mapping, Value};

use crate::constants::{
    BRIGHT_DATA_PATH, DEBUG_KEY, DEVELOPMENT, ENVIRONMENT_KEY, OPENAI_PATH, REDACTED,
};
use crate::loader::{ConfigError, ConfigLoader, EnvOverrides, parse_config_str, resolve_value};
use crate::types::{BrightDataConfig, OpenAiConfig};

/// Key names whose values are masked by [`ResolvedConfig::redacted`].
const SECRET_KEYS: &[&str] = &["api_key", "password", "secret", "token"];

/// Key suffixes whose values are masked by [`ResolvedConfig::redacted`].
const SECRET_SUFFIXES: &[&str] = &["_key", "_password", "_secret", "_token"];

/// A configuration tree with all placeholders resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    root: Value,
    config_path: Option<PathBuf>,
    dotenv_path: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Load `yaml_path`, overlay `dotenv_path` and the process environment, and resolve.
    ///
    /// A missing dotenv file counts as zero overrides.
    ///
    /// # Errors
    ///
    /// Fails when the YAML file is missing or malformed, or the dotenv file is unreadable.
    pub fn load(
        yaml_path: impl Into<PathBuf>,
        dotenv_path: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        ConfigLoader::new()
            .with_config_path(yaml_path)
            .with_dotenv_path(dotenv_path)
            .build()
    }

    /// Resolve an already parsed tree against the given overrides.
    pub fn resolve(raw: Value, overrides: &EnvOverrides) -> Self {
        Self {
            root: resolve_value(raw, overrides),
            config_path: None,
            dotenv_path: None,
        }
    }

    /// Parse YAML text and resolve it against the given overrides.
    pub fn from_yaml_str(content: &str, overrides: &EnvOverrides) -> Result<Self, ConfigError> {
        let raw = parse_config_str(content).map_err(|e| ConfigError::ConfigFileParse {
            path: PathBuf::from("<inline>"),
            source: e,
        })?;
        Ok(Self::resolve(raw, overrides))
    }

    pub(crate) fn with_sources(mut self, config_path: PathBuf, dotenv_path: Option<PathBuf>) -> Self {
        self.config_path = Some(config_path);
        self.dotenv_path = dotenv_path;
        self
    }

    /// The whole resolved tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The YAML file this configuration was loaded from.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The dotenv file consulted during loading, if the dotenv tier was enabled.
    pub fn dotenv_path(&self) -> Option<&Path> {
        self.dotenv_path.as_deref()
    }

    /// Get the value at a dotted path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::KeyNotFound` if any segment is absent.
    pub fn get(&self, path: &str) -> Result<&Value, ConfigError> {
        lookup(&self.root, path).ok_or_else(|| ConfigError::key_not_found(path))
    }

    /// Get the value at a dotted path, or `fallback` when it is absent.
    pub fn get_or<'a>(&'a self, path: &str, fallback: &'a Value) -> &'a Value {
        lookup(&self.root, path).unwrap_or(fallback)
    }

    /// Get a scalar as text. Numbers and booleans are rendered as written.
    pub fn get_str(&self, path: &str) -> Result<String, ConfigError> {
        scalar_to_string(self.get(path)?)
            .ok_or_else(|| ConfigError::type_mismatch(path, "expected a scalar value"))
    }

    /// Deserialize the subtree at a dotted path.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConfigError> {
        serde_yaml::from_value(self.get(path)?.clone())
            .map_err(|e| ConfigError::type_mismatch(path, e.to_string()))
    }

    /// API key for a service, read from `api.<service>.api_key`.
    pub fn api_key(&self, service: &str) -> Result<SecretString, ConfigError> {
        self.get_str(&format!("api.{service}.api_key"))
            .map(|key| SecretString::new(key.into()))
    }

    /// API key for a service, or `fallback` when the key is absent.
    ///
    /// Type mismatches are still reported.
    pub fn api_key_or(&self, service: &str, fallback: &str) -> Result<SecretString, ConfigError> {
        match self.api_key(service) {
            Err(ConfigError::KeyNotFound { .. }) => Ok(SecretString::new(fallback.into())),
            other => other,
        }
    }

    /// The `api.openai` block. A missing block yields all-`None` fields.
    pub fn openai_config(&self) -> Result<OpenAiConfig, ConfigError> {
        self.service_block(OPENAI_PATH)
    }

    /// The `api.bright_data` block. A missing block yields all-`None` fields.
    pub fn bright_data_config(&self) -> Result<BrightDataConfig, ConfigError> {
        self.service_block(BRIGHT_DATA_PATH)
    }

    fn service_block<T: DeserializeOwned + Default>(&self, path: &str) -> Result<T, ConfigError> {
        match lookup(&self.root, path) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(_) => self.get_as(path),
        }
    }

    /// The resolved top-level `environment` value.
    pub fn environment(&self) -> Option<String> {
        self.get_str(ENVIRONMENT_KEY).ok()
    }

    /// True iff `environment` is `development`, ignoring case.
    pub fn is_development(&self) -> bool {
        self.environment()
            .is_some_and(|env| env.eq_ignore_ascii_case(DEVELOPMENT))
    }

    /// True iff `debug` is boolean true or one of `true`, `1`, `yes`.
    pub fn is_debug(&self) -> bool {
        match lookup(&self.root, DEBUG_KEY) {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(s)) => {
                let s = s.trim();
                s.eq_ignore_ascii_case("true") || s == "1" || s.eq_ignore_ascii_case("yes")
            }
            _ => false,
        }
    }

    /// A copy of the tree with secret-looking values masked.
    pub fn redacted(&self) -> Value {
        redact(&self.root)
    }
}

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(root, |node, segment| match node {
        Value::Mapping(map) => map.get(segment).or_else(|| {
            segment
                .parse::<u64>()
                .ok()
                .and_then(|n| map.get(Value::Number(n.into())))
        }),
        Value::Sequence(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        Value::Tagged(tagged) => lookup(&tagged.value, segment),
        _ => None,
    })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

fn is_secret_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    SECRET_KEYS.contains(&key.as_str())
        || SECRET_SUFFIXES.iter().any(|suffix| key.ends_with(suffix))
}

fn redact(value: &Value) -> Value {
    match value {
        Value::Mapping(map) => Value::Mapping(
            map.iter()
                .map(|(key, item)| {
                    let masked = key.as_str().is_some_and(is_secret_key)
                        && scalar_to_string(item).is_some_and(|s| !s.is_empty());
                    let item = if masked {
                        Value::String(REDACTED.to_string())
                    } else {
                        redact(item)
                    };
                    (key.clone(), item)
                })
                .collect::<Mapping>(),
        ),
        Value::Sequence(items) => Value::Sequence(items.iter().map(redact).collect()),
        Value::Tagged(tagged) => Value::Tagged(Box::new(TaggedValue {
            tag: tagged.tag.clone(),
            value: redact(&tagged.value),
        })),
        other => other.clone(),
    }
}
