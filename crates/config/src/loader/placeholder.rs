//! `${NAME}` and `${NAME:default}` substitution in YAML string values.
//!
//! Responsibilities:
//! - Scan strings for placeholders and substitute the winning tier's value.
//! - Walk a YAML tree and resolve every string leaf.
//!
//! Does NOT handle:
//! - Deciding tier precedence (see env.rs).
//! - Converting resolved strings to numbers or booleans.
//!
//! Invariants:
//! - Resolution is total: a well-formed placeholder always produces a value.
//! - A `${` without a closing `}` is kept as literal text.
//! - An empty or invalid NAME keeps the token as literal text, up to any nested `${`.
//! - Substituted values are never re-scanned.
//! - Mapping keys and non-string scalars pass through unchanged.

use std::borrow::Cow;

use serde_yaml::Value;
use serde_yaml::value::TaggedValue;
use tracing::trace;

use super::env::{EnvOverrides, Tier};

const OPEN: &str = "${";
const CLOSE: char = '}';

/// A parsed placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Variable name looked up in the override tiers.
    pub name: &'a str,
    /// Text after the first colon, if any.
    pub default: Option<&'a str>,
}

impl<'a> Placeholder<'a> {
    /// Parse the text between `${` and `}`.
    ///
    /// Returns None when the name is empty or contains characters outside
    /// `[A-Za-z0-9_.-]`.
    pub fn parse(body: &'a str) -> Option<Self> {
        let (name, default) = match body.split_once(':') {
            Some((name, default)) => (name, Some(default)),
            None => (body, None),
        };
        if name.is_empty() || !name.chars().all(is_name_char) {
            return None;
        }
        Some(Self { name, default })
    }

    /// Resolve against the override tiers, falling back to the default.
    pub fn resolve<'e>(&self, env: &'e EnvOverrides) -> (&'e str, Tier)
    where
        'a: 'e,
    {
        env.lookup(self.name)
            .unwrap_or((self.default.unwrap_or(""), Tier::Default))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// Substitute every placeholder in `input`.
///
/// Borrows the input unchanged when it holds no `${`.
pub fn resolve_str<'s>(input: &'s str, env: &EnvOverrides) -> Cow<'s, str> {
    if !input.contains(OPEN) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];
        let Some(end) = after.find(CLOSE) else {
            // Unterminated: keep the remainder verbatim.
            out.push_str(&rest[start..]);
            return Cow::Owned(out);
        };
        let body = &after[..end];
        match Placeholder::parse(body) {
            Some(placeholder) => {
                let (value, tier) = placeholder.resolve(env);
                trace!(name = placeholder.name, ?tier, "resolved placeholder");
                out.push_str(value);
            }
            None => {
                // A nested `${` starts a fresh scan; the text before it is literal.
                if let Some(inner) = body.find(OPEN) {
                    out.push_str(&rest[start..start + OPEN.len() + inner]);
                    rest = &after[inner..];
                    continue;
                }
                out.push_str(&rest[start..start + OPEN.len() + end + 1]);
            }
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Resolve every string leaf of a YAML tree.
pub fn resolve_value(value: Value, env: &EnvOverrides) -> Value {
    match value {
        Value::String(s) => {
            let resolved = match resolve_str(&s, env) {
                Cow::Owned(owned) => Some(owned),
                Cow::Borrowed(_) => None,
            };
            Value::String(resolved.unwrap_or(s))
        }
        Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| resolve_value(item, env))
                .collect(),
        ),
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .map(|(key, item)| (key, resolve_value(item, env)))
                .collect(),
        ),
        Value::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            Value::Tagged(Box::new(TaggedValue {
                tag,
                value: resolve_value(value, env),
            }))
        }
        other => other,
    }
}
