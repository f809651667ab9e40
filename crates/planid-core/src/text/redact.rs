//! Pattern-based redaction of rendered text and source options.

use crate::error::RedactionError;
use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// Placeholder written in place of redacted text.
pub const REDACTION_REPLACEMENT: &str = "*********(redacted)";

///
/// Redactor
///
/// Compiled redaction patterns. A redactor with no patterns is the
/// identity transform.
///

#[derive(Clone, Debug, Default)]
pub struct Redactor {
    value_patterns: Vec<Regex>,
    key_patterns: Vec<Regex>,
}

impl Redactor {
    /// Redactor that never changes its input.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            value_patterns: Vec::new(),
            key_patterns: Vec::new(),
        }
    }

    /// Compile value and key patterns.
    pub fn new<V, K>(value_patterns: V, key_patterns: K) -> Result<Self, RedactionError>
    where
        V: IntoIterator,
        V::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        Ok(Self {
            value_patterns: compile_all(value_patterns)?,
            key_patterns: compile_all(key_patterns)?,
        })
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.value_patterns.is_empty() || !self.key_patterns.is_empty()
    }

    /// Replace every match of every value pattern with the placeholder.
    #[must_use]
    pub fn redact<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut out = Cow::Borrowed(text);
        for pattern in &self.value_patterns {
            let replaced = match pattern.replace_all(&out, NoExpand(REDACTION_REPLACEMENT)) {
                Cow::Borrowed(_) => None,
                Cow::Owned(owned) => Some(owned),
            };
            if let Some(owned) = replaced {
                out = Cow::Owned(owned);
            }
        }

        out
    }

    /// True when a key pattern matches the option key or its value.
    #[must_use]
    pub fn is_sensitive_option(&self, key: &str, value: &str) -> bool {
        self.key_patterns
            .iter()
            .any(|pattern| pattern.is_match(key) || pattern.is_match(value))
    }

    /// Pair each option with its display value, hiding sensitive ones.
    #[must_use]
    pub fn redact_options<'a, I>(&self, options: I) -> Vec<(&'a str, &'a str)>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        options
            .into_iter()
            .map(|(key, value)| {
                if self.is_sensitive_option(key, value) {
                    (key, REDACTION_REPLACEMENT)
                } else {
                    (key, value)
                }
            })
            .collect()
    }
}

fn compile_all<P>(patterns: P) -> Result<Vec<Regex>, RedactionError>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            Regex::new(pattern).map_err(|source| RedactionError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
        })
        .collect()
}

///
/// TESTS
///
