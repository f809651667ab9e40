//! Configuration for scan-node descriptors: rendering limits and the
//! redaction patterns applied before anything reaches explain output.
//!
//! The model is plain serde data. Pattern compilation happens in
//! `planid-core`, which owns the regex engine.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

///
/// CONSTANTS
///

/// Default cap on rendered list elements (output columns, descriptor entries).
pub const DEFAULT_MAX_FIELDS: usize = 25;

/// Default cap, in characters, on a single rendered descriptor entry value.
pub const DEFAULT_MAX_VALUE_LEN: usize = 100;

/// Smallest value length that still leaves room for the ellipsis marker.
pub const MIN_MAX_VALUE_LEN: usize = 4;

///
/// PlanidConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanidConfig {
    pub describe: DescribeConfig,
    pub redaction: RedactionConfig,
}

impl PlanidConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.describe.validate()?;
        self.redaction.validate()
    }
}

///
/// DescribeConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescribeConfig {
    /// Maximum number of list elements rendered before the overflow marker.
    pub max_fields: usize,

    /// Maximum characters per descriptor entry value, ellipsis included.
    pub max_value_len: usize,
}

impl DescribeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_fields == 0 {
            return Err(ConfigError::invalid(
                "describe.max_fields",
                "must be at least 1",
            ));
        }
        if self.max_value_len < MIN_MAX_VALUE_LEN {
            return Err(ConfigError::invalid(
                "describe.max_value_len",
                format!("must be at least {MIN_MAX_VALUE_LEN}"),
            ));
        }

        Ok(())
    }
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            max_fields: DEFAULT_MAX_FIELDS,
            max_value_len: DEFAULT_MAX_VALUE_LEN,
        }
    }
}

///
/// RedactionConfig
///
/// Patterns are regular expressions. `value_patterns` are matched against
/// rendered descriptor text and every match is replaced; `key_patterns`
/// hide the whole value of any source option whose key or value matches.
/// Empty lists disable redaction.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RedactionConfig {
    pub value_patterns: Vec<String>,
    pub key_patterns: Vec<String>,
}

impl RedactionConfig {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value_patterns.is_empty() && self.key_patterns.is_empty()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self
            .value_patterns
            .iter()
            .chain(&self.key_patterns)
            .any(String::is_empty)
        {
            return Err(ConfigError::invalid(
                "redaction",
                "patterns must not be empty strings",
            ));
        }

        Ok(())
    }
}

///
/// TESTS
///
