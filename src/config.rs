//! Route limits: bounds applied to the `N K P` parameter line.
//!
//! Limits default to 100 000 each and can be overridden from a TOML file:
//!
//! ```toml
//! max_operations = 500
//! max_compartments = 10
//! max_capacity = 1000
//! ```

use std::path::Path;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default upper bound for each of `N`, `K` and `P`.
pub const DEFAULT_LIMIT: usize = 100_000;

/// Errors from loading route limits.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(barge::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}")]
    #[diagnostic(
        code(barge::config::parse),
        help("Check the TOML syntax. {message}")
    )]
    Parse { path: String, message: String },

    #[error("limit {name} must be at least 1")]
    #[diagnostic(
        code(barge::config::zero_limit),
        help("A limit of 0 would reject every route. Remove the key to use the default of 100000.")
    )]
    ZeroLimit { name: &'static str },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Inclusive upper bounds for the parameter line. The lower bound is always 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteLimits {
    /// Upper bound for `N`, the number of operations.
    pub max_operations: usize,
    /// Upper bound for `K`, the number of compartments.
    pub max_compartments: usize,
    /// Upper bound for `P`, the barge capacity.
    pub max_capacity: usize,
}

impl Default for RouteLimits {
    fn default() -> Self {
        Self::uniform(DEFAULT_LIMIT)
    }
}

impl RouteLimits {
    /// The same bound for all three parameters.
    pub fn uniform(limit: usize) -> Self {
        Self {
            max_operations: limit,
            max_compartments: limit,
            max_capacity: limit,
        }
    }

    /// Parse limits from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Self::parse(text, "<inline>")
    }

    /// Load limits from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let limits = Self::parse(&text, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), ?limits, "loaded route limits");
        Ok(limits)
    }

    fn parse(text: &str, origin: &str) -> ConfigResult<Self> {
        let limits: Self = toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        limits.validate()?;
        Ok(limits)
    }

    fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("max_operations", self.max_operations),
            ("max_compartments", self.max_compartments),
            ("max_capacity", self.max_capacity),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroLimit { name });
            }
        }
        Ok(())
    }
}
