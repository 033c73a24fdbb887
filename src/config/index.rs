//! Index configuration module.
//!
//! This module defines how completion requests are sized when the caller does
//! not ask for a specific number of results.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Prefix index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Number of completions returned when none is requested
    pub default_limit: usize,

    /// Upper bound applied to any requested number of completions
    pub max_limit: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 1000,
        }
    }
}

impl IndexConfig {
    /// Returns the number of completions to produce for a request.
    ///
    /// `None` means the default; anything above `max_limit` is clamped.
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_limit == 0 {
            return Err(ConfigError::ValidationError(
                "max_limit must be greater than 0".to_string(),
            ));
        }

        if self.default_limit > self.max_limit {
            return Err(ConfigError::ValueOutOfRange {
                key: "index.default_limit".to_string(),
                message: format!("must not exceed max_limit ({})", self.max_limit),
            });
        }

        Ok(())
    }
}
