//! Snapshot configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Snapshot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Path of the snapshot loaded on startup and written back on mutation
    pub path: PathBuf,

    /// Number of rows produced when generating a synthetic word list
    pub wordlist_size: usize,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/words.csv"),
            wordlist_size: 50_000,
        }
    }
}

impl Validate for SnapshotConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "snapshot path cannot be empty".to_string(),
            ));
        }

        if self.wordlist_size == 0 {
            return Err(ConfigError::ValidationError(
                "wordlist_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
