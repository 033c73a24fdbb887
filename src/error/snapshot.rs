//! Snapshot error module.
//!
//! This module defines error types that may occur while reading or writing
//! snapshot files. Malformed scores are not errors; they are recovered by the
//! reader.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during snapshot operations.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Error when the snapshot file cannot be opened.
    #[error("Failed to open snapshot {}: {source}", path.display())]
    Open {
        /// Path of the snapshot
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Error when the snapshot file or its directory cannot be created.
    #[error("Failed to create snapshot {}: {source}", path.display())]
    Create {
        /// Path of the snapshot
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Error when the snapshot is not valid CSV (for example, invalid UTF-8).
    #[error("Malformed snapshot: {0}")]
    Csv(#[from] csv::Error),

    /// IO errors while reading or writing rows.
    #[error("Snapshot IO error: {0}")]
    Io(#[from] io::Error),
}
