//! Snapshot reader.

use std::fs::File;
use std::io;
use std::path::Path;

use super::{SnapshotEntry, SnapshotError, SnapshotResult};

/// Parses a score field. Returns `None` when the field is not a number.
///
/// Surrounding whitespace is ignored.
pub(crate) fn parse_score(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok()
}

/// Reads `(word, score)` pairs from a snapshot.
///
/// Words are trimmed and lowercased. Rows may have any number of fields; only
/// the first two are used.
#[derive(Debug)]
pub struct SnapshotReader<R: io::Read> {
    inner: csv::Reader<R>,
}

impl SnapshotReader<File> {
    /// Opens the snapshot at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> SnapshotResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SnapshotError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl<R: io::Read> SnapshotReader<R> {
    /// Creates a reader over any byte source.
    pub fn new(reader: R) -> Self {
        let inner = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        Self { inner }
    }

    /// Reads every remaining entry.
    ///
    /// Blank lines produce no entry. A row whose score is missing or not a
    /// number is kept with a score of `0.0`.
    pub fn read_all(&mut self) -> SnapshotResult<Vec<SnapshotEntry>> {
        let mut entries = Vec::new();

        for record in self.inner.records() {
            let record = record?;
            if record.len() <= 1 && record.iter().all(str::is_empty) {
                continue;
            }

            let word = record.get(0).unwrap_or_default().trim().to_lowercase();
            let score = match record.get(1) {
                Some(field) => parse_score(field).unwrap_or_else(|| {
                    let line = record.position().map_or(0, |pos| pos.line());
                    tracing::warn!(line, word = %word, field, "unparseable score, using 0.0");
                    0.0
                }),
                None => 0.0,
            };

            entries.push((word, score));
        }

        Ok(entries)
    }
}
