//! Snapshot writer.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use super::{SnapshotError, SnapshotResult};

/// Formats a score so that it parses back to the same value.
fn format_score(score: f64) -> String {
    format!("{score:?}")
}

/// Writes `(word, score)` pairs as snapshot rows.
#[derive(Debug)]
pub struct SnapshotWriter<W: io::Write> {
    inner: csv::Writer<W>,
}

impl SnapshotWriter<File> {
    /// Creates (or truncates) the snapshot at `path`, creating missing parent
    /// directories.
    pub fn create<P: AsRef<Path>>(path: P) -> SnapshotResult<Self> {
        let path = path.as_ref();
        let create_error = |source: io::Error| SnapshotError::Create {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(create_error)?;
        }
        let file = File::create(path).map_err(create_error)?;
        Ok(Self::new(file))
    }
}

impl<W: io::Write> SnapshotWriter<W> {
    /// Creates a writer over any byte sink.
    pub fn new(writer: W) -> Self {
        let inner = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        Self { inner }
    }

    /// Writes one row per pair and flushes.
    ///
    /// Words are written as given; fields containing commas or quotes are
    /// quoted. Returns the number of rows written.
    pub fn write_all<I, S>(&mut self, items: I) -> SnapshotResult<usize>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut written = 0;
        for (word, score) in items {
            let score = format_score(score);
            self.inner.write_record([word.as_ref(), score.as_str()])?;
            written += 1;
        }
        self.inner.flush()?;
        Ok(written)
    }

    /// Flushes and returns the underlying sink.
    pub fn into_inner(self) -> SnapshotResult<W> {
        self.inner
            .into_inner()
            .map_err(|err| SnapshotError::Io(err.into_error()))
    }
}
