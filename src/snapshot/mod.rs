//! Snapshot files for the prefix index.
//!
//! A snapshot is a header-less, two-column CSV file with one `word,score` pair
//! per line. It is how an index is persisted between runs: the reader turns a
//! file into `(word, score)` pairs that can be collected into a
//! [`PrefixIndex`], and the writer does the reverse with
//! [`PrefixIndex::entries`].
//!
//! Reading is best-effort. A missing or malformed score is replaced with
//! `0.0` and the row is kept; only I/O failures and structurally broken CSV
//! (for example invalid UTF-8) are reported as errors.

mod reader;
mod wordlist;
mod writer;

use std::path::Path;

use crate::data_structures::prefix_index::PrefixIndex;
pub use crate::error::snapshot::SnapshotError;
pub use reader::SnapshotReader;
pub use wordlist::synthetic_wordlist;
pub use writer::SnapshotWriter;

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// A single `(word, score)` pair as stored in a snapshot.
pub type SnapshotEntry = (String, f64);

/// Reads every entry of the snapshot at `path`.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> SnapshotResult<Vec<SnapshotEntry>> {
    let path = path.as_ref();
    let entries = SnapshotReader::from_path(path)?.read_all()?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "loaded snapshot");
    Ok(entries)
}

/// Builds a [`PrefixIndex`] from the snapshot at `path`.
///
/// Later rows for the same word overwrite earlier ones.
pub fn load_index<P: AsRef<Path>>(path: P) -> SnapshotResult<PrefixIndex> {
    Ok(load_snapshot(path)?.into_iter().collect())
}

/// Writes `items` to a snapshot at `path`, replacing any existing file.
///
/// Returns the number of rows written.
pub fn save_snapshot<P, I, S>(path: P, items: I) -> SnapshotResult<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let mut writer = SnapshotWriter::create(path)?;
    let written = writer.write_all(items)?;
    tracing::debug!(path = %path.display(), rows = written, "saved snapshot");
    Ok(written)
}

/// Writes every entry of `index` to a snapshot at `path`.
pub fn save_index<P: AsRef<Path>>(path: P, index: &PrefixIndex) -> SnapshotResult<usize> {
    save_snapshot(path, index.entries())
}
