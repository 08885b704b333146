//! Text sources and cheap change detection for file-backed text.
//!
//! A watched file is re-read only when its stat fingerprint (modification
//! time + size) differs from the last observation. One stat per poll, one
//! full read only on change. A same-size edit landing within the
//! filesystem's timestamp resolution is indistinguishable from no change;
//! that is an accepted limitation of the scheme, not worked around with
//! content hashing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use tracing::warn;

// =============================================================================
// Fingerprint
// =============================================================================

/// Composite (mtime, size) value for "did this file change" checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Combine modification seconds and byte size into one comparable value.
    pub fn from_parts(mtime_secs: u64, size: u64) -> Self {
        Self((mtime_secs << 32).wrapping_add(size))
    }

    fn from_metadata(meta: &fs::Metadata) -> Self {
        let mtime_secs = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_parts(mtime_secs, meta.len())
    }
}

// =============================================================================
// FileWatcher
// =============================================================================

/// Polls a file for changes via its stat fingerprint.
#[derive(Debug)]
pub struct FileWatcher {
    path: PathBuf,
    last: Fingerprint,
}

impl FileWatcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last: Fingerprint::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check the file and return its content if it changed.
    ///
    /// A stat failure propagates without touching the stored fingerprint, so
    /// the next poll retries from the same baseline. Once the fingerprint
    /// registers as changed it is committed *before* the read: a transient
    /// read failure is reported once instead of re-reading every frame.
    pub fn poll(&mut self) -> io::Result<Option<String>> {
        let meta = fs::metadata(&self.path)?;
        let fingerprint = Fingerprint::from_metadata(&meta);
        if fingerprint == self.last {
            return Ok(None);
        }
        self.last = fingerprint;

        let content = fs::read_to_string(&self.path)?;
        Ok(Some(content))
    }
}

// =============================================================================
// TextSource
// =============================================================================

/// Where the display text comes from.
#[derive(Debug)]
pub enum TextSource {
    /// Fixed text from the command line; never changes after startup.
    Static(String),
    /// A file polled every frame for runtime updates.
    File(FileWatcher),
}

impl TextSource {
    /// New content to lay out, if any.
    ///
    /// Recoverable I/O failures on a watched file are logged and treated as
    /// "no change this frame"; they heal on the next successful poll.
    pub fn poll_changed(&mut self) -> Option<String> {
        match self {
            TextSource::Static(_) => None,
            TextSource::File(watcher) => match watcher.poll() {
                Ok(changed) => changed,
                Err(e) => {
                    warn!(path = %watcher.path().display(), error = %e, "text source poll failed");
                    None
                }
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_fingerprint_equality() {
        assert_eq!(
            Fingerprint::from_parts(1_700_000_000, 42),
            Fingerprint::from_parts(1_700_000_000, 42)
        );
        assert_ne!(
            Fingerprint::from_parts(1_700_000_000, 42),
            Fingerprint::from_parts(1_700_000_001, 42)
        );
        assert_ne!(
            Fingerprint::from_parts(1_700_000_000, 42),
            Fingerprint::from_parts(1_700_000_000, 43)
        );
    }

    #[test]
    fn test_poll_reads_once_per_change() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "HELLO").unwrap();
        file.flush().unwrap();

        let mut watcher = FileWatcher::new(file.path());
        assert_eq!(watcher.poll().unwrap().as_deref(), Some("HELLO"));

        // Unchanged file: stat only, no re-read.
        assert_eq!(watcher.poll().unwrap(), None);
        assert_eq!(watcher.poll().unwrap(), None);
    }

    #[test]
    fn test_poll_detects_size_change() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ONE").unwrap();
        file.flush().unwrap();

        let mut watcher = FileWatcher::new(file.path());
        watcher.poll().unwrap();

        // A different byte count flips the fingerprint even when the mtime
        // granularity is too coarse to register.
        write!(file, " TWO").unwrap();
        file.flush().unwrap();
        assert_eq!(watcher.poll().unwrap().as_deref(), Some("ONE TWO"));
    }

    #[test]
    fn test_stat_failure_leaves_fingerprint_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("later.txt");

        let mut watcher = FileWatcher::new(&path);
        assert!(watcher.poll().is_err());

        // Once the file appears the change is still seen.
        fs::write(&path, "NOW").unwrap();
        assert_eq!(watcher.poll().unwrap().as_deref(), Some("NOW"));
    }

    #[test]
    fn test_read_failure_still_commits_fingerprint() {
        // Watching a directory: the stat succeeds, the read does not. The
        // fingerprint must commit anyway so the failed read is not retried
        // every frame.
        let dir = tempfile::tempdir().unwrap();
        let mut watcher = FileWatcher::new(dir.path());

        assert!(watcher.poll().is_err());
        assert_eq!(watcher.poll().unwrap(), None);
    }

    #[test]
    fn test_static_source_never_reports_changes() {
        let mut source = TextSource::Static("FIXED".to_string());
        assert_eq!(source.poll_changed(), None);
    }
}
