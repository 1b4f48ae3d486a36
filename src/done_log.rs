//! Resume log of processed release MBIDs.
//!
//! Plain text, one MBID per line, appended and flushed as each release is
//! handled so an interrupted batch run can pick up where it left off. Lives
//! in the OS data directory unless the config overrides the path.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Append-only log of already-processed MBIDs.
pub struct DoneLog {
    path: PathBuf,
    seen: HashSet<String>,
    file: File,
}

/// Default log location: <data dir>/isrc-sync/done
pub fn default_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("isrc-sync").join("done"))
}

impl DoneLog {
    /// Open (or create) the log at `path`, loading all previously recorded
    /// MBIDs. A missing file is a normal first run, not an error.
    pub fn open(path: &Path) -> Result<Self, Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::done_log(path, e.to_string()))?;
        }

        let mut seen = HashSet::new();
        if path.exists() {
            let file = File::open(path).map_err(|e| Error::done_log(path, e.to_string()))?;
            for line in BufReader::new(file).lines() {
                let line = line.map_err(|e| Error::done_log(path, e.to_string()))?;
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    seen.insert(trimmed.to_string());
                }
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::done_log(path, e.to_string()))?;

        tracing::debug!(path = %path.display(), entries = seen.len(), "opened done log");

        Ok(Self {
            path: path.to_path_buf(),
            seen,
            file,
        })
    }

    /// Has this MBID already been processed?
    pub fn contains(&self, mbid: &str) -> bool {
        self.seen.contains(mbid)
    }

    /// Record an MBID as processed. Flushed immediately.
    pub fn append(&mut self, mbid: &str) -> Result<(), Error> {
        if !self.seen.insert(mbid.to_string()) {
            return Ok(());
        }
        writeln!(self.file, "{mbid}").map_err(|e| Error::done_log(&self.path, e.to_string()))?;
        self.file
            .flush()
            .map_err(|e| Error::done_log(&self.path, e.to_string()))?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let log = DoneLog::open(&dir.path().join("done")).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_append_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("done");

        {
            let mut log = DoneLog::open(&path).unwrap();
            log.append("mbid-1").unwrap();
            log.append("mbid-2").unwrap();
        }

        let log = DoneLog::open(&path).unwrap();
        assert_eq!(log.len(), 2);
        assert!(log.contains("mbid-1"));
        assert!(log.contains("mbid-2"));
        assert!(!log.contains("mbid-3"));
    }

    #[test]
    fn test_duplicate_append_recorded_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("done");

        let mut log = DoneLog::open(&path).unwrap();
        log.append("mbid-1").unwrap();
        log.append("mbid-1").unwrap();
        drop(log);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn test_parent_directories_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dirs").join("done");
        let mut log = DoneLog::open(&path).unwrap();
        log.append("mbid-1").unwrap();
        assert!(path.exists());
    }
}
