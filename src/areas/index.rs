//! Staging index
//!
//! The index records which content each tracked path should have. On disk it is
//! an append-only log of `<oid> <path>` lines; in memory it is the log replayed
//! into a path-ordered map, so a later record for a path supersedes earlier ones.
//!
//! ## Locking
//!
//! Readers take a shared lock on the index file. Writers go through
//! [`Index::lock_for_update`], which holds an exclusive lock for as long as the
//! returned [`IndexUpdate`] lives, covering both the reload and every append.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::status::status_info::Snapshot;
use crate::errors::{Error, IoContext, Result};
use file_guard::{FileGuard, Lock};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.kit/index`)
    path: Box<Path>,
    /// Latest entry per path
    entries: BTreeMap<PathBuf, IndexEntry>,
    /// Number of well-formed records replayed or appended
    records: usize,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            records: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.records = 0;
    }

    /// Load the index from disk
    ///
    /// A missing index file means nothing is staged yet.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_path("unable to open index", self.path())?;
        let lock = file_guard::lock(&mut index_file, Lock::Shared, 0, 1)
            .with_path("unable to lock index", self.path())?;

        let mut reader: &File = &lock;
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .with_path("unable to read index", self.path())?;

        self.replay(&content);
        Ok(())
    }

    /// Take the exclusive index lock and reload the index under it
    ///
    /// The index file is created if absent. The lock is released when the
    /// returned guard is dropped.
    pub fn lock_for_update(&mut self) -> Result<IndexUpdate<'_>> {
        let index_file = std::fs::OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(self.path())
            .with_path("unable to open index", self.path())?;
        let guard = file_guard::lock(Box::new(index_file), Lock::Exclusive, 0, 1)
            .with_path("unable to lock index", self.path())?;

        let mut reader: &File = &guard;
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .with_path("unable to read index", self.path())?;

        // a torn trailing record would swallow the next append
        if !content.is_empty() && !content.ends_with('\n') {
            let complete = content.rfind('\n').map_or(0, |i| i + 1);
            tracing::warn!(
                dropped = content.len() - complete,
                "discarding unterminated index record"
            );
            guard
                .set_len(complete as u64)
                .with_path("unable to truncate index", self.path())?;
            content.truncate(complete);
        }

        self.clear();
        self.replay(&content);

        Ok(IndexUpdate { index: self, guard })
    }

    fn replay(&mut self, content: &str) {
        for (line_number, line) in content.lines().enumerate() {
            match IndexEntry::parse_line(line) {
                Some(entry) => {
                    self.records += 1;
                    self.entries.insert(entry.name.clone(), entry);
                }
                None => tracing::trace!(line = line_number + 1, "skipping malformed index record"),
            }
        }

        tracing::debug!(
            entries = self.entries.len(),
            records = self.records,
            "loaded index"
        );
    }

    /// Entries ordered by path
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    /// Path → object id view of the current entries
    pub fn to_snapshot(&self) -> Snapshot {
        self.entries
            .iter()
            .map(|(path, entry)| (path.clone(), entry.oid.clone()))
            .collect()
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in the log, superseded ones included
    pub fn records(&self) -> usize {
        self.records
    }
}

/// Exclusive write access to the index
pub struct IndexUpdate<'i> {
    index: &'i mut Index,
    guard: FileGuard<Box<File>>,
}

impl IndexUpdate<'_> {
    /// Append one record; it supersedes any earlier record for the same path
    pub fn append(&mut self, entry: IndexEntry) -> Result<()> {
        let mut writer: &File = &self.guard;
        let length = writer
            .metadata()
            .with_path("unable to read index metadata", self.index.path())?
            .len();

        if let Err(e) = writer.write_all(entry.to_line().as_bytes()) {
            // roll back a partial record
            let _ = writer.set_len(length);
            return Err(Error::io("unable to write index", self.index.path(), e));
        }

        tracing::debug!(path = %entry.name.display(), oid = %entry.oid, "staged");
        self.index.records += 1;
        self.index.entries.insert(entry.name.clone(), entry);

        Ok(())
    }
}
