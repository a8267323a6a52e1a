use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::{Error, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum IgnoreRule {
    /// `name/`: the directory itself and everything below it
    DirectoryPrefix(String),
    /// Glob matched against the base name
    BaseName(glob::Pattern),
}

impl IgnoreRule {
    pub fn parse(line: &str) -> Result<Self> {
        if let Some(dir) = line.strip_suffix('/') {
            return Ok(IgnoreRule::DirectoryPrefix(dir.trim_end_matches('/').to_string()));
        }

        glob::Pattern::new(line)
            .map(IgnoreRule::BaseName)
            .map_err(|source| Error::Pattern {
                pattern: line.to_string(),
                source,
            })
    }

    pub fn matches(&self, relative_path: &Path) -> bool {
        match self {
            IgnoreRule::DirectoryPrefix(dir) => {
                let path = IndexEntry::portable_path(relative_path);
                path == *dir
                    || path
                        .strip_prefix(dir.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            IgnoreRule::BaseName(pattern) => relative_path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy())),
        }
    }
}
