use crate::artifacts::index::FIELD_SEPARATOR;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::{Component, Path, PathBuf};

/// A staged file: its path relative to the repository root and its content address
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    pub name: PathBuf,
    pub oid: ObjectId,
}

impl IndexEntry {
    /// Parse one index record
    ///
    /// Returns `None` unless the line splits into exactly two whitespace-separated
    /// fields with a valid object id first.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let (oid, name) = (fields.next()?, fields.next()?);
        if fields.next().is_some() {
            return None;
        }

        let oid = ObjectId::try_parse(oid).ok()?;
        Some(IndexEntry::new(PathBuf::from(name), oid))
    }

    /// Render the record, newline included, with `/` as the path separator
    pub fn to_line(&self) -> String {
        format!("{}{}{}\n", self.oid, FIELD_SEPARATOR, Self::portable_path(&self.name))
    }

    /// The `/`-joined form of a path, if every component survives a record round trip
    ///
    /// Whitespace would split the record into extra fields and a newline would
    /// start a new record, so names holding either are refused, as are names
    /// that are not valid UTF-8.
    pub fn recordable_path(path: &Path) -> Option<String> {
        let mut parts = Vec::new();
        for component in path.components() {
            if let Component::Normal(part) = component {
                let part = part.to_str()?;
                if part.chars().any(|c| c.is_whitespace() || c.is_control()) {
                    return None;
                }
                parts.push(part);
            }
        }

        Some(parts.join("/"))
    }

    pub fn portable_path(path: &Path) -> String {
        path.components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
