use crate::KIT_DIR;
use crate::artifacts::ignore::IgnoreRules;
use crate::artifacts::objects::blob::Blob;
use crate::errors::{Error, Result};
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a repository-relative path lies inside a kit directory
    pub fn is_metadata_path(path: &Path) -> bool {
        path.components()
            .any(|component| matches!(component, Component::Normal(name) if name == KIT_DIR))
    }

    /// All tracked-candidate files under the root, relative and sorted by path
    ///
    /// Kit directories are never entered and ignored files are left out.
    /// Entries the walk cannot read are logged and skipped.
    pub fn list_files(&self, ignore: &IgnoreRules) -> Vec<PathBuf> {
        WalkDir::new(&self.path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_kit_dir(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable workspace entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.relative_path(entry.path()))
            .filter(|path| !ignore.is_ignored(path))
            .collect()
    }

    fn is_kit_dir(entry: &DirEntry) -> bool {
        entry.file_type().is_dir() && entry.file_name() == KIT_DIR
    }

    fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(self.path.as_ref())
            .ok()
            .map(Path::to_path_buf)
    }

    /// Resolve a user-supplied target to a path relative to the root
    ///
    /// Relative targets are taken relative to the root. Returns an empty path
    /// for the root itself.
    pub fn resolve(&self, target: &Path) -> Result<PathBuf> {
        let absolute = self.path.join(target);

        let canonical = match std::fs::canonicalize(&absolute) {
            Ok(canonical) => canonical,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound(target.to_path_buf()));
            }
            Err(e) => return Err(Error::io("unable to resolve path", absolute, e)),
        };

        canonical
            .strip_prefix(self.path.as_ref())
            .map(Path::to_path_buf)
            .map_err(|_| Error::OutsideRepository {
                path: target.to_path_buf(),
                root: self.path.to_path_buf(),
            })
    }

    pub fn read_file(&self, file_path: &Path) -> Result<Bytes> {
        let path = self.path.join(file_path);

        match std::fs::read(&path) {
            Ok(content) => Ok(content.into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::NotFound(file_path.to_path_buf()))
            }
            Err(_) if path.is_dir() => Err(Error::IsADirectory(file_path.to_path_buf())),
            Err(e) => Err(Error::io("unable to read file", path, e)),
        }
    }

    pub fn parse_blob(&self, file_path: &Path) -> Result<Blob> {
        Ok(Blob::new(self.read_file(file_path)?))
    }

    pub fn is_dir(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_dir()
    }
}
