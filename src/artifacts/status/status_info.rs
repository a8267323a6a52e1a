use crate::areas::repository::Repository;
use crate::artifacts::ignore::IgnoreRules;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileState;
use crate::artifacts::status::inspector::Inspector;
use crate::errors::Result;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub type FileSet = BTreeSet<PathBuf>;
/// Path → object id, for the index or for the working tree
pub type Snapshot = BTreeMap<PathBuf, ObjectId>;

// Terminology:
// - staged files: every path in the index; with no commits, all of them are pending
// - modified files: staged, but the working tree content hashes differently
// - deleted files: staged, but gone from the working tree
// - untracked files: in the working tree, not in the index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub branch: String,
    pub staged: FileSet,
    pub modified: Vec<PathBuf>,
    pub deleted: Vec<PathBuf>,
    pub untracked: Vec<PathBuf>,
}

impl StatusInfo {
    /// Classify every path of the working tree snapshot and of the index
    ///
    /// Ignored paths never show up as modified, deleted or untracked, even
    /// when they are staged.
    pub fn classify(
        branch: String,
        index: &Snapshot,
        workspace: &Snapshot,
        is_ignored: impl Fn(&Path) -> bool,
    ) -> Self {
        let mut modified = Vec::new();
        let mut untracked = Vec::new();

        for (path, current) in workspace.iter().filter(|(path, _)| !is_ignored(path)) {
            match Inspector::check_index_against_workspace(index.get(path), Some(current)) {
                Some(FileState::Modified) => modified.push(path.clone()),
                Some(FileState::Untracked) => untracked.push(path.clone()),
                _ => {}
            }
        }

        let deleted = index
            .keys()
            .filter(|path| !workspace.contains_key(*path) && !is_ignored(path))
            .cloned()
            .collect();

        StatusInfo {
            branch,
            staged: index.keys().cloned().collect(),
            modified,
            deleted,
            untracked,
        }
    }

    /// True when there is nothing at all to report
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
            && self.modified.is_empty()
            && self.deleted.is_empty()
            && self.untracked.is_empty()
    }

    /// Staged paths whose working tree content still matches the index
    pub fn unchanged(&self) -> impl Iterator<Item = &PathBuf> {
        self.staged
            .iter()
            .filter(|path| !self.modified.contains(path) && !self.deleted.contains(path))
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Walk the working tree and classify it against the given index
    #[tracing::instrument(skip_all, fields(root = %self.repository.path().display()))]
    pub fn compute(&self, index: &Snapshot) -> Result<StatusInfo> {
        let branch = self.repository.refs().read_head()?;
        let ignore = self.repository.ignore_rules()?;
        let workspace = self.scan_workspace(&ignore)?;

        let status = StatusInfo::classify(
            branch.branch_name().to_string(),
            index,
            &workspace,
            |path| ignore.is_ignored(path),
        );

        tracing::debug!(
            staged = status.staged.len(),
            modified = status.modified.len(),
            deleted = status.deleted.len(),
            untracked = status.untracked.len(),
            "computed status"
        );
        Ok(status)
    }

    fn scan_workspace(&self, ignore: &IgnoreRules) -> Result<Snapshot> {
        let inspector = Inspector::new(self.repository.workspace());

        self.repository
            .workspace()
            .list_files(ignore)
            .into_iter()
            .map(|path| {
                let oid = inspector.current_oid(&path)?;
                Ok((path, oid))
            })
            .collect()
    }
}
