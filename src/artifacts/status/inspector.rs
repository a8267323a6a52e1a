use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileState;
use crate::errors::Result;
use derive_new::new;
use std::path::Path;

#[derive(new)]
pub struct Inspector<'w> {
    workspace: &'w Workspace,
}

impl<'w> Inspector<'w> {
    /// Hash the live content of a working tree file
    pub fn current_oid(&self, path: &Path) -> Result<ObjectId> {
        self.workspace.parse_blob(path)?.object_id()
    }

    /// Compare what the index holds for a path with what the working tree holds
    ///
    /// Returns `None` for a path that is in neither.
    pub fn check_index_against_workspace(
        staged: Option<&ObjectId>,
        current: Option<&ObjectId>,
    ) -> Option<FileState> {
        match (staged, current) {
            (None, None) => None,
            (None, Some(_)) => Some(FileState::Untracked),
            (Some(_), None) => Some(FileState::Deleted),
            (Some(staged), Some(current)) if staged != current => Some(FileState::Modified),
            (Some(_), Some(_)) => Some(FileState::Unchanged),
        }
    }
}
