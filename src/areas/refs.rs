//! References
//!
//! kit keeps one symbolic reference, `HEAD`, stored as `ref: <path>` where the
//! path is relative to the kit directory (normally `refs/heads/<branch>`).
//! Branch files under `refs/heads` exist but never hold a commit: there are no
//! commits to point at.

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::errors::{Error, IoContext, Result};
use derive_new::new;
use std::path::Path;
use std::sync::LazyLock;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

static SYMREF: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(SYMREF_REGEX).expect("symref pattern compiles"));

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the kit directory
    path: Box<Path>,
}

impl Refs {
    /// Read the branch HEAD points at
    ///
    /// A HEAD that is missing or does not hold `ref: <path>` is invalid metadata.
    pub fn read_head(&self) -> Result<SymRefName> {
        let head_path = self.head_path();

        let content = match std::fs::read_to_string(&head_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::InvalidMetadata {
                    path: head_path.into(),
                    reason: "HEAD is missing".to_string(),
                });
            }
            Err(e) => return Err(Error::io("unable to read HEAD", head_path, e)),
        };

        SYMREF
            .captures(content.trim())
            .map(|captures| SymRefName::new(captures[1].trim().to_string()))
            .ok_or_else(|| Error::InvalidMetadata {
                path: head_path.into(),
                reason: "expected 'ref: <path>'".to_string(),
            })
    }

    /// Point HEAD at a branch and make sure its ref file exists
    pub fn set_head(&self, branch: &BranchName) -> Result<()> {
        let sym_ref = branch.to_sym_ref_name();
        let head_path = self.head_path();

        std::fs::write(&head_path, format!("ref: {}\n", sym_ref))
            .with_path("unable to write HEAD", &*head_path)?;

        let branch_path = self.path.join(sym_ref.as_ref_path());
        if let Some(parent) = branch_path.parent() {
            std::fs::create_dir_all(parent)
                .with_path("unable to create refs directory", parent)?;
        }
        if !branch_path.exists() {
            std::fs::write(&branch_path, b"")
                .with_path("unable to create branch file", &branch_path)?;
        }

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
