//! Ignore rules
//!
//! Patterns are read from `.kitignore` at the repository root, one per line:
//!
//! - blank lines and lines starting with `#` are skipped
//! - a trailing `/` excludes a directory: the exact path or anything under it
//! - anything else is a glob matched against the file's base name only
//!
//! The first matching rule decides.

pub mod ignore_rule;

use crate::artifacts::ignore::ignore_rule::IgnoreRule;
use crate::errors::{IoContext, Result};
use std::path::Path;

/// Default name of the ignore file at the repository root
pub const IGNORE_FILE_NAME: &str = ".kitignore";

#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRules {
    /// Load rules from `<root>/<file_name>`; a missing file yields no rules
    pub fn load(root: &Path, file_name: &str) -> Result<Self> {
        let path = root.join(file_name);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).with_path("unable to read ignore file", &path)?;
        Self::from_patterns(content.lines())
    }

    /// Build rules from pattern lines, skipping blanks and comments
    pub fn from_patterns<'p>(patterns: impl IntoIterator<Item = &'p str>) -> Result<Self> {
        let rules = patterns
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(IgnoreRule::parse)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(rules = rules.len(), "loaded ignore rules");
        Ok(Self { rules })
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether a repository-relative path is excluded from tracking
    pub fn is_ignored(&self, relative_path: &Path) -> bool {
        self.rules.iter().any(|rule| rule.matches(relative_path))
    }
}
