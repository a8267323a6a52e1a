use colored::Colorize;

const LABEL_WIDTH: usize = 8;

/// Exclusive classification of a path relative to the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileState {
    /// Staged and identical to the working tree
    Unchanged,
    /// Staged, but the working tree content differs
    Modified,
    /// Staged, but missing from the working tree
    Deleted,
    /// Present in the working tree, not staged
    Untracked,
}

impl FileState {
    /// Two-column code used by `status --porcelain`
    pub fn porcelain_code(&self) -> &'static str {
        match self {
            FileState::Unchanged => "A ",
            FileState::Modified => " M",
            FileState::Deleted => " D",
            FileState::Untracked => "??",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FileState::Unchanged => "staged:     ",
            FileState::Modified => "modified:   ",
            FileState::Deleted => "deleted:    ",
            FileState::Untracked => "",
        }
    }
}

impl std::fmt::Display for FileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let colored_str = match self {
            FileState::Unchanged => self.label().green(),
            _ => self.label().red(),
        };
        write!(f, "{:>width$}{}", "", colored_str, width = LABEL_WIDTH)
    }
}
