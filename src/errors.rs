use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by repository operations.
///
/// Every variant carries the path or value it concerns so the frontend can
/// report it without extra context.
#[derive(Debug, Error)]
pub enum Error {
    #[error("pathspec '{}' did not match any files", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is a directory", .0.display())]
    IsADirectory(PathBuf),

    #[error("unsupported path {0:?}: names with whitespace, control characters or invalid UTF-8 cannot be recorded in the index")]
    UnsupportedPath(PathBuf),

    #[error("'{}' is outside repository at '{}'", .path.display(), .root.display())]
    OutsideRepository { path: PathBuf, root: PathBuf },

    #[error("{action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("not a kit repository (or no {} directory): {}", crate::KIT_DIR, .0.display())]
    NotARepository(PathBuf),

    #[error("invalid metadata in '{}': {reason}", .path.display())]
    InvalidMetadata { path: PathBuf, reason: String },

    #[error("invalid branch name '{0}'")]
    InvalidBranchName(String),

    #[error("invalid object id '{0}'")]
    InvalidObjectId(String),

    #[error("object {0} not found")]
    ObjectNotFound(String),

    #[error("invalid config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Attach the failing path to an `std::io::Result`.
pub(crate) trait IoContext<T> {
    fn with_path(self, action: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn with_path(self, action: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::io(action, path, source))
    }
}
