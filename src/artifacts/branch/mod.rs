//! Branch names and symbolic references
//!
//! kit tracks a single symbolic reference, `HEAD`, which names the current
//! branch as `ref: refs/heads/<branch>`.

pub mod branch_name;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Prefix of branch references relative to the kit directory
pub const HEADS_PREFIX: &str = "refs/heads/";
