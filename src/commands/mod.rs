//! Command implementations
//!
//! - `plumbing`: Low-level commands for direct object and index access (hash-object, cat-file, ls-files)
//! - `porcelain`: User-facing commands (init, add, status)
//!
//! Each command is an `impl Repository` block: the porcelain ones expose the
//! underlying operation returning data, plus a method rendering it to the
//! repository writer.

pub mod plumbing;
pub mod porcelain;
