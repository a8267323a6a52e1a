//! Index file format
//!
//! The index is a plain-text, append-only log. Every `add` appends one record:
//!
//! ```text
//! <64 hex object id> <repository-relative path>
//! ```
//!
//! Reading the log back replays it in order, so the last record for a path wins.

pub mod index_entry;

/// Separator between the object id and the path of a record
pub const FIELD_SEPARATOR: char = ' ';
