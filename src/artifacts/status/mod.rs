//! Working tree status
//!
//! Compares a fresh snapshot of the working tree (path → current object id)
//! with the staging index.
//!
//! ## Components
//!
//! - `file_change`: Classification of a single path
//! - `inspector`: Re-hashing of working tree files and per-path comparison
//! - `status_info`: The status computation and its result

pub mod file_change;
pub mod inspector;
pub mod status_info;
