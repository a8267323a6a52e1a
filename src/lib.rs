//! kit: a minimal content-addressed file tracker
//!
//! - `areas`: on-disk components of a repository (object database, index, refs, config, workspace)
//! - `artifacts`: data types and algorithms (objects, index entries, ignore rules, status)
//! - `commands`: plumbing and porcelain operations exposed through the CLI
//! - `errors`: the error type shared by every operation

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Name of the metadata directory at the repository root
pub const KIT_DIR: &str = ".kit";
