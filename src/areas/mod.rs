//! Core repository components
//!
//! - `config`: Repository configuration (`.kit/config`)
//! - `database`: Content-addressed object storage
//! - `index`: Staging area tracking the content of each path
//! - `refs`: The symbolic HEAD reference
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Working directory file system operations

pub mod config;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
