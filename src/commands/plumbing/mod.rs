//! Plumbing commands
//!
//! - `hash_object`: Compute (and optionally store) a file's object id
//! - `cat_file`: Print a stored object
//! - `ls_files`: List the index

pub mod cat_file;
pub mod hash_object;
pub mod ls_files;
