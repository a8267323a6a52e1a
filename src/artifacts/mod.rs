//! Data structures and algorithms
//!
//! - `branch`: Branch names and the symbolic HEAD reference
//! - `ignore`: Ignore file parsing and matching
//! - `index`: Index record format
//! - `objects`: Blob objects and content addressing
//! - `status`: Working tree status inspection

pub mod branch;
pub mod ignore;
pub mod index;
pub mod objects;
pub mod status;
