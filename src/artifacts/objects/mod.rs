//! Content-addressed objects
//!
//! kit stores a single kind of object, the blob: the raw bytes of a file.
//! A blob is identified by the SHA-256 digest of its framed form
//! `blob <size>\0<content>`, so identical content always maps to the same id.

pub mod blob;
pub mod object;
pub mod object_id;

/// Length of a SHA-256 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 64;
