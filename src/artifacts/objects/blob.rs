//! Blob object
//!
//! Blobs store file content. They carry only the raw bytes, never the
//! file name.
//!
//! ## Format
//!
//! Hashed as: `blob <size>\0<content>`
//! Stored as: `<content>`

use crate::artifacts::objects::object::{Object, Packable};
use crate::errors::Result;
use bytes::{BufMut, Bytes, BytesMut};
use derive_new::new;

const BLOB_TYPE: &str = "blob";

/// File content identified by its hash
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl From<Vec<u8>> for Blob {
    fn from(content: Vec<u8>) -> Self {
        Blob::new(content.into())
    }
}

impl From<&'static str> for Blob {
    fn from(content: &'static str) -> Self {
        Blob::new(Bytes::from_static(content.as_bytes()))
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Result<Bytes> {
        let header = format!("{} {}\0", self.type_name(), self.content.len());

        let mut blob_bytes = BytesMut::with_capacity(header.len() + self.content.len());
        blob_bytes.put_slice(header.as_bytes());
        blob_bytes.put_slice(&self.content);

        Ok(blob_bytes.freeze())
    }
}

impl Object for Blob {
    fn type_name(&self) -> &'static str {
        BLOB_TYPE
    }

    fn payload(&self) -> &Bytes {
        &self.content
    }
}
