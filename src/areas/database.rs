//! Object database
//!
//! Objects live under `.kit/objects`, sharded by the first two hex characters of
//! their id. Storing is write-once: an object that already exists is never
//! rewritten, and new objects are written to a temporary file and renamed into
//! place so readers never observe a partial object.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, IoContext, Result};
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    /// Hash an object and store its payload
    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        let object_id = object.object_id()?;
        self.put(&object_id, object.payload())?;

        Ok(object_id)
    }

    /// Persist a payload under its content address unless it is already stored
    pub fn put(&self, object_id: &ObjectId, payload: &[u8]) -> Result<()> {
        let object_path = self.object_path(object_id);

        if object_path.exists() {
            tracing::debug!(oid = %object_id, "object already stored");
            return Ok(());
        }

        let object_dir = object_path
            .parent()
            .ok_or_else(|| Error::InvalidObjectId(object_id.to_string()))?;
        std::fs::create_dir_all(object_dir)
            .with_path("unable to create object directory", object_dir)?;

        self.write_object(object_dir, &object_path, payload)?;
        tracing::debug!(oid = %object_id, size = payload.len(), "stored object");

        Ok(())
    }

    pub fn load(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.object_path(object_id);

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::ObjectNotFound(object_id.to_string()))
            }
            Err(e) => Err(Error::io("unable to read object file", object_path, e)),
        }
    }

    fn write_object(&self, object_dir: &Path, object_path: &Path, payload: &[u8]) -> Result<()> {
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .with_path("unable to open object file", &temp_object_path)?;

        if let Err(e) = file.write_all(payload).and_then(|_| file.sync_all()) {
            let _ = std::fs::remove_file(&temp_object_path);
            return Err(Error::io("unable to write object file", &temp_object_path, e));
        }

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path).map_err(|e| {
            let _ = std::fs::remove_file(&temp_object_path);
            Error::io("unable to rename object file", object_path, e)
        })
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
