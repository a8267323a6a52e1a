use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use bytes::Bytes;
use sha2::{Digest, Sha256};

pub trait Packable {
    /// Framed representation the object id is computed over
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Object: Packable {
    fn type_name(&self) -> &'static str;

    /// Raw bytes written to the object database
    fn payload(&self) -> &Bytes;

    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        let mut hasher = Sha256::new();
        hasher.update(&content);

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}"))
    }
}
