use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub fn hash_object(&mut self, object_path: &str, write: bool) -> anyhow::Result<()> {
        let object = self
            .workspace()
            .parse_blob(Path::new(object_path))
            .with_context(|| format!("Unable to hash {}", object_path))?;

        let object_id = if write {
            self.database().store(&object)?
        } else {
            object.object_id()?
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
