use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use std::io::Write;

impl Repository {
    pub async fn ls_files(&mut self, show_object_id: bool) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        for entry in index.entries() {
            let path = IndexEntry::portable_path(&entry.name);
            if show_object_id {
                writeln!(self.writer(), "{} {}", entry.oid, path)?;
            } else {
                writeln!(self.writer(), "{}", path)?;
            }
        }

        Ok(())
    }
}
