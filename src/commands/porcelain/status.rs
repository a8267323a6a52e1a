use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::status::file_change::FileState;
use crate::artifacts::status::status_info::StatusInfo;
use crate::errors::Result;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Load the index and classify the working tree against it
    pub async fn status_info(&self) -> Result<StatusInfo> {
        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        self.status().compute(&index.to_snapshot())
    }

    pub async fn show_status(&mut self, porcelain: bool) -> anyhow::Result<()> {
        let status = self.status_info().await?;

        if porcelain {
            self.print_porcelain_format(&status)
        } else {
            self.print_long_format(&status)
        }
    }

    fn print_porcelain_format(&self, status: &StatusInfo) -> anyhow::Result<()> {
        let lines = status
            .staged
            .iter()
            .map(|path| (FileState::Unchanged, path))
            .chain(status.modified.iter().map(|path| (FileState::Modified, path)))
            .chain(status.deleted.iter().map(|path| (FileState::Deleted, path)))
            .chain(status.untracked.iter().map(|path| (FileState::Untracked, path)));

        for (state, path) in lines {
            writeln!(
                self.writer(),
                "{} {}",
                state.porcelain_code(),
                IndexEntry::portable_path(path)
            )?;
        }

        Ok(())
    }

    fn print_long_format(&self, status: &StatusInfo) -> anyhow::Result<()> {
        writeln!(self.writer(), "On branch {}", status.branch)?;

        if status.is_empty() {
            writeln!(self.writer(), "nothing to report, working tree clean")?;
            return Ok(());
        }

        let changed = status
            .modified
            .iter()
            .map(|path| (FileState::Modified, path.clone()))
            .chain(
                status
                    .deleted
                    .iter()
                    .map(|path| (FileState::Deleted, path.clone())),
            )
            .collect::<Vec<_>>();
        let staged = status
            .staged
            .iter()
            .map(|path| (FileState::Unchanged, path.clone()))
            .collect::<Vec<_>>();
        let untracked = status
            .untracked
            .iter()
            .map(|path| (FileState::Untracked, path.clone()))
            .collect::<Vec<_>>();

        self.print_changes("Changes to be committed:", &staged)?;
        self.print_changes("Changes not staged:", &changed)?;
        self.print_changes("Untracked files:", &untracked)?;

        Ok(())
    }

    fn print_changes(&self, title: &str, changes: &[(FileState, PathBuf)]) -> anyhow::Result<()> {
        if changes.is_empty() {
            return Ok(());
        }

        writeln!(self.writer())?;
        writeln!(self.writer(), "{}", title)?;

        for (state, path) in changes {
            let path = IndexEntry::portable_path(path);
            let path = match state {
                FileState::Unchanged => path.green(),
                _ => path.red(),
            };
            writeln!(self.writer(), "{}{}", state, path)?;
        }

        Ok(())
    }
}
