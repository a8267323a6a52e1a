use crate::areas::index::IndexUpdate;
use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::ignore::IgnoreRules;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of staging a list of targets
#[derive(Debug, Default)]
pub struct AddReport {
    pub added: Vec<IndexEntry>,
    pub ignored: Vec<PathBuf>,
    /// Only filled when `add.fail_fast` is off
    pub failed: Vec<(PathBuf, Error)>,
}

enum Candidate {
    File(PathBuf),
    Ignored(PathBuf),
}

impl Repository {
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let targets = paths.iter().map(PathBuf::from).collect::<Vec<_>>();
        let report = self.stage(&targets).await?;

        for entry in &report.added {
            writeln!(
                self.writer(),
                "add '{}'",
                IndexEntry::portable_path(&entry.name)
            )?;
        }
        for path in &report.ignored {
            writeln!(
                self.writer(),
                "ignored '{}'",
                IndexEntry::portable_path(path)
            )?;
        }
        for (path, error) in &report.failed {
            writeln!(self.writer(), "error: {}: {}", path.display(), error)?;
        }

        if !report.failed.is_empty() {
            anyhow::bail!(
                "{} path(s) could not be staged, {} staged",
                report.failed.len(),
                report.added.len()
            );
        }

        Ok(())
    }

    /// Hash, store and index every target
    ///
    /// A target that resolves to the repository root stages every
    /// non-ignored file; any other directory is rejected. The exclusive index
    /// lock is held until all targets are processed.
    #[tracing::instrument(skip_all, fields(targets = targets.len()))]
    pub async fn stage(&self, targets: &[PathBuf]) -> Result<AddReport> {
        let fail_fast = self.config().add.fail_fast;
        let ignore = self.ignore_rules()?;

        let index = self.index();
        let mut index = index.lock().await;
        let mut update = index.lock_for_update()?;

        let mut report = AddReport::default();

        for target in targets {
            let candidates = match self.expand_target(target, &ignore) {
                Ok(candidates) => candidates,
                Err(e) if !fail_fast => {
                    report.failed.push((target.clone(), e));
                    continue;
                }
                Err(e) => return Err(e),
            };

            for candidate in candidates {
                match candidate {
                    Candidate::Ignored(path) => report.ignored.push(path),
                    Candidate::File(path) => match self.stage_file(&path, &mut update) {
                        Ok(entry) => report.added.push(entry),
                        Err(e) if !fail_fast => report.failed.push((path, e)),
                        Err(e) => return Err(e),
                    },
                }
            }
        }

        tracing::info!(
            added = report.added.len(),
            ignored = report.ignored.len(),
            failed = report.failed.len(),
            "staged files"
        );
        Ok(report)
    }

    fn expand_target(&self, target: &Path, ignore: &IgnoreRules) -> Result<Vec<Candidate>> {
        let relative = self.workspace().resolve(target)?;

        if relative.as_os_str().is_empty() {
            return Ok(self
                .workspace()
                .list_files(ignore)
                .into_iter()
                .map(Candidate::File)
                .collect());
        }

        if self.workspace().is_dir(&relative) {
            return Err(Error::IsADirectory(target.to_path_buf()));
        }

        if Workspace::is_metadata_path(&relative) || ignore.is_ignored(&relative) {
            tracing::debug!(path = %relative.display(), "skipping ignored path");
            return Ok(vec![Candidate::Ignored(relative)]);
        }

        Ok(vec![Candidate::File(relative)])
    }

    fn stage_file(&self, path: &Path, update: &mut IndexUpdate<'_>) -> Result<IndexEntry> {
        if IndexEntry::recordable_path(path).is_none() {
            return Err(Error::UnsupportedPath(path.to_path_buf()));
        }

        let blob = self.workspace().parse_blob(path)?;
        let oid = self.database().store(&blob)?;

        let entry = IndexEntry::new(path.to_path_buf(), oid);
        update.append(entry.clone())?;

        Ok(entry)
    }
}
