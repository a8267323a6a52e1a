use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;
use std::fs;
use std::io::Write;

const DEFAULT_DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

impl Repository {
    /// Create the kit directory layout; existing files are left untouched
    pub async fn init(&mut self) -> anyhow::Result<()> {
        let kit_path = self.kit_path();

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .kit/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .kit/refs/heads directory")?;

        if !self.refs().head_path().exists() {
            let branch = BranchName::try_parse(self.config().core.default_branch.clone())
                .context("Invalid default branch in config")?;
            self.refs()
                .set_head(&branch)
                .context("Failed to create initial HEAD reference")?;
        }

        let config_path = kit_path.join("config");
        if !config_path.exists() {
            let config =
                toml::to_string_pretty(self.config()).context("Failed to serialize config")?;
            fs::write(&config_path, config).context("Failed to create .kit/config file")?;
        }

        let description_path = kit_path.join("description");
        if !description_path.exists() {
            fs::write(&description_path, DEFAULT_DESCRIPTION)
                .context("Failed to create .kit/description file")?;
        }

        let index = self.index();
        let index = index.lock().await;
        // create the index file if it does not exist
        if !index.path().exists() {
            fs::write(index.path(), b"").context("Failed to create .kit/index file")?;
        }

        tracing::info!(path = %self.path().display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty kit repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
