//! Repository configuration
//!
//! Read from `.kit/config` (TOML). Every key is optional:
//!
//! ```toml
//! [core]
//! default_branch = "master"
//! ignore_file = ".kitignore"
//!
//! [add]
//! fail_fast = true
//! ```

use crate::artifacts::ignore::IGNORE_FILE_NAME;
use crate::errors::{Error, IoContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BRANCH: &str = "master";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub core: CoreConfig,
    pub add: AddConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Branch HEAD points at after `init`
    pub default_branch: String,
    /// Ignore file name, relative to the repository root
    pub ignore_file: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            default_branch: DEFAULT_BRANCH.to_string(),
            ignore_file: IGNORE_FILE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddConfig {
    /// Abort `add` on the first file that cannot be staged
    pub fail_fast: bool,
}

impl Default for AddConfig {
    fn default() -> Self {
        AddConfig { fail_fast: true }
    }
}

impl Config {
    /// Load the config file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path).with_path("unable to read config", path)?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
