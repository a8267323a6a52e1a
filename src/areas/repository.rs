use crate::KIT_DIR;
use crate::areas::config::Config;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::ignore::IgnoreRules;
use crate::artifacts::status::status_info::Status;
use crate::errors::{Error, IoContext, Result};
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    config: Config,
}

impl Repository {
    /// Create a handle without checking that the repository exists
    ///
    /// The directory is created if missing. Used by `init`.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path).with_path("unable to create directory", path)?;
        }
        let path = path
            .canonicalize()
            .with_path("unable to resolve repository path", path)?;
        let kit_path = path.join(KIT_DIR);

        let config = Config::load(&kit_path.join("config"))?;
        let index = Index::new(kit_path.join("index").into_boxed_path());
        let database = Database::new(kit_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(kit_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
            config,
        })
    }

    /// Open an initialized repository rooted at `path`
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        if !path.join(KIT_DIR).is_dir() {
            return Err(Error::NotARepository(path.to_path_buf()));
        }

        Self::new(path, writer)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kit_path(&self) -> Box<Path> {
        self.path.join(KIT_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ignore_rules(&self) -> Result<IgnoreRules> {
        IgnoreRules::load(&self.path, &self.config.core.ignore_file)
    }

    pub fn status(&'_ self) -> Status<'_> {
        Status::new(self)
    }
}
