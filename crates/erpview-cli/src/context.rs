use crate::config::{CONFIG_FILE, Config, DATABASE_FILE};
use anyhow::{Context, Result};
use erpview_engine::{ViewOpener, ViewResolver};
use erpview_store::{RecordStore, SqliteStore, ViewConfigStore};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything a handler needs, loaded on first use.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    views: OnceCell<ViewConfigStore>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            views: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }

    /// View store over the SQLite database, in the configured environment.
    /// Creates the database if it does not exist yet.
    pub fn views(&self) -> Result<&ViewConfigStore> {
        self.views.get_or_try_init(|| {
            let environment = self.config()?.environment;
            std::fs::create_dir_all(&self.data_dir)?;

            let db_path = self.db_path();
            let backend = SqliteStore::open(&db_path)
                .with_context(|| format!("failed to open database at {}", db_path.display()))?;
            tracing::debug!(path = %db_path.display(), %environment, "opened view store");

            let records = RecordStore::new(Arc::new(backend), environment);
            Ok(ViewConfigStore::new(records))
        })
    }

    pub fn resolver(&self) -> Result<ViewResolver> {
        Ok(ViewResolver::new(
            self.views()?.clone(),
            self.config()?.static_aliases(),
        ))
    }

    pub fn opener(&self) -> Result<ViewOpener> {
        Ok(ViewOpener::new(self.resolver()?)
            .with_development_roles(self.config()?.development_roles.iter().cloned()))
    }
}
