//! Ledger configuration
//!
//! Selects the storage backend and where its files live. Loaded from TOML,
//! for example:
//!
//! ```toml
//! backend = "sqlite"
//! data_dir = "/var/lib/innkeep"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Storage backend for the hotel and customer stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON file per entity kind
    #[default]
    Json,
    /// A single SQLite file holding both kinds
    Sqlite,
    /// Nothing written to disk
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub backend: Backend,
    /// Directory for store files; platform data directory when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_hotels_file")]
    pub hotels_file: String,
    #[serde(default = "default_customers_file")]
    pub customers_file: String,
    #[serde(default = "default_sqlite_file")]
    pub sqlite_file: String,
}

fn default_hotels_file() -> String {
    "hotels.json".to_string()
}

fn default_customers_file() -> String {
    "customers.json".to_string()
}

fn default_sqlite_file() -> String {
    "innkeep.db".to_string()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            data_dir: None,
            hotels_file: default_hotels_file(),
            customers_file: default_customers_file(),
            sqlite_file: default_sqlite_file(),
        }
    }
}

impl LedgerConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Read a config file, falling back to defaults when it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Directory the store files are kept in
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }

    pub fn hotels_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.hotels_file))
    }

    pub fn customers_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.customers_file))
    }

    pub fn sqlite_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.sqlite_file))
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "onyx", "innkeep").ok_or_else(|| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine data directory",
        ))
    })
}

/// Platform data directory for store files
pub fn default_data_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

/// Platform location of `innkeep.toml`
pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("innkeep.toml"))
}
