//! JSON file document store
//!
//! One JSON object per file, mapping entity ID to record. Writes go to a
//! sibling temp file that is then renamed over the store file.

use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::traits::{DocumentStore, Documents};
use crate::error::Result;

pub struct JsonFileStore<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> JsonFileStore<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl<R: Serialize + DeserializeOwned> DocumentStore<R> for JsonFileStore<R> {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Documents<R>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store file missing, starting empty");
                return Ok(Documents::new());
            }
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Documents::new());
        }

        let documents: Documents<R> = serde_json::from_str(&contents)?;
        debug!(count = documents.len(), "Loaded documents");
        Ok(documents)
    }

    #[instrument(skip(self, documents), fields(path = %self.path.display(), count = documents.len()))]
    fn overwrite(&self, documents: &Documents<R>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, serde_json::to_vec(documents)?)?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            warn!(error = %e, "Rename over store file failed, removing temp file");
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        debug!("Store rewritten");
        Ok(())
    }
}
