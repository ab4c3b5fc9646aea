use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

pub const ACTIVE_SESSION_TAB_KEY: &str = "upcomingSessions.activeTab";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage io error: {0}")]
    Io(#[from] io::Error),

    #[error("Storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!("cannot read {}: {}", self.path.display(), e);
                return BTreeMap::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("ignoring corrupt storage file {}: {}", self.path.display(), e);
            BTreeMap::new()
        })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut all = self.read_all();
        all.insert(key.to_string(), value.to_string());
        self.write_all(&all)
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut all = self.read_all();
        if all.remove(key).is_some() {
            self.write_all(&all)?;
        }
        Ok(())
    }

    fn write_all(&self, all: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(all)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
