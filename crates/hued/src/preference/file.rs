//! JSON file-backed preference store.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::PreferenceStore;
use crate::error::PreferenceError;

/// Stores preferences as a flat JSON object of strings.
///
/// A missing file reads as empty. Every `set` rewrites the whole file, keeping
/// other keys intact. A corrupt file fails `get` but is overwritten by `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file content; `None` when the file does not exist.
    fn read(&self) -> Result<Option<String>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PreferenceError::unavailable(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn parse(&self, content: &str) -> Result<BTreeMap<String, String>, PreferenceError> {
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(content).map_err(|e| {
            PreferenceError::unavailable(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn load(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match self.read()? {
            Some(content) => self.parse(&content),
            None => Ok(BTreeMap::new()),
        }
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let write_err = |e: io::Error| {
            PreferenceError::unavailable(format!("failed to write {}: {}", self.path.display(), e))
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = serde_json::to_string_pretty(values)
            .map_err(|e| PreferenceError::unavailable(e.to_string()))?;
        fs::write(&self.path, json + "\n").map_err(write_err)
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.load()?.remove(key))
    }

    /// Writes `key`, keeping other keys.
    ///
    /// A file that cannot be parsed is replaced by a fresh one holding only
    /// `key`; a file that cannot be read is left alone.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let content = self.read()?;
        let mut values = match content.as_deref().map(|c| self.parse(c)) {
            None => BTreeMap::new(),
            Some(Ok(values)) => values,
            Some(Err(e)) => {
                warn!(error = %e, "replacing unreadable preference file");
                BTreeMap::new()
            }
        };
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }
}
