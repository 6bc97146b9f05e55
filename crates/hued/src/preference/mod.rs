//! Persisted preferences.
//!
//! The theme choice is stored under a single string key through a
//! [`PreferenceStore`]. Stores are injected into whoever needs them, so
//! tests can substitute [`MemoryStore`] (or a store that always fails) for
//! the on-disk [`JsonFileStore`].

mod file;

use std::collections::HashMap;

use crate::error::PreferenceError;

pub use file::JsonFileStore;

/// Key under which the selected theme name is stored.
pub const THEME_KEY: &str = "theme";

/// A string key-value store that may be unavailable.
pub trait PreferenceStore {
    /// Reads a value. `Ok(None)` means the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    /// Create an empty, working store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every operation fails with
    /// [`PreferenceError::StorageUnavailable`].
    pub fn unavailable() -> Self {
        Self {
            values: HashMap::new(),
            unavailable: true,
        }
    }

    /// Builder: pre-populate a value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    fn check(&self) -> Result<(), PreferenceError> {
        if self.unavailable {
            Err(PreferenceError::unavailable("storage disabled"))
        } else {
            Ok(())
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.check()?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.check()?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
