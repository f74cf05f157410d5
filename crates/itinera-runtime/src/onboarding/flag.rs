//! Persistent boolean flags.

use itinera_types::ErrorCode;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Flag store errors.
#[derive(Debug, Error)]
pub enum FlagError {
    /// Reading or writing the flag file failed.
    #[error("flag file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Flag file exists but is not a JSON object of booleans.
    #[error("failed to parse flag file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ErrorCode for FlagError {
    fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "FLAG_IO",
            Self::Parse { .. } => "FLAG_PARSE",
        }
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}

/// Key → bool storage owned by the host.
pub trait FlagStore {
    /// Returns the flag, `false` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<bool, FlagError>;

    /// Sets the flag.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError`] if the backing store cannot be written.
    fn set(&self, key: &str, value: bool) -> Result<(), FlagError>;
}

/// In-process flags, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    flags: Mutex<HashMap<String, bool>>,
}

impl MemoryFlagStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Result<bool, FlagError> {
        Ok(self.flags.lock().get(key).copied().unwrap_or(false))
    }

    fn set(&self, key: &str, value: bool) -> Result<(), FlagError> {
        self.flags.lock().insert(key.to_string(), value);
        Ok(())
    }
}

/// Flags kept in a JSON object on disk (`{"onboarding_complete": true}`).
///
/// The file is read on every `get` and rewritten on every `set`; a missing
/// file means every flag is unset.
#[derive(Debug, Clone)]
pub struct JsonFileFlagStore {
    path: PathBuf,
}

impl JsonFileFlagStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, bool>, FlagError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|source| FlagError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| FlagError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl FlagStore for JsonFileFlagStore {
    fn get(&self, key: &str) -> Result<bool, FlagError> {
        Ok(self.read_all()?.get(key).copied().unwrap_or(false))
    }

    fn set(&self, key: &str, value: bool) -> Result<(), FlagError> {
        let mut flags = self.read_all()?;
        flags.insert(key.to_string(), value);

        let io_err = |source: std::io::Error| FlagError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let json = serde_json::to_string_pretty(&flags).map_err(|source| FlagError::Parse {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(io_err)?;

        debug!(path = %self.path.display(), key, value, "Flag written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinera_types::assert_error_code;
    use tempfile::TempDir;

    #[test]
    fn memory_store_defaults_false() {
        let store = MemoryFlagStore::new();
        assert!(!store.get("x").unwrap());
        store.set("x", true).unwrap();
        assert!(store.get("x").unwrap());
    }

    #[test]
    fn json_store_missing_file_is_unset() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileFlagStore::new(temp.path().join("flags.json"));
        assert!(!store.get("onboarding_complete").unwrap());
    }

    #[test]
    fn json_store_persists_across_instances() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("flags.json");

        JsonFileFlagStore::new(&path).set("a", true).unwrap();
        JsonFileFlagStore::new(&path).set("b", false).unwrap();

        let store = JsonFileFlagStore::new(&path);
        assert!(store.get("a").unwrap());
        assert!(!store.get("b").unwrap());

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"a\": true"));
    }

    #[test]
    fn json_store_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("flags.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let err = JsonFileFlagStore::new(&path).get("a").unwrap_err();
        assert_eq!(err.code(), "FLAG_PARSE");
        assert_error_code(&err, "FLAG_");
    }
}
