//! Key-value storage backends
//!
//! Holds the persisted preferences and history under fixed string keys.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access store file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to (de)serialize store: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Get/set capability by string key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory store.
///
/// Clones share the same map, so building a new store over a clone behaves
/// like reloading the page.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Returns the store file path.
///
/// Priority:
/// 1. Environment variable `PWD_METER_STORE_PATH`
/// 2. Default path `./pwd-meter-store.json`
pub fn get_store_path() -> PathBuf {
    std::env::var("PWD_METER_STORE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./pwd-meter-store.json"))
}

/// Store persisted as a single JSON object on disk.
///
/// Every write rewrites the whole file. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens the store at the path from [`get_store_path`].
    pub fn open_default() -> Self {
        Self::open(get_store_path())
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        let entries = serde_json::from_str(&content)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Store loaded from {:?}", self.path);

        Ok(entries)
    }

    fn save(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Store saved to {:?}", self.path);

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_memory_store_get_set() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("light".to_string()));
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let reloaded = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(reloaded.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    #[serial]
    fn test_get_store_path_default() {
        remove_env("PWD_METER_STORE_PATH");

        let path = get_store_path();
        assert_eq!(path, PathBuf::from("./pwd-meter-store.json"));
    }

    #[test]
    #[serial]
    fn test_get_store_path_from_env() {
        let custom_path = "/custom/path/store.json";
        set_env("PWD_METER_STORE_PATH", custom_path);

        let path = get_store_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_METER_STORE_PATH");
    }

    #[test]
    #[serial]
    fn test_file_store_open_default_uses_env() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("store.json");
        set_env("PWD_METER_STORE_PATH", path.to_str().unwrap());

        let store = FileStore::open_default();
        assert_eq!(store.path(), path.as_path());

        remove_env("PWD_METER_STORE_PATH");
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::open(dir.path().join("absent.json"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("store.json");

        let store = FileStore::open(&path);
        store.set("theme", "dark").unwrap();
        store.set("passwordHistory", "[]").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(reopened.get("passwordHistory").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_file_store_empty_file_is_empty() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let store = FileStore::open(temp_file.path());
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_file_store_malformed_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "not json").expect("Failed to write");

        let store = FileStore::open(temp_file.path());
        let result = store.get("theme");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
