//! Key-value storage backends

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the JSON-serialized quote list
pub const QUOTES_KEY: &str = "quotes";

/// Key holding the last selected category filter
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";

/// Session key holding the last displayed quote
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

/// Minimal string key-value store
pub trait KeyValueStore {
    /// Read a value, returning None if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Durable store keeping one file per key under a directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        FileKeyValueStore { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        // Atomic replace
        let tmp = self.dir.join(format!(".{}.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }
}

/// Process-lifetime store, used for session slots and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_roundtrip() {
        let temp = TempDir::new().unwrap();
        let mut store = FileKeyValueStore::new(temp.path().join("store"));

        assert_eq!(store.get(QUOTES_KEY).unwrap(), None);

        store.set(QUOTES_KEY, "[]").unwrap();
        assert_eq!(store.get(QUOTES_KEY).unwrap().as_deref(), Some("[]"));
        assert!(temp.path().join("store").join(QUOTES_KEY).exists());

        store.set(QUOTES_KEY, "[1]").unwrap();
        assert_eq!(store.get(QUOTES_KEY).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("store");

        let mut store = FileKeyValueStore::new(dir.clone());
        store.set(SELECTED_CATEGORY_KEY, "Life").unwrap();
        drop(store);

        let reopened = FileKeyValueStore::new(dir);
        assert_eq!(
            reopened.get(SELECTED_CATEGORY_KEY).unwrap().as_deref(),
            Some("Life")
        );
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let mut store = FileKeyValueStore::new(temp.path().to_path_buf());
        store.set(QUOTES_KEY, "[]").unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![QUOTES_KEY.to_string()]);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryKeyValueStore::new();
        store.set(LAST_VIEWED_KEY, "x").unwrap();
        assert_eq!(store.get(LAST_VIEWED_KEY).unwrap().as_deref(), Some("x"));
        store.set(LAST_VIEWED_KEY, "y").unwrap();
        assert_eq!(store.get(LAST_VIEWED_KEY).unwrap().as_deref(), Some("y"));
        assert_eq!(store.get(QUOTES_KEY).unwrap(), None);
    }
}
