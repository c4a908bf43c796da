//! Key-value storage media
//!
//! A medium stores raw text under string keys. It knows nothing about JSON
//! or entity types; the gateway layers serialization on top.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetWiseError;

use super::file_io::{read_text, remove_if_exists, write_text_atomic};

/// Raw text storage keyed by name
pub trait StorageMedium: Send + Sync {
    /// Read the text stored under `key`, or `None` if absent
    fn read(&self, key: &str) -> Result<Option<String>, BudgetWiseError>;

    /// Store `contents` under `key`, replacing any previous value
    fn write(&self, key: &str, contents: &str) -> Result<(), BudgetWiseError>;

    /// Delete `key`; deleting an absent key is not an error
    fn delete(&self, key: &str) -> Result<(), BudgetWiseError>;

    /// Remove every entry owned by this medium
    fn clear(&self) -> Result<(), BudgetWiseError>;

    /// List stored keys
    fn keys(&self) -> Result<Vec<String>, BudgetWiseError>;
}

/// Stores each key as `<key>.json` inside a directory
#[derive(Debug, Clone)]
pub struct FileMedium {
    dir: PathBuf,
}

impl FileMedium {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, BudgetWiseError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(BudgetWiseError::Storage(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn stored_files(&self) -> Result<Vec<PathBuf>, BudgetWiseError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(BudgetWiseError::Storage(format!(
                    "Failed to list {}: {}",
                    self.dir.display(),
                    e
                )))
            }
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| BudgetWiseError::Storage(format!("Failed to read entry: {}", e)))?
                .path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl StorageMedium for FileMedium {
    fn read(&self, key: &str) -> Result<Option<String>, BudgetWiseError> {
        read_text(self.path_for(key)?)
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), BudgetWiseError> {
        write_text_atomic(self.path_for(key)?, contents)
    }

    fn delete(&self, key: &str) -> Result<(), BudgetWiseError> {
        remove_if_exists(self.path_for(key)?)
    }

    fn clear(&self) -> Result<(), BudgetWiseError> {
        for path in self.stored_files()? {
            remove_if_exists(&path)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, BudgetWiseError> {
        Ok(self
            .stored_files()?
            .iter()
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
            .collect())
    }
}

/// In-process medium; contents vanish with the process
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> BudgetWiseError {
    BudgetWiseError::Storage(format!("Failed to acquire lock: {}", e))
}

impl StorageMedium for MemoryMedium {
    fn read(&self, key: &str) -> Result<Option<String>, BudgetWiseError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), BudgetWiseError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), contents.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), BudgetWiseError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), BudgetWiseError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.clear();
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, BudgetWiseError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_medium_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let medium = FileMedium::new(temp_dir.path().join("data"));

        assert_eq!(medium.read("app_expenses").unwrap(), None);

        medium.write("app_expenses", "[]").unwrap();
        assert_eq!(medium.read("app_expenses").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("data/app_expenses.json").exists());

        medium.delete("app_expenses").unwrap();
        assert_eq!(medium.read("app_expenses").unwrap(), None);
    }

    #[test]
    fn test_file_medium_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let medium = FileMedium::new(temp_dir.path().to_path_buf());

        assert!(medium.write("../escape", "[]").is_err());
        assert!(medium.write("", "[]").is_err());
        assert!(medium.read("a/b").is_err());
    }

    #[test]
    fn test_file_medium_clear_only_touches_json() {
        let temp_dir = TempDir::new().unwrap();
        let medium = FileMedium::new(temp_dir.path().to_path_buf());

        medium.write("app_goals", "[]").unwrap();
        medium.write("app_investments", "[]").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "keep me").unwrap();

        assert_eq!(medium.keys().unwrap(), vec!["app_goals", "app_investments"]);

        medium.clear().unwrap();
        assert!(medium.keys().unwrap().is_empty());
        assert!(temp_dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_file_medium_missing_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let medium = FileMedium::new(temp_dir.path().join("never-created"));

        assert!(medium.keys().unwrap().is_empty());
        medium.clear().unwrap();
    }

    #[test]
    fn test_memory_medium() {
        let medium = MemoryMedium::new();
        medium.write("b", "2").unwrap();
        medium.write("a", "1").unwrap();

        assert_eq!(medium.keys().unwrap(), vec!["a", "b"]);
        assert_eq!(medium.read("a").unwrap().as_deref(), Some("1"));

        medium.delete("a").unwrap();
        medium.delete("a").unwrap();
        assert_eq!(medium.read("a").unwrap(), None);

        medium.clear().unwrap();
        assert!(medium.keys().unwrap().is_empty());
    }
}
