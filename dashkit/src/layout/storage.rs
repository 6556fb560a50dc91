//! Key-value storage for layout preferences

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use dashmap::DashMap;
use directories::ProjectDirs;

use crate::error::StorageError;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "dashkit";
const APPLICATION: &str = "dashkit";

/// Storage for small string preferences such as the theme.
pub trait ThemeStorage: Send + Sync {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage.
#[derive(Debug, Default)]
pub struct MemoryThemeStorage {
    values: DashMap<String, String>,
}

impl MemoryThemeStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStorage for MemoryThemeStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a JSON file, cached in memory.
///
/// The file is read once on open and rewritten on every `set`.
#[derive(Debug)]
pub struct FileThemeStorage {
    path: PathBuf,
    cache: DashMap<String, String>,
}

impl FileThemeStorage {
    /// Opens (or prepares to create) the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let cache = DashMap::new();

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            if !contents.trim().is_empty() {
                let values: HashMap<String, String> = serde_json::from_str(&contents)?;
                for (key, value) in values {
                    cache.insert(key, value);
                }
            }
        }

        log::debug!("Opened preference storage at {}", path.display());
        Ok(Self { path, cache })
    }

    /// Opens `preferences.json` in the platform configuration directory.
    ///
    /// - Linux: `$XDG_CONFIG_HOME/dashkit` or `~/.config/dashkit`
    /// - macOS: `~/Library/Application Support/dev.dashkit.dashkit`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\dashkit\dashkit\config`
    pub fn in_config_dir() -> Result<Self, StorageError> {
        let dirs =
            ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or(StorageError::NoConfigDir)?;
        Self::open(dirs.config_dir().join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let snapshot: HashMap<String, String> = self
            .cache
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&snapshot)?)?;
        Ok(())
    }
}

impl ThemeStorage for FileThemeStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.cache.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.cache.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("dashkit-storage-{}-{}", std::process::id(), name))
            .join("preferences.json")
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryThemeStorage::new();
        assert_eq!(storage.get("theme").unwrap(), None);
        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_storage_persists() {
        let path = temp_path("persist");
        let _ = fs::remove_file(&path);

        let storage = FileThemeStorage::open(&path).unwrap();
        storage.set("theme", "light").unwrap();

        let reopened = FileThemeStorage::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("light"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_file_storage_corrupt() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[1, 2]").unwrap();

        assert!(matches!(
            FileThemeStorage::open(&path),
            Err(StorageError::Corrupt(_))
        ));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
