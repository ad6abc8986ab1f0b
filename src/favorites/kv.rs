use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::FavoritesError;

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, FavoritesError>;

    fn set(&mut self, key: &str, value: String) -> Result<(), FavoritesError>;
}

/// In-memory store, for tests and ephemeral sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FavoritesError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), FavoritesError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a single JSON object file (`{"key": "value", ...}`).
///
/// The whole file is rewritten on every `set`, through a temp file in the same
/// directory that is then renamed over the original.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; an unreadable
    /// or corrupt one is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring corrupt store {}: {e}", path.display());
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No store at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                warn!("Failed to read store {}: {e}", path.display());
                BTreeMap::new()
            }
        };

        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<(), FavoritesError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let mut file = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut file, &self.entries)?;
        file.write_all(b"\n")?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, FavoritesError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), FavoritesError> {
        self.entries.insert(key.to_string(), value);
        self.write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v".to_string()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = JsonFileStore::open(&path);
        store.set("k", "v".to_string()).unwrap();
        assert!(path.exists());

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("k").unwrap(), None);
    }
}
