use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::warn;

const APP_DIR: &str = "app-ideas";
const STORAGE_FILE: &str = "storage.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] io::Error),
    #[error("storage file is not valid json: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("could not find a config directory")]
    NoConfigDir,
}

pub fn default_storage_path() -> Result<PathBuf, StoreError> {
    let base = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
    Ok(base.join(APP_DIR).join(STORAGE_FILE))
}

/// String key-value pairs kept in one JSON object on disk.
///
/// Clones share a write lock, so read-modify-write cycles never interleave.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl LocalStorage {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, name: &str) -> Option<String> {
        match self.read_all() {
            Ok(map) => map.get(name).cloned(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "storage unreadable, treating as empty");
                None
            }
        }
    }

    pub fn set_item(&self, name: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut map = match self.read_all() {
            Ok(map) => map,
            Err(StoreError::Serde(err)) => {
                warn!(path = %self.path.display(), error = %err, "replacing corrupt storage file");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        map.insert(name.to_string(), value.to_string());
        self.persist(&map)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    fn persist(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(map)?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(serialized.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("nested/storage.json"));
        assert_eq!(storage.get_item("geminiApiKey"), None);
    }

    #[test]
    fn set_item_creates_parents_and_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/storage.json");
        let storage = LocalStorage::new(path.clone());

        storage.set_item("theme", "dark").unwrap();
        storage.set_item("geminiApiKey", "abc").unwrap();
        storage.set_item("geminiApiKey", "def").unwrap();

        let reopened = LocalStorage::new(path);
        assert_eq!(reopened.get_item("theme").as_deref(), Some("dark"));
        assert_eq!(reopened.get_item("geminiApiKey").as_deref(), Some("def"));
    }

    #[test]
    fn concurrent_writers_keep_every_key() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("storage.json"));

        let handles: Vec<_> = (0..8)
            .map(|idx| {
                let storage = storage.clone();
                std::thread::spawn(move || {
                    for round in 0..5 {
                        storage
                            .set_item(&format!("key{}", idx), &format!("value{}", round))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        for idx in 0..8 {
            assert_eq!(
                storage.get_item(&format!("key{}", idx)).as_deref(),
                Some("value4")
            );
        }
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name() != "storage.json")
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn corrupt_file_is_replaced_on_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();
        let storage = LocalStorage::new(path);

        assert_eq!(storage.get_item("geminiApiKey"), None);
        storage.set_item("geminiApiKey", "abc").unwrap();
        assert_eq!(storage.get_item("geminiApiKey").as_deref(), Some("abc"));
    }
}
