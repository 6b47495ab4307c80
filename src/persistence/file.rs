//! JSON file store for the native build
//!
//! The whole map is rewritten on every `set_item` through a temp file and a
//! rename, so a crash mid-write leaves the previous save intact.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::KeyValueStore;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store backed by `path`; unreadable files start empty
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring corrupt save file {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(_) => {
                log::info!("No save file at {}, starting fresh", path.display());
                BTreeMap::new()
            }
        };
        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.items)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            log::warn!("Failed to write {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::Persistence;

    fn scratch_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "stump_runner_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = scratch_path("reopen");
        {
            let mut store = FileStore::open(&path);
            store.save_high_score(17);
            store.set_item("other", "value");
        }
        let store = FileStore::open(&path);
        assert_eq!(store.load_high_score(), 17);
        assert_eq!(store.get_item("other").as_deref(), Some("value"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let path = scratch_path("corrupt");
        fs::write(&path, "{not json").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.load_high_score(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_path_degrades_silently() {
        let path = std::env::temp_dir()
            .join("stump_runner_missing_dir")
            .join("nested")
            .join("save.json");
        let mut store = FileStore::open(&path);
        store.save_high_score(4);
        // Write failed, but the in-memory value is still served
        assert_eq!(store.load_high_score(), 4);
    }
}
