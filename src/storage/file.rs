use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{ErrorContext, LeadHubResult};
use crate::logging::log_warn;

use super::KeyValueStore;

/// Keeps every key in a single JSON object file.
///
/// A missing file is an empty store. A file that is not a JSON object of
/// strings reads as empty and is replaced on the next write. Writes go to a
/// sibling temp file that is renamed over the store, so a reader sees either
/// the old contents or the new ones.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_entries(&self) -> LeadHubResult<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                log_warn(&format!(
                    "Ignoring unreadable store file {}: {}",
                    self.path.display(),
                    e
                ));
                Ok(BTreeMap::new())
            }
        }
    }

    fn save_entries(&self, entries: &BTreeMap<String, String>) -> LeadHubResult<()> {
        if entries.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            };
        }

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

        let content = serde_json::to_string_pretty(entries)?;
        let mut staged = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to stage a write in {}", dir.display()))?;
        staged.write_all(content.as_bytes())?;
        staged
            .persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LeadHubResult<Option<String>> {
        Ok(self.load_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> LeadHubResult<()> {
        let mut entries = self.load_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> LeadHubResult<()> {
        let mut entries = self.load_entries()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("nested").join("session.json"))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn values_survive_a_new_handle() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.set("k", "v").unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn removing_last_key_deletes_the_file() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.set("k", "v").unwrap();
        assert!(store.path().exists());

        store.remove("k").unwrap();
        assert!(!store.path().exists());
        store.remove("k").unwrap();
    }

    #[test]
    fn removing_one_key_keeps_the_others() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn writes_leave_no_staging_files_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut store = FileStore::new(&path);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("session.json")]);
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
