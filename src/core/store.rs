//! # State Store
//!
//! Key-value persistence for opaque byte blobs. The navigator keeps exactly
//! one record in it (see [`crate::core::restoration::STATE_KEY`]).
//!
//! - [`FileStateStore`]: one file per key under a directory, by default
//!   `~/.landmarks/state/`. Writes use atomic rename (write `.tmp`, then
//!   `rename()`) so a crash never leaves a half-written record behind.
//! - [`MemoryStateStore`]: process-local map. Clones share the same storage,
//!   which lets a test hand one clone to a navigator and inspect another.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::debug;

/// A single-threaded key-value store.
///
/// `read` of a missing key is `Ok(None)`, and `remove` of a missing key is `Ok(())`.
pub trait StateStore {
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>>;
    fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()>;
    fn remove(&self, key: &str) -> io::Result<()>;
}

/// Returns `~/.landmarks/state/`.
pub fn default_state_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".landmarks").join("state"))
}

#[derive(Debug, Clone)]
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStateStore {
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, bytes)?;
        fs::rename(&tmp_path, &path)?;
        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    slots: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.borrow().contains_key(key)
    }
}

impl StateStore for MemoryStateStore {
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        self.slots.borrow_mut().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_slots() {
        let store = MemoryStateStore::new();
        let other = store.clone();
        store.write("k", b"v").unwrap();
        assert_eq!(other.read("k").unwrap(), Some(b"v".to_vec()));
        other.remove("k").unwrap();
        assert!(!store.contains("k"));
    }

    #[test]
    fn test_memory_store_remove_missing_is_ok() {
        let store = MemoryStateStore::new();
        assert!(store.remove("missing").is_ok());
        assert_eq!(store.read("missing").unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path().join("nested"));
        assert_eq!(store.read("NavigatorState").unwrap(), None);

        store.write("NavigatorState", b"first").unwrap();
        store.write("NavigatorState", b"second").unwrap();
        assert_eq!(store.read("NavigatorState").unwrap(), Some(b"second".to_vec()));
        assert!(!store.dir().join("NavigatorState.tmp").exists());

        store.remove("NavigatorState").unwrap();
        store.remove("NavigatorState").unwrap();
        assert_eq!(store.read("NavigatorState").unwrap(), None);
    }
}
