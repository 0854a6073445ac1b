use super::StorageBackend;
use crate::error::{MemozError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed key-value storage. Each key becomes one JSON file under the
/// root directory, written whole on every set.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(MemozError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(MemozError::Io)?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.key_path(key), value).map_err(MemozError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_on_missing_key_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert!(backend.get("memos-data").unwrap().is_none());
    }

    #[test]
    fn set_then_get_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());
        backend.set("memos-data", "[1,2,3]").unwrap();
        assert_eq!(backend.get("memos-data").unwrap().unwrap(), "[1,2,3]");
    }

    #[test]
    fn set_creates_missing_root_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("store");
        let mut backend = FileBackend::new(&nested);
        backend.set("k", "v").unwrap();
        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn set_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());
        backend.set("k", "old").unwrap();
        backend.set("k", "new").unwrap();
        assert_eq!(backend.get("k").unwrap().unwrap(), "new");
    }
}
