use super::StorageBackend;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory key-value storage for testing and development.
/// Does NOT persist data across processes.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A backend whose writes always fail. Used to exercise the swallow-and-log
/// save path.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default)]
pub struct FailingBackend;

#[cfg(any(test, feature = "test_utils"))]
impl StorageBackend for FailingBackend {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(crate::error::MemozError::Storage(
            "storage unavailable".to_string(),
        ))
    }
}
