//! Session storage backends.
//!
//! A session is a single string value under a fixed key, so any small
//! key-value store will do. The in-memory backend is for tests; the file
//! backend keeps the session across process restarts.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::{AuthError, AuthResult};

/// Key under which the logged-in user is persisted.
pub const SESSION_KEY: &str = "taskHub_user";

/// Trait for session key-value storage
pub trait SessionStorage: Send + Sync {
    /// Gets a value
    fn get(&self, key: &str) -> AuthResult<Option<String>>;

    /// Sets a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> AuthResult<()>;

    /// Deletes a value. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> AuthResult<()>;

    /// Checks if a value exists
    fn exists(&self, key: &str) -> AuthResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory session storage (for testing)
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySessionStorage {
    /// Creates an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage with pre-populated values
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: RwLock::new(values),
        }
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> AuthResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| AuthError::Storage(format!("Lock poisoned: {}", e)))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AuthResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| AuthError::Storage(format!("Lock poisoned: {}", e)))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> AuthResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| AuthError::Storage(format!("Lock poisoned: {}", e)))?;
        values.remove(key);
        Ok(())
    }
}

/// Session storage backed by one JSON object file.
///
/// Every operation reads the file afresh, so two handles on the same path
/// see each other's writes.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Creates a storage at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default session file location under the platform data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("taskhub").join("session.json"))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> AuthResult<HashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(HashMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, values: &HashMap<String, String>) -> AuthResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> AuthResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> AuthResult<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn delete(&self, key: &str) -> AuthResult<()> {
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}
