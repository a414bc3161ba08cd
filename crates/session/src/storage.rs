use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use shared_types::AppError;

/// Durable key for the opaque bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Durable key for the JSON-serialized identity record.
pub const USER_DATA_KEY: &str = "user_data";

/// Synchronous local key-value store backing the session.
///
/// Two string entries live here: the token under [`AUTH_TOKEN_KEY`] and the
/// identity record under [`USER_DATA_KEY`]. Reads and writes are local and
/// synchronous; there is no cross-process coordination.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}

/// File-backed storage: a single JSON object under the data directory,
/// rewritten in full on every mutation. Survives process restarts the way
/// browser local storage survives reloads.
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Opens (or creates) `session.json` under `dir`. An unreadable file is
    /// discarded and replaced on the next write.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .map_err(|e| AppError::storage(format!("create {}: {e}", dir.display())))?;
        let path = dir.join("session.json");
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), %e, "Discarding unreadable session file");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), AppError> {
        let raw = serde_json::to_string(entries)
            .map_err(|e| AppError::storage(format!("encode session file: {e}")))?;
        fs::write(&self.path, raw)
            .map_err(|e| AppError::storage(format!("write {}: {e}", self.path.display())))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().unwrap();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
