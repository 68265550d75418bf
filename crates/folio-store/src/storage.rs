//! String-keyed persistence port and its backends.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::errors::StorageError;

/// Storage used by the session and content stores.
///
/// Reads are best-effort: anything unreadable reports as absent and the
/// caller falls back to defaults. Writes get exactly one attempt and are
/// never retried.
pub trait KeyValueStorage: Send + Sync {
    /// The raw value stored under `key`, if present and readable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Drop the entry under `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// File-per-key storage under the per-user data directory.
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Open storage at the platform's per-user data location.
    pub fn new() -> Result<Self, StorageError> {
        Self::with_dir(default_data_dir())
    }

    /// Open storage rooted at an explicit directory.
    pub fn with_dir(base_dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&base_dir)
            .map_err(|e| StorageError::Unavailable(format!("cannot create data directory: {e}")))?;
        Ok(Self { base_dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(key)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key);

        // Write-then-rename keeps a torn write from corrupting the entry.
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, value)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {e}", path.display())))?;
        fs::rename(&tmp_path, &path)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {e}", path.display())))?;

        set_restrictive_permissions(&path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| StorageError::WriteFailed(format!("{}: {e}", path.display())))?;
        }
        Ok(())
    }
}

/// In-memory storage for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with raw entries.
    pub fn with_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: Mutex::new(entries.into_iter().collect()),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::WriteFailed("storage mutex poisoned".to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::WriteFailed("storage mutex poisoned".to_string()))?
            .remove(key);
        Ok(())
    }
}

fn default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("dev", "folio", "folio") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        dirs_fallback()
    }
}

fn dirs_fallback() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".folio")
}

#[cfg(unix)]
fn set_restrictive_permissions(path: &std::path::Path) -> Result<(), StorageError> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms)
        .map_err(|e| StorageError::WriteFailed(format!("cannot set permissions: {e}")))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_restrictive_permissions(_path: &std::path::Path) -> Result<(), StorageError> {
    Ok(())
}
