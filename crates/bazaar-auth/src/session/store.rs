//! Session persistence.
//!
//! A store is a single-slot raw record holder, like a browser's local
//! storage entry. Parsing lives in the provided trait methods so every
//! backend shares the same "corrupt means signed out" policy.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bazaar_core::AppResult;
use bazaar_core::error::{AppError, ErrorKind};

use super::model::{Session, SessionRecord};

/// Persisted storage for the login record.
pub trait SessionStore: Send + Sync + fmt::Debug {
    /// Returns the raw record, or `None` when nothing is stored.
    fn read_raw(&self) -> AppResult<Option<String>>;

    /// Replaces the raw record.
    fn write_raw(&self, raw: &str) -> AppResult<()>;

    /// Removes the record. Removing an absent record succeeds.
    fn remove(&self) -> AppResult<()>;

    /// Reads the current session.
    ///
    /// Never fails: a missing, unreadable, or unparseable record yields
    /// [`Session::anonymous`] and is logged.
    fn load(&self) -> Session {
        let raw = match self.read_raw() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(store = ?self, "No persisted session record");
                return Session::anonymous();
            }
            Err(e) => {
                tracing::warn!(store = ?self, "Failed to read session record: {e}");
                return Session::anonymous();
            }
        };

        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => Session::from(record),
            Err(e) => {
                tracing::warn!(store = ?self, "Discarding unparseable session record: {e}");
                Session::anonymous()
            }
        }
    }

    /// Persists a login record.
    fn save(&self, record: &SessionRecord) -> AppResult<()> {
        let raw = serde_json::to_string(record)?;
        self.write_raw(&raw)
    }

    /// Erases the persisted record. Idempotent.
    fn clear(&self) -> AppResult<()> {
        self.remove()
    }
}

/// Stores the record as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    /// Record file location.
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The record file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn read_raw(&self) -> AppResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read '{}'", self.path.display()),
                e,
            )),
        }
    }

    fn write_raw(&self, raw: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn remove(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps the record in memory; used for tests and fabricated sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with a raw record, which need not be valid JSON.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn read_raw(&self) -> AppResult<Option<String>> {
        Ok(self.slot().clone())
    }

    fn write_raw(&self, raw: &str) -> AppResult<()> {
        *self.slot() = Some(raw.to_string());
        Ok(())
    }

    fn remove(&self) -> AppResult<()> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::Permission;

    fn staff_record() -> SessionRecord {
        SessionRecord {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            role: "staff".to_string(),
            role_name: "Staff".to_string(),
            permissions: vec!["orders.view".to_string()],
            is_super_admin: false,
            logged_in_at: None,
        }
    }

    #[test]
    fn test_empty_store_loads_anonymous() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load(), Session::anonymous());
    }

    #[test]
    fn test_unparseable_record_loads_anonymous() {
        let store = MemorySessionStore::with_raw("{\"role\": ");
        let session = store.load();
        assert!(!session.is_authenticated);
        assert!(session.role.is_empty());
        assert!(session.permissions.is_empty());
        assert!(!session.is_super_admin);
    }

    #[test]
    fn test_save_then_load_is_stable() {
        let store = MemorySessionStore::new();
        store.save(&staff_record()).unwrap();

        let first = store.load();
        let second = store.load();
        assert_eq!(first, second);
        assert!(first.is_authenticated);
        assert!(first.permissions.contains(Permission::OrdersView));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemorySessionStore::new();
        store.save(&staff_record()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.load().is_authenticated);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

        assert!(!store.load().is_authenticated);
        store.save(&staff_record()).unwrap();
        assert!(store.path().exists());

        let session = store.load();
        assert_eq!(session.name, "Sam");
        assert_eq!(session.role, "staff");

        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_corrupt_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileSessionStore::new(&path);
        assert_eq!(store.load(), Session::anonymous());
    }
}
