//! Shared test helpers for integration tests.

use std::sync::Arc;

use bazaar_auth::session::{FileSessionStore, SessionProvider, SessionRecord, SessionStore};
use tempfile::TempDir;

/// A provider backed by a session file in a temporary directory.
pub struct TestApp {
    /// Keeps the directory alive for the test's duration
    _dir: TempDir,
    /// Store over the session file
    pub store: Arc<FileSessionStore>,
    /// Provider over `store`
    pub provider: SessionProvider,
}

impl TestApp {
    /// Create an app with no persisted session
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = Arc::new(FileSessionStore::new(dir.path().join("session.json")));
        let provider = SessionProvider::new(store.clone());
        Self {
            _dir: dir,
            store,
            provider,
        }
    }

    /// Create an app whose session file holds `record`
    pub fn with_record(record: &SessionRecord) -> Self {
        let app = Self::new();
        app.store.save(record).expect("Failed to write session record");
        app
    }

    /// Create an app whose session file holds arbitrary bytes
    pub fn with_raw(raw: &str) -> Self {
        let app = Self::new();
        std::fs::write(app.store.path(), raw).expect("Failed to write raw record");
        app
    }
}

/// A login record for `role` with the given grants
pub fn record(role: &str, permissions: &[&str], is_super_admin: bool) -> SessionRecord {
    SessionRecord {
        name: "Test Admin".to_string(),
        email: "admin@example.com".to_string(),
        role: role.to_string(),
        role_name: String::new(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
        is_super_admin,
        logged_in_at: None,
    }
}
