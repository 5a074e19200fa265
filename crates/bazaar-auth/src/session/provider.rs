//! Injectable session context.
//!
//! The provider owns the one piece of shared mutable state in the dashboard:
//! the current session snapshot. Consumers receive it explicitly rather than
//! reaching for a global, so tests can hand in fabricated sessions.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use bazaar_core::AppResult;

use super::model::{Session, SessionRecord};
use super::store::{MemorySessionStore, SessionStore};

/// Resolution state of the session snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The store has not been read yet.
    Loading,
    /// The snapshot is available.
    Resolved(Arc<Session>),
}

impl SessionState {
    /// The snapshot, once resolved.
    pub fn session(&self) -> Option<&Arc<Session>> {
        match self {
            Self::Loading => None,
            Self::Resolved(session) => Some(session),
        }
    }

    /// Whether the store is still being read.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Hands out session snapshots and applies login/logout.
///
/// State only ever moves from [`SessionState::Loading`] to
/// [`SessionState::Resolved`]; login, logout, and reload replace the
/// resolved snapshot and bump [`generation`](Self::generation). The state
/// and its generation share one lock so readers never see them disagree.
#[derive(Debug)]
pub struct SessionProvider {
    store: Arc<dyn SessionStore>,
    inner: RwLock<Snapshot>,
}

#[derive(Debug)]
struct Snapshot {
    state: SessionState,
    generation: u64,
}

impl SessionProvider {
    /// Creates a provider in the loading state.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            inner: RwLock::new(Snapshot {
                state: SessionState::Loading,
                generation: 0,
            }),
        }
    }

    /// Creates an already-resolved provider over an in-memory store.
    pub fn with_session(session: Session) -> Self {
        Self {
            store: Arc::new(MemorySessionStore::new()),
            inner: RwLock::new(Snapshot {
                state: SessionState::Resolved(Arc::new(session)),
                generation: 1,
            }),
        }
    }

    /// Current state without triggering a read.
    pub fn state(&self) -> SessionState {
        self.read().state.clone()
    }

    /// Current state and its generation, read together.
    pub fn snapshot(&self) -> (SessionState, u64) {
        let inner = self.read();
        (inner.state.clone(), inner.generation)
    }

    /// The snapshot, reading the store on first use.
    pub fn resolve(&self) -> Arc<Session> {
        if let SessionState::Resolved(session) = &self.read().state {
            return Arc::clone(session);
        }

        let mut inner = self.write();
        if let SessionState::Resolved(session) = &inner.state {
            return Arc::clone(session);
        }
        let session = Arc::new(self.store.load());
        tracing::debug!(
            authenticated = session.is_authenticated,
            role = %session.role,
            "Session resolved"
        );
        inner.replace(Arc::clone(&session));
        session
    }

    /// Re-reads the store, e.g. after another window changed the record.
    ///
    /// The generation only moves when the snapshot actually changed.
    pub fn reload(&self) -> Arc<Session> {
        let fresh = self.store.load();
        let mut inner = self.write();
        if let SessionState::Resolved(current) = &inner.state {
            if **current == fresh {
                return Arc::clone(current);
            }
        }
        let session = Arc::new(fresh);
        inner.replace(Arc::clone(&session));
        session
    }

    /// Persists a login record and replaces the snapshot with it.
    pub fn login(&self, mut record: SessionRecord) -> AppResult<Arc<Session>> {
        if record.logged_in_at.is_none() {
            record.logged_in_at = Some(Utc::now());
        }
        self.store.save(&record)?;

        let session = Arc::new(Session::from(record));
        tracing::info!(
            email = %session.email,
            role = %session.role,
            super_admin = session.is_super_admin,
            "Admin logged in"
        );
        self.write().replace(Arc::clone(&session));
        Ok(session)
    }

    /// Erases the persisted record and resolves to the anonymous session.
    pub fn logout(&self) -> AppResult<()> {
        self.store.clear()?;
        self.write().replace(Arc::new(Session::anonymous()));
        tracing::info!("Admin logged out");
        Ok(())
    }

    /// Counter that changes whenever the resolved snapshot changes.
    pub fn generation(&self) -> u64 {
        self.read().generation
    }

    fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Snapshot {
    fn replace(&mut self, session: Arc<Session>) {
        self.state = SessionState::Resolved(session);
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::PermissionSet;

    fn record(role: &str, permissions: &[&str]) -> SessionRecord {
        SessionRecord {
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            role: role.to_string(),
            role_name: String::new(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            is_super_admin: false,
            logged_in_at: None,
        }
    }

    #[test]
    fn test_starts_loading_until_resolved() {
        let provider = SessionProvider::new(Arc::new(MemorySessionStore::new()));
        assert!(provider.state().is_loading());
        assert_eq!(provider.generation(), 0);

        let session = provider.resolve();
        assert!(!session.is_authenticated);
        assert!(!provider.state().is_loading());
        assert_eq!(provider.generation(), 1);
    }

    #[test]
    fn test_resolve_is_cached() {
        let store = Arc::new(MemorySessionStore::new());
        let provider = SessionProvider::new(store.clone());
        let first = provider.resolve();

        store.save(&record("staff", &["orders.view"])).unwrap();
        let second = provider.resolve();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(provider.generation(), 1);
    }

    #[test]
    fn test_login_and_logout_never_return_to_loading() {
        let store = Arc::new(MemorySessionStore::new());
        let provider = SessionProvider::new(store.clone());
        provider.resolve();

        let session = provider.login(record("staff", &["orders.view"])).unwrap();
        assert!(session.is_authenticated);
        assert!(session.logged_in_at.is_some());
        assert!(!provider.state().is_loading());
        assert!(store.load().is_authenticated);

        provider.logout().unwrap();
        assert!(!provider.state().is_loading());
        assert!(!provider.resolve().is_authenticated);
        assert!(!store.load().is_authenticated);
        assert_eq!(provider.generation(), 3);
    }

    #[test]
    fn test_reload_bumps_generation_only_on_change() {
        let store = Arc::new(MemorySessionStore::new());
        let provider = SessionProvider::new(store.clone());
        provider.resolve();

        provider.reload();
        assert_eq!(provider.generation(), 1);

        store.save(&record("manager", &["*"])).unwrap();
        let session = provider.reload();
        assert_eq!(session.role, "manager");
        assert_eq!(provider.generation(), 2);
    }

    #[test]
    fn test_snapshot_pairs_state_with_generation() {
        let provider = SessionProvider::new(Arc::new(MemorySessionStore::new()));
        assert_eq!(provider.snapshot(), (SessionState::Loading, 0));

        provider.resolve();
        let session = provider.login(record("staff", &["orders.view"])).unwrap();
        let (state, generation) = provider.snapshot();
        assert!(Arc::ptr_eq(state.session().unwrap(), &session));
        assert_eq!(generation, 2);
    }

    #[test]
    fn test_concurrent_logins_keep_state_and_generation_in_step() {
        let provider = Arc::new(SessionProvider::new(Arc::new(MemorySessionStore::new())));
        provider.resolve();

        let writer = {
            let provider = Arc::clone(&provider);
            std::thread::spawn(move || {
                for i in 0..200 {
                    let role = if i % 2 == 0 { "staff" } else { "manager" };
                    provider.login(record(role, &[])).unwrap();
                }
            })
        };

        let mut last = 0;
        while !writer.is_finished() {
            let (state, generation) = provider.snapshot();
            assert!(generation >= last);
            last = generation;
            let role = &state.session().unwrap().role;
            let expected = match generation {
                1 => "",
                g if g % 2 == 0 => "staff",
                _ => "manager",
            };
            assert_eq!(role, expected, "generation {generation}");
        }
        writer.join().unwrap();
        assert_eq!(provider.generation(), 201);
    }

    #[test]
    fn test_with_session_is_resolved() {
        let provider = SessionProvider::with_session(Session::authenticated(
            "staff",
            PermissionSet::wildcard(),
        ));
        let state = provider.state();
        assert!(state.session().unwrap().permissions.is_wildcard());
    }
}
