//! Permission predicates over a session snapshot.
//!
//! Every check short-circuits to `true` for a super admin (flag or role) and
//! for the wildcard grant. `is_super_admin` itself ignores the wildcard.

use crate::permission::Permission;
use crate::session::Session;

/// Role identifier that confers super-admin status on its own.
pub const SUPER_ADMIN_ROLE: &str = "super_admin";

/// Pure permission checks over a borrowed [`Session`].
#[derive(Debug, Clone, Copy)]
pub struct PermissionEvaluator<'a> {
    session: &'a Session,
}

impl<'a> PermissionEvaluator<'a> {
    /// Creates an evaluator for `session`.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// The session being evaluated.
    pub fn session(&self) -> &'a Session {
        self.session
    }

    /// True for the explicit flag or the `super_admin` role.
    pub fn is_super_admin(&self) -> bool {
        self.session.is_super_admin || self.session.role == SUPER_ADMIN_ROLE
    }

    fn bypasses(&self) -> bool {
        self.is_super_admin() || self.session.permissions.is_wildcard()
    }

    /// Whether the session holds `permission`.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.bypasses() || self.session.permissions.contains(permission)
    }

    /// Like [`has_permission`](Self::has_permission) for a raw key.
    ///
    /// Keys outside the vocabulary are only granted through the bypasses.
    pub fn has_permission_key(&self, key: &str) -> bool {
        self.bypasses() || self.holds_key(key)
    }

    /// Like [`has_any_permission`](Self::has_any_permission) for raw keys.
    pub fn has_any_permission_key<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        self.bypasses() || keys.iter().any(|k| self.holds_key(k.as_ref()))
    }

    /// Like [`has_all_permissions`](Self::has_all_permissions) for raw keys.
    pub fn has_all_permission_keys<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        self.bypasses() || keys.iter().all(|k| self.holds_key(k.as_ref()))
    }

    fn holds_key(&self, key: &str) -> bool {
        key.parse::<Permission>()
            .map(|permission| self.session.permissions.contains(permission))
            .unwrap_or(false)
    }

    /// Whether the session holds at least one of `permissions`.
    ///
    /// An empty list is `false` unless the session bypasses checks.
    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        self.bypasses()
            || permissions
                .iter()
                .any(|p| self.session.permissions.contains(*p))
    }

    /// Whether the session holds every one of `permissions`.
    ///
    /// An empty list is `true`.
    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        self.bypasses()
            || permissions
                .iter()
                .all(|p| self.session.permissions.contains(*p))
    }
}
