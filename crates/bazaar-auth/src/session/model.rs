//! Session snapshot and its persisted record format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::permission::PermissionSet;
use crate::rbac::PermissionEvaluator;

/// The record the login flow persists, in its wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Admin display name.
    #[serde(default)]
    pub name: String,
    /// Admin email address.
    #[serde(default)]
    pub email: String,
    /// Role identifier, e.g. `"super_admin"`, `"staff"`, or a custom role.
    pub role: String,
    /// Human label for the role.
    #[serde(default)]
    pub role_name: String,
    /// Granted permission keys; may contain `"*"`.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Explicit super-admin flag, independent of `role`.
    #[serde(default)]
    pub is_super_admin: bool,
    /// When the record was written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_in_at: Option<DateTime<Utc>>,
}

/// A read-only view of the current admin's authorization attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Whether a persisted record was found and parsed.
    pub is_authenticated: bool,
    /// Admin display name.
    pub name: String,
    /// Admin email address.
    pub email: String,
    /// Role identifier.
    pub role: String,
    /// Human label for the role.
    pub role_display_name: String,
    /// Explicit super-admin flag.
    pub is_super_admin: bool,
    /// Granted permissions.
    pub permissions: PermissionSet,
    /// When the backing record was written, if known.
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl Session {
    /// The unauthenticated, zero-permission session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated session with the given role and grants.
    pub fn authenticated(role: impl Into<String>, permissions: PermissionSet) -> Self {
        let role = role.into();
        Self {
            is_authenticated: true,
            role_display_name: role.clone(),
            role,
            permissions,
            ..Self::default()
        }
    }

    /// Sets the explicit super-admin flag.
    pub fn with_super_admin(mut self, is_super_admin: bool) -> Self {
        self.is_super_admin = is_super_admin;
        self
    }

    /// Permission checks over this session.
    pub fn evaluator(&self) -> PermissionEvaluator<'_> {
        PermissionEvaluator::new(self)
    }
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        let role_display_name = if record.role_name.is_empty() {
            record.role.clone()
        } else {
            record.role_name
        };
        Self {
            is_authenticated: true,
            name: record.name,
            email: record.email,
            role: record.role,
            role_display_name,
            is_super_admin: record.is_super_admin,
            permissions: PermissionSet::from_keys(&record.permissions),
            logged_in_at: record.logged_in_at,
        }
    }
}
