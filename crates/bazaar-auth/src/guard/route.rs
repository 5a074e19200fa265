//! Per-view access declarations.

use serde::{Deserialize, Serialize};

use crate::permission::Permission;

/// Access requirements a protected view declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDeclaration {
    /// Route pattern; `:name` segments match any single segment.
    pub path: String,
    /// Permission the view requires, if any.
    #[serde(default)]
    pub required_permission: Option<Permission>,
    /// Whether only super admins may open the view.
    #[serde(default)]
    pub require_super_admin: bool,
    /// Skips the permission check; the landing page must be exempt so
    /// denials cannot redirect in a loop.
    #[serde(default)]
    pub exempt: bool,
}

impl RouteDeclaration {
    /// A route open to any authenticated admin.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            required_permission: None,
            require_super_admin: false,
            exempt: false,
        }
    }

    /// Requires `permission`.
    pub fn requires(mut self, permission: Permission) -> Self {
        self.required_permission = Some(permission);
        self
    }

    /// Restricts the route to super admins.
    pub fn super_admin_only(mut self) -> Self {
        self.require_super_admin = true;
        self
    }

    /// Exempts the route from the permission check.
    pub fn exempt(mut self) -> Self {
        self.exempt = true;
        self
    }

    /// Whether `path` matches this route's pattern.
    pub fn matches(&self, path: &str) -> bool {
        let mut pattern = segments(&self.path);
        let mut actual = segments(path);
        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return true,
                (Some(p), Some(a)) if p.starts_with(':') || p == a => continue,
                _ => return false,
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty())
}
