//! Wildcard-aware permission grant sets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::key::Permission;

/// Sentinel key granting every ordinary permission.
pub const WILDCARD: &str = "*";

/// The permissions granted to a session.
///
/// The wildcard is a separate flag rather than a member: it grants every
/// ordinary permission but is never mistaken for a concrete key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PermissionSet {
    wildcard: bool,
    keys: BTreeSet<Permission>,
}

impl PermissionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding only the wildcard.
    pub fn wildcard() -> Self {
        Self {
            wildcard: true,
            keys: BTreeSet::new(),
        }
    }

    /// Parses raw keys as persisted at login.
    ///
    /// `"*"` sets the wildcard. Keys match exactly; anything outside the
    /// vocabulary, padded keys included, is dropped with a warning and can
    /// never grant anything.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for raw in keys {
            let raw = raw.as_ref();
            if raw == WILDCARD {
                set.wildcard = true;
                continue;
            }
            match raw.parse::<Permission>() {
                Ok(permission) => {
                    set.keys.insert(permission);
                }
                Err(e) => tracing::warn!(key = %raw, "Ignoring permission grant: {e}"),
            }
        }
        set
    }

    /// Adds a concrete permission.
    pub fn insert(&mut self, permission: Permission) -> bool {
        self.keys.insert(permission)
    }

    /// Whether the wildcard is held.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Literal membership, ignoring the wildcard.
    pub fn contains(&self, permission: Permission) -> bool {
        self.keys.contains(&permission)
    }

    /// Whether the set grants `permission`, honoring the wildcard.
    pub fn grants(&self, permission: Permission) -> bool {
        self.wildcard || self.contains(permission)
    }

    /// Concrete permissions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.keys.iter().copied()
    }

    /// Number of concrete permissions (the wildcard is not counted).
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when neither the wildcard nor any key is held.
    pub fn is_empty(&self) -> bool {
        !self.wildcard && self.keys.is_empty()
    }

    /// Raw keys, wildcard first.
    pub fn to_keys(&self) -> Vec<String> {
        self.wildcard
            .then(|| WILDCARD.to_string())
            .into_iter()
            .chain(self.keys.iter().map(|p| p.as_str().to_string()))
            .collect()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self {
            wildcard: false,
            keys: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(keys: Vec<String>) -> Self {
        Self::from_keys(keys)
    }
}

impl From<PermissionSet> for Vec<String> {
    fn from(set: PermissionSet) -> Self {
        set.to_keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keys_splits_wildcard() {
        let set = PermissionSet::from_keys(["*", "orders.view"]);
        assert!(set.is_wildcard());
        assert!(set.contains(Permission::OrdersView));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let set = PermissionSet::from_keys(["orders.view", "orders.teleport", ""]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Permission::OrdersView]);
        assert!(!set.is_wildcard());
    }

    #[test]
    fn test_grants_honors_wildcard() {
        let set = PermissionSet::wildcard();
        assert!(set.grants(Permission::SettingsEdit));
        assert!(!set.contains(Permission::SettingsEdit));
        assert!(!set.is_empty());
        assert!(PermissionSet::new().is_empty());
    }

    #[test]
    fn test_serializes_as_key_array() {
        let mut set = PermissionSet::wildcard();
        set.insert(Permission::UsersView);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!(["*", "users.view"]));

        let parsed: PermissionSet = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_padded_keys_grant_nothing() {
        let set = PermissionSet::from_keys([" orders.view ", " * ", "Orders.View"]);
        assert!(set.is_empty());
        assert!(!set.is_wildcard());
        assert!(!set.grants(Permission::OrdersView));
    }
}
