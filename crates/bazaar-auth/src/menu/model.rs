//! Static menu tree types.
//!
//! Definitions are authored in code (see [`super::dashboard`]) or loaded
//! from a JSON file. Neither path validates items: a definition is taken
//! as written.

use std::path::Path;

use serde::{Deserialize, Serialize};

use bazaar_core::error::AppError;

use crate::permission::Permission;
use crate::rbac::PermissionEvaluator;

/// Who a whole category is shown to, independent of item permissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Anyone with dashboard access.
    #[default]
    Everyone,
    /// Super admins only.
    SuperAdmin,
}

impl Visibility {
    /// Evaluates the predicate for a session.
    pub fn allows(&self, eval: &PermissionEvaluator<'_>) -> bool {
        match self {
            Self::Everyone => true,
            Self::SuperAdmin => eval.is_super_admin(),
        }
    }
}

/// A navigable entry, optionally with one level of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Route path; parents that only group children may omit it.
    #[serde(default)]
    pub path: Option<String>,
    /// Display label.
    pub label: String,
    /// Icon name.
    #[serde(default)]
    pub icon: String,
    /// Permission needed to see the item; `None` means visible to everyone.
    #[serde(default)]
    pub required_permission: Option<Permission>,
    /// Nested entries, gated by this item's visibility.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// A leaf item visible to everyone.
    pub fn new(path: &str, label: &str, icon: &str) -> Self {
        Self {
            path: Some(path.to_string()),
            label: label.to_string(),
            icon: icon.to_string(),
            required_permission: None,
            children: Vec::new(),
        }
    }

    /// Requires `permission` to see the item.
    pub fn requires(mut self, permission: Permission) -> Self {
        self.required_permission = Some(permission);
        self
    }

    /// Attaches child entries.
    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }
}

/// A titled group of menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    /// Section heading.
    pub title: String,
    /// Category-level visibility predicate.
    #[serde(default)]
    pub visible_if: Visibility,
    /// Items in display order.
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    /// A category shown to everyone.
    pub fn new(title: &str, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.to_string(),
            visible_if: Visibility::Everyone,
            items,
        }
    }

    /// Restricts the category to super admins.
    pub fn super_admin_only(mut self) -> Self {
        self.visible_if = Visibility::SuperAdmin;
        self
    }
}

/// The ordered category list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDefinition {
    /// Categories in display order.
    pub categories: Vec<MenuCategory>,
}

impl MenuDefinition {
    /// Creates a definition from categories in display order.
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    /// Loads a definition from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::configuration(format!(
                "Failed to read menu definition '{}': {e}",
                path.display()
            ))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::configuration(format!(
                "Invalid menu definition '{}': {e}",
                path.display()
            ))
        })
    }

    /// Top-level items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Paths of top-level items in display order.
    pub fn paths(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .filter_map(|i| i.path.as_deref())
            .collect()
    }
}
