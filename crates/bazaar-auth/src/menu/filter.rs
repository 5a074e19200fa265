//! Derives the visible menu from the full definition and a session.
//!
//! Filtering is stable: surviving categories and items keep their relative
//! order. Children are not filtered on their own; a visible parent shows
//! its whole subtree.

use std::sync::{Arc, Mutex};

use crate::rbac::PermissionEvaluator;
use crate::session::{Session, SessionProvider};

use super::model::{MenuCategory, MenuDefinition};

/// Filters a fixed definition, memoizing the result for the last session seen.
#[derive(Debug)]
pub struct MenuFilter {
    definition: MenuDefinition,
    cache: Mutex<Option<(Arc<Session>, Arc<MenuDefinition>)>>,
}

impl MenuFilter {
    /// Creates a filter over `definition`.
    pub fn new(definition: MenuDefinition) -> Self {
        Self {
            definition,
            cache: Mutex::new(None),
        }
    }

    /// The unfiltered definition.
    pub fn definition(&self) -> &MenuDefinition {
        &self.definition
    }

    /// The menu visible to `session`.
    pub fn apply(&self, session: &Session) -> MenuDefinition {
        filter_menu(&self.definition, &session.evaluator())
    }

    /// The menu for the provider's current session.
    ///
    /// Returns `None` while the session is loading. The result is reused
    /// only while the provider hands out the same session snapshot, so one
    /// filter can serve several providers.
    pub fn visible(&self, provider: &SessionProvider) -> Option<Arc<MenuDefinition>> {
        let (state, generation) = provider.snapshot();
        let session = state.session()?;

        let mut cache = self.cache.lock().unwrap_or_else(|p| p.into_inner());
        if let Some((cached, menu)) = cache.as_ref() {
            if Arc::ptr_eq(cached, session) {
                return Some(Arc::clone(menu));
            }
        }

        let menu = Arc::new(self.apply(session));
        tracing::debug!(
            generation,
            categories = menu.categories.len(),
            items = menu.item_count(),
            "Menu recomputed"
        );
        *cache = Some((Arc::clone(session), Arc::clone(&menu)));
        Some(menu)
    }
}

/// Filters `definition` for the evaluated session.
///
/// Categories whose visibility predicate fails are skipped, items are kept
/// when they need no permission or the permission is held, and categories
/// left without items are dropped.
pub fn filter_menu(definition: &MenuDefinition, eval: &PermissionEvaluator<'_>) -> MenuDefinition {
    let categories = definition
        .categories
        .iter()
        .filter(|category| category.visible_if.allows(eval))
        .filter_map(|category| {
            let items: Vec<_> = category
                .items
                .iter()
                .filter(|item| {
                    item.required_permission
                        .is_none_or(|permission| eval.has_permission(permission))
                })
                .cloned()
                .collect();

            (!items.is_empty()).then(|| MenuCategory {
                title: category.title.clone(),
                visible_if: category.visible_if,
                items,
            })
        })
        .collect();

    MenuDefinition::new(categories)
}
