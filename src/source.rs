//! Content-store collaborator contract.

use crate::domain::error::SourceError;
use crate::domain::menus::{Menu, MenuId, MenuItem, MenuLookup};

/// Options for raw item queries.
#[derive(Debug, Clone)]
pub struct ItemQueryOptions {
    /// Whether the store should hydrate its own term caches while
    /// loading items. The cache manager disables this and does its own
    /// lighter-weight caching instead.
    pub populate_term_cache: bool,
}

impl Default for ItemQueryOptions {
    fn default() -> Self {
        Self {
            populate_term_cache: true,
        }
    }
}

/// Read access to the source of truth for menus.
///
/// All calls are synchronous; the manager assumes they either succeed
/// or definitively fail. Errors are degraded to "not found" by the
/// caller, never retried.
pub trait MenuSource: Send + Sync {
    /// True iff `lookup` currently denotes a valid menu.
    fn menu_exists(&self, lookup: &MenuLookup) -> bool;

    fn fetch_menu(&self, lookup: &MenuLookup) -> Result<Menu, SourceError>;

    /// Every existing menu, in the store's own order.
    fn fetch_all_menus(&self) -> Result<Vec<Menu>, SourceError>;

    /// Raw items for a menu, in stored order. Empty when the menu has
    /// no items or does not exist.
    fn fetch_menu_items(
        &self,
        menu_id: MenuId,
        options: &ItemQueryOptions,
    ) -> Result<Vec<MenuItem>, SourceError>;

    /// Resolve a theme location alias to the menu bound to it.
    fn resolve_location(&self, theme_location: &str) -> Option<MenuId>;
}
