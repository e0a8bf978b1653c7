//! Typed cache keys.
//!
//! Every cache entry the manager owns is addressed through `CacheKey`,
//! which maps deterministically to a backend key string. String keys
//! are never assembled anywhere else.

use std::fmt;

use crate::domain::menus::{MenuId, MenuLookup};

const MENU_PREFIX: &str = "nav_menu:";
const ITEMS_PREFIX: &str = "nav_items:";
const REGISTRY_KEY: &str = "nav_menu_ids";

/// Address of a cache entry owned by the menu cache manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// A cached `Menu` object, addressed by id or slug.
    Menu(MenuLookup),
    /// The cached raw item collection of one menu.
    Items(MenuId),
    /// The menu identifier registry.
    Registry,
}

impl CacheKey {
    /// The backend key string for this entry.
    pub fn storage_key(&self) -> String {
        self.to_string()
    }

    /// Short namespace label, used for metrics and logging.
    pub fn kind(&self) -> &'static str {
        match self {
            CacheKey::Menu(_) => "menu",
            CacheKey::Items(_) => "items",
            CacheKey::Registry => "registry",
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Menu(lookup) => write!(f, "{MENU_PREFIX}{lookup}"),
            CacheKey::Items(id) => write!(f, "{ITEMS_PREFIX}{id}"),
            CacheKey::Registry => f.write_str(REGISTRY_KEY),
        }
    }
}
