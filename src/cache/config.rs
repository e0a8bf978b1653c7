//! Cache configuration.

use serde::Deserialize;

/// Enable switches for the two cached namespaces.
///
/// A disabled namespace reads and writes nothing: every accessor falls
/// through to the content store. The registry follows the items switch,
/// since it only exists to support items invalidation and fallback
/// scanning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache resolved `Menu` objects.
    pub enable_menu_cache: bool,
    /// Cache raw item collections and the identifier registry.
    pub enable_items_cache: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enable_menu_cache: true,
            enable_items_cache: true,
        }
    }
}

impl CacheConfig {
    pub fn is_enabled(&self) -> bool {
        self.enable_menu_cache || self.enable_items_cache
    }
}
