//! The menu cache manager.
//!
//! Owns every cache key related to navigation menus: read-through
//! accessors for menu objects and item collections, maintenance of the
//! menu identifier registry, and the invalidation entry points wired to
//! content-change events (see `events.rs`).

use std::sync::{Arc, Once};

use metrics::{Unit, counter, describe_counter};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::domain::menus::{Menu, MenuId, MenuItem, MenuLookup};
use crate::source::{ItemQueryOptions, MenuSource};

use super::config::CacheConfig;
use super::keys::CacheKey;
use super::store::TransientStore;

const METRIC_HIT_TOTAL: &str = "navcache_hit_total";
const METRIC_MISS_TOTAL: &str = "navcache_miss_total";
const METRIC_INVALIDATE_TOTAL: &str = "navcache_invalidate_total";

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Register metric descriptions with the installed recorder.
pub fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(METRIC_HIT_TOTAL, Unit::Count, "Total menu cache hits.");
        describe_counter!(METRIC_MISS_TOTAL, Unit::Count, "Total menu cache misses.");
        describe_counter!(
            METRIC_INVALIDATE_TOTAL,
            Unit::Count,
            "Total menu cache entries invalidated."
        );
    });
}

/// Read-through cache over the menu subsystem of a content store.
///
/// All methods degrade on failure: a collaborator error is treated as
/// "menu not found" and logged, never propagated.
pub struct MenuCache {
    config: CacheConfig,
    store: Arc<dyn TransientStore>,
    source: Arc<dyn MenuSource>,
}

impl MenuCache {
    pub fn new(
        config: CacheConfig,
        store: Arc<dyn TransientStore>,
        source: Arc<dyn MenuSource>,
    ) -> Self {
        Self {
            config,
            store,
            source,
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // ========================================================================
    // Read-through accessors
    // ========================================================================

    /// Locate the menu to render.
    ///
    /// Resolution order: explicit `lookup` wins; otherwise a theme
    /// location is resolved through the store's location mapping
    /// (queried fresh on every call; mappings are not cached);
    /// otherwise the registry is scanned in insertion order for the
    /// first menu whose item list is non-empty.
    pub fn resolve_menu(
        &self,
        lookup: Option<&MenuLookup>,
        theme_location: Option<&str>,
    ) -> Option<Menu> {
        if let Some(lookup) = lookup {
            return self.menu_by_lookup(lookup);
        }

        if let Some(location) = theme_location {
            if let Some(menu_id) = self.source.resolve_location(location) {
                return self.menu_by_lookup(&MenuLookup::Id(menu_id));
            }
        }

        // Best guess: oldest-registered menu that has items.
        let registry = {
            let ids = self.registry_ids();
            if ids.is_empty() {
                self.populate_registry()
            } else {
                ids
            }
        };

        for menu_id in registry {
            let Some(menu) = self.menu_by_lookup(&MenuLookup::Id(menu_id)) else {
                continue;
            };
            if !self.get_items(menu_id).is_empty() {
                return Some(menu);
            }
        }

        None
    }

    /// Raw items for a menu, served from cache when possible.
    ///
    /// Misses query the store with its own term-cache population
    /// disabled; this cache is the lighter-weight replacement.
    pub fn get_items(&self, menu_id: MenuId) -> Vec<MenuItem> {
        let key = CacheKey::Items(menu_id);
        if let Some(items) = self.read_cached::<Vec<MenuItem>>(&key) {
            counter!(METRIC_HIT_TOTAL, "namespace" => key.kind()).increment(1);
            debug!(menu_id = %menu_id, "items cache hit");
            return items;
        }
        counter!(METRIC_MISS_TOTAL, "namespace" => key.kind()).increment(1);

        let options = ItemQueryOptions {
            populate_term_cache: false,
        };
        match self.source.fetch_menu_items(menu_id, &options) {
            Ok(items) => {
                self.write_cached(&key, &items);
                items
            }
            Err(err) => {
                warn!(menu_id = %menu_id, error = %err, "item query failed, serving no items");
                Vec::new()
            }
        }
    }

    fn menu_by_lookup(&self, lookup: &MenuLookup) -> Option<Menu> {
        let key = CacheKey::Menu(lookup.clone());
        if let Some(menu) = self.read_cached::<Menu>(&key) {
            counter!(METRIC_HIT_TOTAL, "namespace" => key.kind()).increment(1);
            debug!(lookup = %lookup, "menu cache hit");
            return Some(menu);
        }
        counter!(METRIC_MISS_TOTAL, "namespace" => key.kind()).increment(1);

        match self.source.fetch_menu(lookup) {
            Ok(menu) => {
                self.write_cached(&key, &menu);
                Some(menu)
            }
            Err(err) => {
                warn!(lookup = %lookup, error = %err, "menu fetch failed, treating as absent");
                None
            }
        }
    }

    // ========================================================================
    // Registry maintenance
    // ========================================================================

    /// Reconcile the identifier registry with the store.
    ///
    /// Appends `menu_id` when it denotes an existing menu, prunes every
    /// identifier that no longer does, and deletes the registry key
    /// outright when the result is empty: an empty-but-present set
    /// would be indistinguishable from "not yet populated".
    pub fn update_registry(&self, menu_id: MenuId) {
        let mut ids = self.registry_ids();

        if !ids.contains(&menu_id) && self.source.menu_exists(&MenuLookup::Id(menu_id)) {
            ids.push(menu_id);
        }
        ids.retain(|id| self.source.menu_exists(&MenuLookup::Id(*id)));

        if ids.is_empty() {
            self.store.delete(&CacheKey::Registry.storage_key());
            info!("menu registry empty, key deleted");
        } else {
            self.write_cached(&CacheKey::Registry, &ids);
            debug!(count = ids.len(), "menu registry stored");
        }
    }

    fn registry_ids(&self) -> Vec<MenuId> {
        self.read_cached::<Vec<MenuId>>(&CacheKey::Registry)
            .unwrap_or_default()
    }

    /// Scan all existing menus and seed the registry in store order.
    fn populate_registry(&self) -> Vec<MenuId> {
        let menus = match self.source.fetch_all_menus() {
            Ok(menus) => menus,
            Err(err) => {
                warn!(error = %err, "menu scan failed, registry left unpopulated");
                return Vec::new();
            }
        };

        let ids: Vec<MenuId> = menus.into_iter().map(|menu| menu.id).collect();
        if !ids.is_empty() {
            self.write_cached(&CacheKey::Registry, &ids);
            info!(count = ids.len(), "menu registry populated");
        }
        ids
    }

    // ========================================================================
    // Invalidation
    // ========================================================================

    /// Drop the cached items of one menu, or of every registered menu.
    ///
    /// An identifier that does not denote an existing menu (including
    /// the `MenuId::NONE` sentinel) means "delete everything": one pass
    /// over the registry, deleting each listed id's entry directly.
    pub fn delete_items_cache(&self, menu_id: MenuId) {
        if self.source.menu_exists(&MenuLookup::Id(menu_id)) {
            self.delete_items_entry(menu_id);
            return;
        }

        let ids = self.registry_ids();
        info!(menu_id = %menu_id, count = ids.len(), "flushing items cache for all registered menus");
        for id in ids {
            self.delete_items_entry(id);
        }
    }

    /// Migrate the items entry after a taxonomy term split.
    ///
    /// The stored value moves byte-for-byte; nothing is recomputed.
    pub fn move_items_cache(&self, old_id: MenuId, new_id: MenuId) {
        let old_key = CacheKey::Items(old_id).storage_key();
        let Some(value) = self.store.get(&old_key) else {
            return;
        };
        self.store.set(&CacheKey::Items(new_id).storage_key(), value);
        self.store.delete(&old_key);
        info!(old_id = %old_id, new_id = %new_id, "items cache entry migrated after term split");
    }

    pub(crate) fn delete_items_entry(&self, menu_id: MenuId) {
        let key = CacheKey::Items(menu_id);
        self.store.delete(&key.storage_key());
        counter!(METRIC_INVALIDATE_TOTAL, "namespace" => key.kind()).increment(1);
        debug!(menu_id = %menu_id, "items cache entry deleted");
    }

    // ========================================================================
    // Serialization plumbing
    // ========================================================================

    fn namespace_enabled(&self, key: &CacheKey) -> bool {
        match key {
            CacheKey::Menu(_) => self.config.enable_menu_cache,
            CacheKey::Items(_) | CacheKey::Registry => self.config.enable_items_cache,
        }
    }

    fn read_cached<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        if !self.namespace_enabled(key) {
            return None;
        }
        let storage_key = key.storage_key();
        let raw = self.store.get(&storage_key)?;
        match serde_json::from_slice(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key = %key, error = %err, "dropping cache entry that failed to deserialize");
                self.store.delete(&storage_key);
                None
            }
        }
    }

    fn write_cached<T: Serialize>(&self, key: &CacheKey, value: &T) {
        if !self.namespace_enabled(key) {
            return;
        }
        match serde_json::to_vec(value) {
            Ok(raw) => self.store.set(&key.storage_key(), raw),
            Err(err) => warn!(key = %key, error = %err, "failed to serialize cache value"),
        }
    }
}
