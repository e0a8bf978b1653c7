//! Invalidation, registry, and resolution behavior of the menu cache.

mod common;

use std::sync::Arc;

use navcache::{CacheConfig, CacheKey, MemoryStore, MenuCache, MenuId, MenuLookup, TransientStore};

use common::{FakeSource, item};

fn wired() -> (Arc<MenuCache>, Arc<MemoryStore>, Arc<FakeSource>) {
    let store = Arc::new(MemoryStore::new());
    let source = Arc::new(FakeSource::new());
    let cache = Arc::new(MenuCache::new(
        CacheConfig::default(),
        store.clone(),
        source.clone(),
    ));
    (cache, store, source)
}

fn registry_in(store: &MemoryStore) -> Option<Vec<MenuId>> {
    store
        .get(&CacheKey::Registry.storage_key())
        .map(|raw| serde_json::from_slice(&raw).expect("registry deserializes"))
}

fn items_key(id: u64) -> String {
    CacheKey::Items(MenuId(id)).storage_key()
}

#[test]
fn invalidation_forces_the_next_read_back_to_the_source() {
    let (cache, _store, source) = wired();
    source.add_menu(1, "primary");
    source.set_items(1, vec![item(10, 1, None, "Home", "/")]);

    cache.get_items(MenuId(1));
    cache.get_items(MenuId(1));
    assert_eq!(source.item_fetch_count(), 1);

    cache.menu_updated(MenuId(1));

    cache.get_items(MenuId(1));
    assert_eq!(source.item_fetch_count(), 2);
}

#[test]
fn menu_created_drops_any_entry_under_a_reused_id() {
    let (cache, store, source) = wired();
    source.add_menu(3, "reused");
    source.set_items(3, vec![item(30, 1, None, "Old", "/old")]);

    cache.get_items(MenuId(3));
    assert!(store.get(&items_key(3)).is_some());

    cache.menu_created(MenuId(3));
    assert!(store.get(&items_key(3)).is_none());
}

#[test]
fn menu_deleted_removes_the_id_from_registry_and_cache() {
    let (cache, store, source) = wired();
    source.add_menu(5, "five");
    source.add_menu(7, "seven");
    source.set_items(5, vec![item(50, 1, None, "A", "/a")]);
    cache.update_registry(MenuId(5));
    cache.update_registry(MenuId(7));
    cache.get_items(MenuId(5));

    source.remove_menu(5);
    cache.menu_deleted(MenuId(5));

    assert_eq!(registry_in(&store), Some(vec![MenuId(7)]));
    assert!(store.get(&items_key(5)).is_none());
}

#[test]
fn content_saved_flushes_every_registered_menu() {
    let (cache, store, source) = wired();
    source.add_menu(5, "five");
    source.add_menu(7, "seven");
    source.set_items(5, vec![item(50, 1, None, "A", "/a")]);
    source.set_items(7, vec![item(70, 1, None, "B", "/b")]);
    cache.update_registry(MenuId(5));
    cache.update_registry(MenuId(7));
    cache.get_items(MenuId(5));
    cache.get_items(MenuId(7));

    cache.content_saved();

    assert!(store.get(&items_key(5)).is_none());
    assert!(store.get(&items_key(7)).is_none());
}

#[test]
fn update_registry_is_idempotent() {
    let (cache, store, source) = wired();
    source.add_menu(5, "five");

    cache.update_registry(MenuId(5));
    let once = registry_in(&store);
    cache.update_registry(MenuId(5));
    let twice = registry_in(&store);

    assert_eq!(once, Some(vec![MenuId(5)]));
    assert_eq!(once, twice);
}

#[test]
fn update_registry_never_stores_an_empty_set() {
    let (cache, store, source) = wired();

    // Nothing exists: no key may appear.
    cache.update_registry(MenuId(9));
    assert!(registry_in(&store).is_none());

    // A populated registry whose last menu disappears loses the key.
    source.add_menu(5, "five");
    cache.update_registry(MenuId(5));
    assert!(registry_in(&store).is_some());

    source.remove_menu(5);
    cache.update_registry(MenuId(5));
    assert!(registry_in(&store).is_none());
}

#[test]
fn stale_registry_entries_are_pruned_on_the_next_write() {
    let (cache, store, source) = wired();
    source.add_menu(5, "five");
    source.add_menu(7, "seven");
    cache.update_registry(MenuId(5));
    cache.update_registry(MenuId(7));

    // Menu 5 disappears without the cache hearing about it.
    source.remove_menu(5);
    cache.update_registry(MenuId(7));

    assert_eq!(registry_in(&store), Some(vec![MenuId(7)]));
}

#[test]
fn term_split_moves_the_entry_byte_for_byte() {
    let (cache, store, source) = wired();
    source.add_menu(5, "five");
    source.set_items(5, vec![item(50, 1, None, "A", "/a")]);
    cache.get_items(MenuId(5));
    let before = store.get(&items_key(5)).expect("cached items");

    cache.term_split(MenuId(5), MenuId(9));

    assert!(store.get(&items_key(5)).is_none());
    assert_eq!(store.get(&items_key(9)), Some(before));
}

#[test]
fn fallback_resolution_picks_the_first_menu_with_items() {
    let (cache, store, source) = wired();
    source.add_menu(1, "empty");
    source.add_menu(2, "filled");
    source.set_items(2, vec![item(20, 1, None, "Home", "/")]);

    let menu = cache.resolve_menu(None, None).expect("a menu resolves");

    assert_eq!(menu.id, MenuId(2));
    // The scan seeded the registry in store order.
    assert_eq!(registry_in(&store), Some(vec![MenuId(1), MenuId(2)]));
}

#[test]
fn fallback_resolution_honors_registry_insertion_order() {
    let (cache, _store, source) = wired();
    source.add_menu(1, "older");
    source.add_menu(2, "newer");
    source.set_items(1, vec![item(10, 1, None, "A", "/a")]);
    source.set_items(2, vec![item(20, 1, None, "B", "/b")]);
    cache.update_registry(MenuId(1));
    cache.update_registry(MenuId(2));

    let menu = cache.resolve_menu(None, None).expect("a menu resolves");
    assert_eq!(menu.id, MenuId(1));
}

#[test]
fn resolution_yields_nothing_when_no_menu_has_items() {
    let (cache, _store, source) = wired();
    source.add_menu(1, "empty");

    assert!(cache.resolve_menu(None, None).is_none());
}

#[test]
fn location_mappings_are_queried_fresh_each_call() {
    let (cache, _store, source) = wired();
    source.add_menu(1, "first");
    source.add_menu(2, "second");
    source.bind_location("header", 1);

    let menu = cache.resolve_menu(None, Some("header")).expect("menu");
    assert_eq!(menu.id, MenuId(1));

    source.bind_location("header", 2);
    let menu = cache.resolve_menu(None, Some("header")).expect("menu");
    assert_eq!(menu.id, MenuId(2));
}

#[test]
fn collaborator_failure_reads_as_menu_not_found() {
    let (cache, _store, source) = wired();
    source.add_menu(1, "primary");
    source.set_failing(true);

    assert!(
        cache
            .resolve_menu(Some(&MenuLookup::slug("primary")), None)
            .is_none()
    );
    assert!(cache.get_items(MenuId(1)).is_empty());
}

#[test]
fn explicit_lookup_wins_over_location_and_registry() {
    let (cache, _store, source) = wired();
    source.add_menu(1, "explicit");
    source.add_menu(2, "located");
    source.bind_location("header", 2);

    let menu = cache
        .resolve_menu(Some(&MenuLookup::slug("explicit")), Some("header"))
        .expect("menu");
    assert_eq!(menu.id, MenuId(1));
}
