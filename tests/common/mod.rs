#![allow(dead_code)]

//! Shared test scaffolding: an in-memory content store whose menus can
//! be mutated mid-test to simulate external content changes.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use navcache::{
    ItemQueryOptions, Menu, MenuId, MenuItem, MenuLookup, MenuSource, SourceError,
};

#[derive(Default)]
struct State {
    /// Store order; fetch_all_menus reports menus in this order.
    menus: Vec<Menu>,
    items: HashMap<u64, Vec<MenuItem>>,
    locations: HashMap<String, MenuId>,
    failing: bool,
}

#[derive(Default)]
pub struct FakeSource {
    state: RwLock<State>,
    item_fetches: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_menu(&self, id: u64, slug: &str) {
        let mut state = self.state.write().unwrap();
        state.menus.push(Menu {
            id: MenuId(id),
            slug: slug.to_string(),
            name: slug.to_string(),
        });
    }

    pub fn set_items(&self, menu_id: u64, items: Vec<MenuItem>) {
        self.state.write().unwrap().items.insert(menu_id, items);
    }

    /// Simulate an external deletion the cache has not heard about yet.
    pub fn remove_menu(&self, id: u64) {
        let mut state = self.state.write().unwrap();
        state.menus.retain(|menu| menu.id != MenuId(id));
        state.items.remove(&id);
    }

    pub fn bind_location(&self, location: &str, menu_id: u64) {
        self.state
            .write()
            .unwrap()
            .locations
            .insert(location.to_string(), MenuId(menu_id));
    }

    pub fn unbind_location(&self, location: &str) {
        self.state.write().unwrap().locations.remove(location);
    }

    /// Make every fetch report a backend error.
    pub fn set_failing(&self, failing: bool) {
        self.state.write().unwrap().failing = failing;
    }

    pub fn item_fetch_count(&self) -> usize {
        self.item_fetches.load(Ordering::SeqCst)
    }
}

impl MenuSource for FakeSource {
    fn menu_exists(&self, lookup: &MenuLookup) -> bool {
        let state = self.state.read().unwrap();
        state.menus.iter().any(|menu| match lookup {
            MenuLookup::Id(id) => menu.id == *id,
            MenuLookup::Slug(slug) => menu.slug == *slug,
        })
    }

    fn fetch_menu(&self, lookup: &MenuLookup) -> Result<Menu, SourceError> {
        let state = self.state.read().unwrap();
        if state.failing {
            return Err(SourceError::backend("store unavailable"));
        }
        state
            .menus
            .iter()
            .find(|menu| match lookup {
                MenuLookup::Id(id) => menu.id == *id,
                MenuLookup::Slug(slug) => menu.slug == *slug,
            })
            .cloned()
            .ok_or(SourceError::NotFound)
    }

    fn fetch_all_menus(&self) -> Result<Vec<Menu>, SourceError> {
        let state = self.state.read().unwrap();
        if state.failing {
            return Err(SourceError::backend("store unavailable"));
        }
        Ok(state.menus.clone())
    }

    fn fetch_menu_items(
        &self,
        menu_id: MenuId,
        _options: &ItemQueryOptions,
    ) -> Result<Vec<MenuItem>, SourceError> {
        let state = self.state.read().unwrap();
        if state.failing {
            return Err(SourceError::backend("store unavailable"));
        }
        self.item_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(state.items.get(&menu_id.0).cloned().unwrap_or_default())
    }

    fn resolve_location(&self, theme_location: &str) -> Option<MenuId> {
        self.state
            .read()
            .unwrap()
            .locations
            .get(theme_location)
            .copied()
    }
}

pub fn item(id: u64, order: i32, parent: Option<u64>, label: &str, url: &str) -> MenuItem {
    MenuItem {
        id,
        menu_order: order,
        parent,
        label: label.to_string(),
        url: url.to_string(),
        classes: Vec::new(),
    }
}
