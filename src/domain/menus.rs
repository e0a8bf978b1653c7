//! Menu entities mirrored from the content store.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Taxonomy-term identifier of a menu.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MenuId(pub u64);

impl MenuId {
    /// Wildcard sentinel. Never denotes a real menu; invalidation entry
    /// points treat it as "every known menu".
    pub const NONE: MenuId = MenuId(0);
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a caller addresses a menu: by identifier or by display slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuLookup {
    Id(MenuId),
    Slug(String),
}

impl MenuLookup {
    pub fn slug(slug: impl Into<String>) -> Self {
        Self::Slug(slug.into())
    }
}

impl From<MenuId> for MenuLookup {
    fn from(id: MenuId) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for MenuLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuLookup::Id(id) => write!(f, "{id}"),
            MenuLookup::Slug(slug) => f.write_str(slug),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub slug: String,
    pub name: String,
}

/// Raw menu item as the content store reports it.
///
/// `classes` is render-prep state: recomputed from the raw fields on
/// every render, never part of what invalidation tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    /// Sort order within the menu. Not necessarily contiguous or unique.
    pub menu_order: i32,
    /// Parent item id; `None` marks a top-level item.
    pub parent: Option<u64>,
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub classes: Vec<String>,
}

const CLASS_ITEM: &str = "menu-item";
const CLASS_HAS_CHILDREN: &str = "menu-item-has-children";

/// Tag items with their contextual CSS classes: every item carries
/// `menu-item`, and items referenced as a parent additionally carry
/// `menu-item-has-children`.
pub fn assign_item_classes(items: &mut [MenuItem]) {
    let parent_ids: HashSet<u64> = items.iter().filter_map(|item| item.parent).collect();

    for item in items.iter_mut() {
        push_unique(&mut item.classes, CLASS_ITEM);
        if parent_ids.contains(&item.id) {
            push_unique(&mut item.classes, CLASS_HAS_CHILDREN);
        }
    }
}

fn push_unique(classes: &mut Vec<String>, class: &str) {
    if !classes.iter().any(|existing| existing == class) {
        classes.push(class.to_string());
    }
}
