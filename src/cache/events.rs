//! Content-change events and their invalidation rules.
//!
//! Events arrive from the surrounding content system's hook dispatch
//! and are applied synchronously; each one maps to a fixed set of
//! cache-key mutations.

use tracing::info;

use crate::domain::menus::MenuId;

use super::manager::MenuCache;

/// External content-change events the cache subscribes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    MenuCreated { menu_id: MenuId },
    MenuUpdated { menu_id: MenuId },
    MenuDeleted { menu_id: MenuId },
    /// Any content item was saved; its title or permalink could appear
    /// in any menu.
    ContentSaved,
    /// The store split a shared taxonomy term, reassigning a menu's
    /// identifier.
    TermSplit { old_id: MenuId, new_id: MenuId },
}

impl MenuCache {
    /// Apply one content-change event to the cache.
    pub fn apply(&self, event: &MenuEvent) {
        info!(event = ?event, "applying menu cache event");
        match *event {
            // Created is defensive: a new menu has no stale items, but
            // its id may have been reused.
            MenuEvent::MenuCreated { menu_id } | MenuEvent::MenuUpdated { menu_id } => {
                self.delete_items_cache(menu_id);
            }
            MenuEvent::MenuDeleted { menu_id } => {
                self.update_registry(menu_id);
                // A deleted menu no longer passes the exists check, so
                // the wildcard path would skip its own entry.
                self.delete_items_entry(menu_id);
            }
            MenuEvent::ContentSaved => self.delete_items_cache(MenuId::NONE),
            MenuEvent::TermSplit { old_id, new_id } => self.move_items_cache(old_id, new_id),
        }
    }

    pub fn menu_created(&self, menu_id: MenuId) {
        self.apply(&MenuEvent::MenuCreated { menu_id });
    }

    pub fn menu_updated(&self, menu_id: MenuId) {
        self.apply(&MenuEvent::MenuUpdated { menu_id });
    }

    pub fn menu_deleted(&self, menu_id: MenuId) {
        self.apply(&MenuEvent::MenuDeleted { menu_id });
    }

    pub fn content_saved(&self) {
        self.apply(&MenuEvent::ContentSaved);
    }

    pub fn term_split(&self, old_id: MenuId, new_id: MenuId) {
        self.apply(&MenuEvent::TermSplit { old_id, new_id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_equality() {
        assert_eq!(
            MenuEvent::MenuUpdated { menu_id: MenuId(3) },
            MenuEvent::MenuUpdated { menu_id: MenuId(3) }
        );
        assert_ne!(
            MenuEvent::MenuUpdated { menu_id: MenuId(3) },
            MenuEvent::MenuDeleted { menu_id: MenuId(3) }
        );
    }
}
