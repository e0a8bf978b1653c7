//! Render orchestration.

use std::sync::Arc;

use tracing::debug;

use crate::cache::MenuCache;
use crate::domain::menus::{MenuLookup, assign_item_classes};

use super::config::RenderConfig;
use super::context::RenderContext;
use super::walker::{ListWalker, MenuWalker, escape_attr};

const CONTAINER_ALLOWED_TAGS: &[&str] = &["div", "nav"];

/// Turns a resolved menu into wrapped markup.
///
/// Resolution and item loading go through the cache manager; the item
/// tree itself is rendered by the configured walker.
pub struct MenuRenderService {
    cache: Arc<MenuCache>,
    walker: Arc<dyn MenuWalker>,
}

impl MenuRenderService {
    pub fn new(cache: Arc<MenuCache>) -> Self {
        Self {
            cache,
            walker: Arc::new(ListWalker),
        }
    }

    /// Replace the bundled walker.
    pub fn with_walker(mut self, walker: Arc<dyn MenuWalker>) -> Self {
        self.walker = walker;
        self
    }

    /// Render one menu. `None` means "nothing to render", distinct
    /// from markup that happens to be short.
    ///
    /// The fallback runs when resolution fails outright, or when the
    /// resolved menu has no items and no theme location was requested;
    /// a requested location suppresses fallback-on-empty even when the
    /// location itself never resolved.
    pub fn render(&self, config: &RenderConfig, context: &mut RenderContext) -> Option<String> {
        let lookup = config
            .menu
            .as_ref()
            .filter(|lookup| !matches!(lookup, MenuLookup::Slug(slug) if slug.is_empty()));
        let theme_location = config
            .theme_location
            .as_deref()
            .filter(|location| !location.is_empty());

        let menu = self.cache.resolve_menu(lookup, theme_location);
        let items = menu.as_ref().map(|menu| self.cache.get_items(menu.id));

        let empty_without_location =
            items.as_ref().is_some_and(|items| items.is_empty()) && theme_location.is_none();
        if menu.is_none() || empty_without_location {
            if let Some(fallback) = &config.fallback {
                debug!("deferring to the configured fallback");
                return fallback.invoke(config);
            }
        }

        let menu = menu?;
        let mut items = items.unwrap_or_default();

        assign_item_classes(&mut items);
        // Sort order is not unique; ties must keep stored order.
        items.sort_by_key(|item| item.menu_order);

        let body = self.walker.walk(&items, config.depth, config);
        if body.is_empty() {
            debug!(menu_id = %menu.id, "walker produced no output, nothing to render");
            return None;
        }

        let candidate = config
            .menu_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("menu-{}", menu.slug));
        let wrap_id = context.claim_wrap_id(&candidate);

        let list = config
            .items_wrap
            .replace("{id}", &escape_attr(&wrap_id))
            .replace("{class}", &escape_attr(&config.menu_class))
            .replace("{items}", &body);

        let markup = match config.container.as_deref() {
            Some(tag) if CONTAINER_ALLOWED_TAGS.contains(&tag) => {
                let class = config
                    .container_class
                    .as_deref()
                    .filter(|class| !class.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("menu-{}-container", menu.slug));
                let id_attr = config
                    .container_id
                    .as_deref()
                    .filter(|id| !id.is_empty())
                    .map(|id| format!(" id=\"{}\"", escape_attr(id)))
                    .unwrap_or_default();
                format!(
                    "<{tag}{id_attr} class=\"{}\">{list}</{tag}>",
                    escape_attr(&class)
                )
            }
            _ => list,
        };

        Some(markup)
    }
}
