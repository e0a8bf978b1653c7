//! Render configuration.

use std::fmt;
use std::sync::Arc;

use crate::domain::menus::MenuLookup;

pub(crate) const DEFAULT_CONTAINER: &str = "div";
pub(crate) const DEFAULT_MENU_CLASS: &str = "menu";
pub(crate) const DEFAULT_ITEMS_WRAP: &str = r#"<ul id="{id}" class="{class}">{items}</ul>"#;

/// Caller-injected fallback: a procedure from the configuration to
/// rendered output. The render service only ever invokes it.
#[derive(Clone)]
pub struct Fallback(Arc<dyn Fn(&RenderConfig) -> Option<String> + Send + Sync>);

impl Fallback {
    pub fn new(f: impl Fn(&RenderConfig) -> Option<String> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn invoke(&self, config: &RenderConfig) -> Option<String> {
        (self.0)(config)
    }
}

impl fmt::Debug for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fallback(..)")
    }
}

/// Options for one render call. Construct with struct-update syntax
/// over `RenderConfig::default()`; empty strings are treated like
/// absent values rather than errors.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Explicit menu to render; wins over every other resolution path.
    pub menu: Option<MenuLookup>,
    /// Container tag around the list. Only `div` and `nav` are
    /// emitted; anything else suppresses the container.
    pub container: Option<String>,
    pub container_class: Option<String>,
    pub container_id: Option<String>,
    pub menu_class: String,
    /// Explicit wrapper element id; defaults to `menu-<slug>`.
    pub menu_id: Option<String>,
    pub fallback: Option<Fallback>,
    pub before: String,
    pub after: String,
    pub link_before: String,
    pub link_after: String,
    /// Wrap template with `{id}`, `{class}` and `{items}` placeholders.
    pub items_wrap: String,
    /// Traversal depth for the walker; 0 means unlimited.
    pub depth: u32,
    pub theme_location: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            menu: None,
            container: Some(DEFAULT_CONTAINER.to_string()),
            container_class: None,
            container_id: None,
            menu_class: DEFAULT_MENU_CLASS.to_string(),
            menu_id: None,
            fallback: None,
            before: String::new(),
            after: String::new(),
            link_before: String::new(),
            link_after: String::new(),
            items_wrap: DEFAULT_ITEMS_WRAP.to_string(),
            depth: 0,
            theme_location: None,
        }
    }
}
