//! Item-tree rendering.

use crate::domain::menus::MenuItem;

use super::config::RenderConfig;

/// Renders a flat item collection into markup.
///
/// The render service never inspects the output beyond an emptiness
/// check; custom walkers can emit any structure they like.
pub trait MenuWalker: Send + Sync {
    /// `depth` of 0 means unlimited; `items` arrive sorted.
    fn walk(&self, items: &[MenuItem], depth: u32, config: &RenderConfig) -> String;
}

/// The classic nested-list walker: `<li>` per item, children nested in
/// `<ul class="sub-menu">`, per-item decorations from the config.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListWalker;

impl MenuWalker for ListWalker {
    fn walk(&self, items: &[MenuItem], depth: u32, config: &RenderConfig) -> String {
        let mut out = String::new();
        render_level(&mut out, items, None, 0, depth, config);
        out
    }
}

fn render_level(
    out: &mut String,
    items: &[MenuItem],
    parent: Option<u64>,
    level: u32,
    depth: u32,
    config: &RenderConfig,
) {
    for item in items.iter().filter(|item| item.parent == parent) {
        out.push_str("<li");
        if !item.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_attr(&item.classes.join(" ")));
            out.push('"');
        }
        out.push('>');
        out.push_str(&config.before);
        out.push_str("<a href=\"");
        out.push_str(&escape_attr(&item.url));
        out.push_str("\">");
        out.push_str(&config.link_before);
        out.push_str(&escape_text(&item.label));
        out.push_str(&config.link_after);
        out.push_str("</a>");
        out.push_str(&config.after);

        let has_children = items.iter().any(|child| child.parent == Some(item.id));
        if has_children && (depth == 0 || level + 1 < depth) {
            out.push_str("<ul class=\"sub-menu\">");
            render_level(out, items, Some(item.id), level + 1, depth, config);
            out.push_str("</ul>");
        }
        out.push_str("</li>");
    }
}

pub(crate) fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
