//! navcache
//!
//! A thin read-through caching layer for a content system's navigation
//! menus. Menu objects and raw item collections are cached in a
//! transient key-value backend under typed keys; content-change events
//! map to a fixed table of key deletions; and a fallback-resolution
//! chain picks "the menu to render" when none is requested explicitly.
//!
//! ## Wiring
//!
//! ```ignore
//! let cache = Arc::new(MenuCache::new(
//!     CacheConfig::default(),
//!     Arc::new(MemoryStore::new()),   // or any TransientStore
//!     content_store,                  // your MenuSource adapter
//! ));
//!
//! // Invalidation, from the content system's hooks:
//! cache.menu_updated(menu_id);
//! cache.content_saved();
//!
//! // Rendering, per request:
//! let service = MenuRenderService::new(cache);
//! let mut context = RenderContext::new();
//! let markup = service.render(&RenderConfig::default(), &mut context);
//! ```
//!
//! Staleness is bounded by the backend's expiry and by invalidation
//! density. Nothing here blocks, retries, or propagates errors: a
//! failed lookup always degrades to "render nothing".

pub mod cache;
pub mod domain;
pub mod render;
pub mod source;

pub use cache::{CacheConfig, CacheKey, MemoryStore, MenuCache, MenuEvent, TransientStore,
    describe_metrics};
pub use domain::error::SourceError;
pub use domain::menus::{Menu, MenuId, MenuItem, MenuLookup, assign_item_classes};
pub use render::{Fallback, ListWalker, MenuRenderService, MenuWalker, RenderConfig, RenderContext};
pub use source::{ItemQueryOptions, MenuSource};
