//! Menu rendering: configuration, per-request context, walker contract,
//! and the orchestrating service.

mod config;
mod context;
mod service;
mod walker;

pub use config::{Fallback, RenderConfig};
pub use context::RenderContext;
pub use service::MenuRenderService;
pub use walker::{ListWalker, MenuWalker};
