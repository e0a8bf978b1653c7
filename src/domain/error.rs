use thiserror::Error;

/// Failure reported by the content-store collaborator.
///
/// The cache manager never propagates these: every error degrades to
/// "menu not found" and is logged at warn level.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("content store error: {0}")]
    Backend(String),
    #[error("menu not found")]
    NotFound,
}

impl SourceError {
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}
