//! Shared error types for the services crate.

use thiserror::Error;

/// Errors raised while turning deck bytes into cards.
///
/// `DeckLoader::load` swallows these into an empty deck; `try_load` and
/// `load_resource` hand them to the caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckLoadError {
    #[error("deck document is empty")]
    Empty,
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// Errors emitted by `CardSession`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no cards available for session")]
    Empty,
}
