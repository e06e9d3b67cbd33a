// crates/placesearch-core/src/error.rs

//! Errors raised while loading or snapshotting a catalog.
//!
//! The query path never returns these: searching is total over its input
//! domain and degrades to empty results instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaceError {
    /// The dataset file could not be located or opened.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source catalog is not valid JSON.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A binary snapshot failed to encode or decode.
    #[error("snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Well-formed input with an unexpected shape (e.g. a JSON object where
    /// an array of places is expected), or a disabled feature.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, PlaceError>;
