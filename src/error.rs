//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while CLI/main
//! uses `anyhow` for convenient propagation.
//!
//! The taxonomy matters for batch behavior: a [`crate::matching::MatchError`]
//! or [`crate::catalog::CatalogError`] is fatal to one album, never to the
//! run - the batch driver logs it and moves on. A missing or ambiguous
//! cross-catalog match is not an error at all (see
//! [`crate::service::Evaluation::NoComparableRecord`]).

use std::path::PathBuf;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog client error
    #[error("catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    /// Malformed record from one of the catalogs
    #[error("match error: {0}")]
    Match(#[from] crate::matching::MatchError),

    /// Done-log read/write error
    #[error("done log error for {path}: {message}")]
    DoneLog { path: PathBuf, message: String },
}

impl Error {
    /// Create a done-log error.
    pub fn done_log(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DoneLog {
            path: path.into(),
            message: message.into(),
        }
    }
}
