//! Catalog integrations - HTTP clients for the two album sources.
//!
//! # Architecture
//!
//! Each catalog follows the same layering:
//! - **API DTOs** (`musicbrainz/dto.rs`, `spotify/dto.rs`) - Exact API response shapes
//! - **Adapters** - the ONLY place DTOs become [`crate::matching`] domain types
//! - **Clients** - reqwest-based HTTP clients, one rate limiter each
//!
//! This decoupling means API changes don't ripple through the matching core,
//! and the two wire formats can be contract-tested independently.
//!
//! The [`traits`] module defines the capability seams ([`CanonicalCatalog`],
//! [`StreamingCatalog`]) the reconciler is written against, with mock
//! implementations for tests.

pub mod musicbrainz;
pub mod rate_limit;
pub mod spotify;
pub mod traits;

pub use rate_limit::RateLimiter;
pub use traits::{CanonicalCatalog, StreamingCatalog};

/// Errors from talking to either catalog.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("release not found: {0}")]
    NotFound(String),

    #[error("rate limited - try again later")]
    RateLimited,

    #[error("submission rejected: {0}")]
    Auth(String),
}
