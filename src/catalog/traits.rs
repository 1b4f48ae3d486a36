//! Trait definitions for the two catalog capabilities.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! substitute mock implementations - the reconciler is written against the
//! traits and never names a concrete client.

use async_trait::async_trait;

use super::CatalogError;
use super::{musicbrainz, spotify};

/// The canonical catalog: release lookup/search plus identifier submission.
#[async_trait]
pub trait CanonicalCatalog: Send + Sync {
    /// Fetch a release by its stable identifier, with artist credits,
    /// recordings and media included.
    async fn lookup_release(&self, mbid: &str) -> Result<musicbrainz::dto::Release, CatalogError>;

    /// Page through a full-text release search.
    async fn search_releases(
        &self,
        query: &str,
        limit: u32,
        offset: u64,
    ) -> Result<musicbrainz::dto::ReleaseSearchResponse, CatalogError>;

    /// Upsert ISRCs keyed by recording MBID.
    async fn submit_isrcs(&self, submission: &[(String, Vec<String>)])
    -> Result<(), CatalogError>;
}

/// The streaming catalog: at most one album per cross-catalog barcode.
#[async_trait]
pub trait StreamingCatalog: Send + Sync {
    /// Returns `Ok(None)` when zero or ambiguous matches exist.
    async fn find_album_by_barcode(
        &self,
        barcode: &str,
    ) -> Result<Option<spotify::dto::Album>, CatalogError>;
}

// Implement traits for real clients

#[async_trait]
impl CanonicalCatalog for musicbrainz::MusicBrainzClient {
    async fn lookup_release(&self, mbid: &str) -> Result<musicbrainz::dto::Release, CatalogError> {
        self.lookup_release(mbid).await
    }

    async fn search_releases(
        &self,
        query: &str,
        limit: u32,
        offset: u64,
    ) -> Result<musicbrainz::dto::ReleaseSearchResponse, CatalogError> {
        self.search_releases(query, limit, offset).await
    }

    async fn submit_isrcs(
        &self,
        submission: &[(String, Vec<String>)],
    ) -> Result<(), CatalogError> {
        self.submit_isrcs(submission).await
    }
}

#[async_trait]
impl StreamingCatalog for spotify::SpotifyClient {
    async fn find_album_by_barcode(
        &self,
        barcode: &str,
    ) -> Result<Option<spotify::dto::Album>, CatalogError> {
        self.find_album_by_barcode(barcode).await
    }
}
