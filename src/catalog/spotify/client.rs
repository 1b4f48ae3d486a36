//! Spotify lookup-service HTTP client
//!
//! Two endpoints: album search by free-form query (we only ever send
//! `upc:<barcode>`) and album lookup by URI with `extras=trackdetail` for
//! full track listings. Responses are JSON when requested via Accept header.

use std::time::Duration;

use super::dto;
use crate::catalog::{CatalogError, RateLimiter};

/// Minimum spacing between requests to the lookup service
const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(150);

/// Spotify lookup-service client
pub struct SpotifyClient {
    http_client: reqwest::Client,
    base_url: String,
    limiter: RateLimiter,
}

impl SpotifyClient {
    pub fn new() -> Self {
        Self::with_base_url("https://ws.spotify.com")
    }

    /// Create a client against a custom base URL (config override, tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
            limiter: RateLimiter::new(MIN_REQUEST_INTERVAL),
        }
    }

    /// Find the single album carrying the given UPC barcode.
    ///
    /// Returns `Ok(None)` when zero or more than one album matches - an
    /// ambiguous barcode cannot anchor an identifier transfer, and that is
    /// an expected outcome, not an error. On a unique hit the album is
    /// re-fetched with track detail.
    pub async fn find_album_by_barcode(
        &self,
        barcode: &str,
    ) -> Result<Option<dto::Album>, CatalogError> {
        let query = format!("upc:{barcode}");
        let search = self.search_albums(&query).await?;

        if search.albums.len() != 1 {
            tracing::debug!(
                barcode,
                matches = search.albums.len(),
                "barcode did not resolve to exactly one album"
            );
            return Ok(None);
        }

        let Some(href) = search.albums[0].href.clone() else {
            return Ok(None);
        };

        let album = self.lookup_album(&href).await?;
        Ok(Some(album))
    }

    /// Search albums with a free-form query
    async fn search_albums(&self, query: &str) -> Result<dto::SearchResponse, CatalogError> {
        let url = format!(
            "{}/search/1/album?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        self.get_json(&url).await
    }

    /// Look up one album by URI, with full track detail
    async fn lookup_album(&self, uri: &str) -> Result<dto::Album, CatalogError> {
        let url = format!(
            "{}/lookup/1/?uri={}&extras=trackdetail",
            self.base_url,
            urlencoding::encode(uri)
        );
        let response: dto::LookupResponse = self.get_json(&url).await?;
        Ok(response.album)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, CatalogError> {
        self.limiter.wait().await;

        let response = self
            .http_client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            return Err(CatalogError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

impl Default for SpotifyClient {
    fn default() -> Self {
        Self::new()
    }
}
