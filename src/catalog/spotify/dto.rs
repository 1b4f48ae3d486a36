//! Spotify lookup-service Data Transfer Objects
//!
//! These types match EXACTLY what the lookup web service returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the spotify module - convert to domain types.
//!
//! Two endpoints are involved: album search (returns stub albums, no tracks)
//! and album lookup with `extras=trackdetail` (returns the full track list,
//! including per-track external IDs). Track lengths are fractional seconds.

use serde::{Deserialize, Serialize};

/// Album search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Matching albums (stubs - tracks are not populated by search)
    #[serde(default)]
    pub albums: Vec<Album>,
}

/// Album lookup response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupResponse {
    pub album: Album,
}

/// Album, as returned by search (stub) or lookup (with tracks)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    /// Album name
    pub name: Option<String>,
    /// Primary artist display name
    pub artist: Option<String>,
    /// Catalog URI (e.g. "spotify:album:...")
    pub href: Option<String>,
    /// Release year
    pub released: Option<String>,
    /// Tracks, present only on lookup with trackdetail
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Track with detail
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Track {
    /// Track name
    pub name: Option<String>,
    /// Catalog URI
    pub href: Option<String>,
    /// Duration in seconds (fractional)
    pub length: Option<f64>,
    /// Disc number
    pub disc_number: Option<u32>,
    /// Track number on disc
    pub track_number: Option<u32>,
    /// External identifiers (ISRCs and friends)
    #[serde(default)]
    pub external_ids: Vec<ExternalId>,
}

/// Tagged external identifier
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExternalId {
    /// Identifier kind, e.g. "isrc"
    #[serde(rename = "type")]
    pub kind: String,
    /// The identifier value
    pub id: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
