//! MusicBrainz API Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! We use the /release endpoint with `inc=artist-credits+recordings+isrcs+media`
//! to get the full track listing in one request, and the /release search
//! endpoint to page through barcoded official releases.

use serde::{Deserialize, Serialize};

/// Release lookup response (single release with includes)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Release {
    /// MusicBrainz release ID
    pub id: String,
    /// Release title
    pub title: Option<String>,
    /// Product barcode (UPC/EAN) - the cross-catalog join key
    pub barcode: Option<String>,
    /// Release status (Official, Bootleg, etc.)
    pub status: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub date: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// Artist credits
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
    /// Media (discs) in this release
    #[serde(default)]
    pub media: Vec<Medium>,
}

/// Artist credit (can be multiple for collaborations)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistCredit {
    /// The artist
    pub artist: Artist,
    /// How this artist is credited (may differ from official name)
    pub name: Option<String>,
    /// Join phrase (e.g., " & ", " feat. ")
    pub joinphrase: Option<String>,
}

/// Artist info
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    /// MusicBrainz artist ID
    pub id: String,
    /// Official artist name
    pub name: String,
    /// Sort name (e.g., "Beatles, The")
    pub sort_name: Option<String>,
}

/// Medium (disc) within a release
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Medium {
    /// Position in release (disc number)
    pub position: Option<u32>,
    /// Format (CD, Vinyl, Digital, etc.)
    pub format: Option<String>,
    /// Number of tracks
    pub track_count: Option<u32>,
    /// Tracks on this medium
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Track on a medium
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    /// Track position on medium
    pub position: Option<u32>,
    /// Track number (may include disc prefix like "1-5")
    pub number: Option<String>,
    /// Track title (may differ from recording title)
    pub title: Option<String>,
    /// The recording this track presents
    pub recording: Option<Recording>,
}

/// Recording behind a track
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recording {
    /// MusicBrainz recording ID - ISRCs are submitted against this
    pub id: String,
    /// Recording title
    pub title: Option<String>,
    /// Duration in milliseconds
    pub length: Option<u64>,
    /// ISRCs already attached to this recording
    #[serde(default)]
    pub isrcs: Vec<String>,
}

/// Release search response (paged)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReleaseSearchResponse {
    /// Total number of matches
    pub count: u64,
    /// Page offset
    pub offset: u64,
    /// Releases on this page (stub records - no media)
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Test parsing a minimal release response
    #[test]
    fn test_parse_minimal_release() {
        let json = r#"{
            "id": "rel-123",
            "title": "Test Album"
        }"#;

        let release: Release = serde_json::from_str(json).expect("Should parse minimal release");

        assert_eq!(release.id, "rel-123");
        assert_eq!(release.title.as_deref(), Some("Test Album"));
        assert!(release.barcode.is_none());
        assert!(release.artist_credit.is_empty());
        assert!(release.media.is_empty());
    }

    /// Test parsing a release with credits, media and recordings
    #[test]
    fn test_parse_full_release() {
        let json = r#"{
            "id": "rel-abbey",
            "title": "Abbey Road",
            "barcode": "5099969945120",
            "status": "Official",
            "date": "1969-09-26",
            "country": "GB",
            "artist-credit": [{
                "artist": {
                    "id": "beatles-id",
                    "name": "The Beatles",
                    "sort-name": "Beatles, The"
                },
                "name": "The Beatles",
                "joinphrase": ""
            }],
            "media": [{
                "position": 1,
                "format": "CD",
                "track-count": 2,
                "tracks": [
                    {
                        "position": 1,
                        "number": "1",
                        "title": "Come Together",
                        "recording": {
                            "id": "rec-1",
                            "title": "Come Together",
                            "length": 259733,
                            "isrcs": ["GBAYE0601690"]
                        }
                    },
                    {
                        "position": 2,
                        "number": "2",
                        "title": "Something",
                        "recording": {
                            "id": "rec-2",
                            "title": "Something",
                            "length": 182293
                        }
                    }
                ]
            }]
        }"#;

        let release: Release = serde_json::from_str(json).expect("Should parse full release");

        assert_eq!(release.barcode.as_deref(), Some("5099969945120"));
        assert_eq!(release.artist_credit[0].artist.name, "The Beatles");

        let medium = &release.media[0];
        assert_eq!(medium.track_count, Some(2));

        let rec = medium.tracks[0].recording.as_ref().unwrap();
        assert_eq!(rec.id, "rec-1");
        assert_eq!(rec.length, Some(259733));
        assert_eq!(rec.isrcs, vec!["GBAYE0601690"]);

        // isrcs defaults to empty when absent
        let rec2 = medium.tracks[1].recording.as_ref().unwrap();
        assert!(rec2.isrcs.is_empty());
    }

    /// Test parsing a search page of release stubs
    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "count": 12345,
            "offset": 100,
            "releases": [
                {"id": "rel-1", "title": "First", "barcode": "111"},
                {"id": "rel-2", "title": "Second", "barcode": "222"}
            ]
        }"#;

        let page: ReleaseSearchResponse =
            serde_json::from_str(json).expect("Should parse search response");

        assert_eq!(page.count, 12345);
        assert_eq!(page.offset, 100);
        assert_eq!(page.releases.len(), 2);
        assert_eq!(page.releases[1].id, "rel-2");
    }

    /// Test parsing error response
    #[test]
    fn test_parse_error_response() {
        let json = r#"{
            "error": "Not Found",
            "help": "For usage, please see: https://musicbrainz.org/doc/MusicBrainz_API"
        }"#;

        let error: ApiError = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(error.error, "Not Found");
        assert!(error.help.is_some());
    }
}
