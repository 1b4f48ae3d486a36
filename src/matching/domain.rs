//! Internal domain models for album comparison.
//!
//! These types are OUR types - they don't change when external APIs change.
//! Both catalog responses get converted into [`NormalizedAlbum`] via adapters,
//! so the comparator only ever sees one shape.

/// The canonical in-memory album shape, independent of source catalog.
///
/// Track order is positionally significant: index i on one side is assumed
/// to correspond to index i on the other. The comparator only verifies the
/// counts match.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAlbum {
    /// Release title
    pub title: String,
    /// Artist display string (credited names joined with their join phrases)
    pub artist: String,
    /// Tracks in source order, flattened across media
    pub tracks: Vec<NormalizedTrack>,
}

/// One track of a normalized album.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTrack {
    /// Track title
    pub title: String,
    /// Duration in seconds (non-negative)
    pub length_seconds: f64,
}

/// Result of comparing two normalized albums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Composite confidence that both records describe the same release (0-100)
    pub overall: u8,
    /// Per-track scores, parallel to the track lists (0-100 each).
    /// Empty when the track counts differ.
    pub track_scores: Vec<u8>,
}

impl Comparison {
    /// The defined outcome for a track-count mismatch: conclusive non-match.
    pub fn mismatch() -> Self {
        Self {
            overall: 0,
            track_scores: Vec::new(),
        }
    }
}

/// Errors produced while projecting a raw catalog record into a
/// [`NormalizedAlbum`].
///
/// A malformed record is fatal to that single comparison, not to a batch run.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MatchError {
    /// A fetched record is missing a field the comparison cannot do without
    #[error("malformed {source_kind} record: missing {field}")]
    MalformedRecord {
        /// Which catalog the record came from ("musicbrainz" or "spotify")
        source_kind: &'static str,
        /// The missing required field
        field: &'static str,
    },
}

impl MatchError {
    pub fn malformed(source_kind: &'static str, field: &'static str) -> Self {
        Self::MalformedRecord { source_kind, field }
    }
}
