//! Adapter layer: Convert MusicBrainz DTOs to domain models
//!
//! This is the ONLY place where MusicBrainz DTO types become matching-core
//! types. If MusicBrainz changes their response format, only this file and
//! dto.rs need to change.

use super::dto;
use crate::matching::{MatchError, NormalizedAlbum, NormalizedTrack};

const SOURCE: &str = "musicbrainz";

/// Project a release into the canonical album shape.
///
/// Tracks are flattened across media in source order (medium position, then
/// track position as delivered) - no deduplication, no reordering. Recording
/// lengths arrive in milliseconds and are converted to seconds exactly.
///
/// Missing title, artist credits, an empty track list, or a track without a
/// recording length make the record malformed: that is surfaced, never
/// defaulted.
pub fn to_album(release: &dto::Release) -> Result<NormalizedAlbum, MatchError> {
    let title = release
        .title
        .clone()
        .ok_or(MatchError::malformed(SOURCE, "title"))?;

    let artist = build_artist_string(&release.artist_credit)
        .ok_or(MatchError::malformed(SOURCE, "artist-credit"))?;

    let mut tracks = Vec::new();
    for medium in &release.media {
        for track in &medium.tracks {
            let recording = track
                .recording
                .as_ref()
                .ok_or(MatchError::malformed(SOURCE, "recording"))?;
            let title = recording
                .title
                .clone()
                .ok_or(MatchError::malformed(SOURCE, "recording title"))?;
            let length_ms = recording
                .length
                .ok_or(MatchError::malformed(SOURCE, "recording length"))?;
            tracks.push(NormalizedTrack {
                title,
                length_seconds: length_ms as f64 / 1000.0,
            });
        }
    }

    if tracks.is_empty() {
        return Err(MatchError::malformed(SOURCE, "tracks"));
    }

    Ok(NormalizedAlbum {
        title,
        artist,
        tracks,
    })
}

/// Recording MBIDs in track order, flattened across media.
///
/// ISRC submissions are keyed by these; the order must line up with the
/// streaming side's track order, which is the same positional assumption the
/// comparator makes.
pub fn recording_ids(release: &dto::Release) -> Result<Vec<String>, MatchError> {
    release
        .media
        .iter()
        .flat_map(|m| &m.tracks)
        .map(|t| {
            t.recording
                .as_ref()
                .map(|r| r.id.clone())
                .ok_or(MatchError::malformed(SOURCE, "recording"))
        })
        .collect()
}

/// Build a combined artist string from artist credits
fn build_artist_string(credits: &[dto::ArtistCredit]) -> Option<String> {
    if credits.is_empty() {
        return None;
    }

    let mut result = String::new();
    for credit in credits {
        // Use credited name if available, otherwise official name
        let name = credit.name.as_ref().unwrap_or(&credit.artist.name);
        result.push_str(name);

        if let Some(ref join) = credit.joinphrase {
            result.push_str(join);
        }
    }

    Some(result)
}
