//! Adapter layer: Convert Spotify DTOs to domain models
//!
//! This is the ONLY place where Spotify DTO types become matching-core types.

use super::dto;
use crate::matching::{MatchError, NormalizedAlbum, NormalizedTrack};

const SOURCE: &str = "spotify";

/// Project a looked-up album into the canonical album shape.
///
/// Track lengths already arrive in seconds, so no unit conversion happens
/// here. Source track order is preserved. Missing name, artist or tracks
/// make the record malformed.
pub fn to_album(album: &dto::Album) -> Result<NormalizedAlbum, MatchError> {
    let title = album
        .name
        .clone()
        .ok_or(MatchError::malformed(SOURCE, "name"))?;
    let artist = album
        .artist
        .clone()
        .ok_or(MatchError::malformed(SOURCE, "artist"))?;

    if album.tracks.is_empty() {
        return Err(MatchError::malformed(SOURCE, "tracks"));
    }

    let tracks = album
        .tracks
        .iter()
        .map(|track| {
            let title = track
                .name
                .clone()
                .ok_or(MatchError::malformed(SOURCE, "track name"))?;
            let length_seconds = track
                .length
                .ok_or(MatchError::malformed(SOURCE, "track length"))?;
            Ok(NormalizedTrack {
                title,
                length_seconds,
            })
        })
        .collect::<Result<Vec<_>, MatchError>>()?;

    Ok(NormalizedAlbum {
        title,
        artist,
        tracks,
    })
}

/// Per-track ISRC lists from the raw album, uppercased, in track order.
///
/// This feeds both the eligibility policy and the submission payload, so it
/// works on the raw record - identifiers are deliberately absent from the
/// normalized shape. Tracks without any ISRC yield an empty list, keeping the
/// result parallel to the track list.
pub fn isrc_lists(album: &dto::Album) -> Vec<Vec<String>> {
    album
        .tracks
        .iter()
        .map(|track| {
            track
                .external_ids
                .iter()
                .filter(|ext| ext.kind == "isrc")
                .map(|ext| ext.id.to_uppercase())
                .collect()
        })
        .collect()
}
