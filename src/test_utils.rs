//! Test utilities and fixtures for isrc-sync tests.
//!
//! Builders for the two catalogs' raw record shapes, so service and CLI
//! tests don't repeat DTO boilerplate.

use crate::catalog::musicbrainz::dto as mb;
use crate::catalog::spotify::dto as sp;

/// A MusicBrainz release with one medium, a barcode and well-formed
/// recordings. Lengths are given in milliseconds.
pub fn mb_release(
    title: &str,
    artist: &str,
    barcode: Option<&str>,
    tracks: &[(&str, u64)],
) -> mb::Release {
    mb::Release {
        id: "rel-test".to_string(),
        title: Some(title.to_string()),
        barcode: barcode.map(String::from),
        status: Some("Official".to_string()),
        date: None,
        country: None,
        artist_credit: vec![mb::ArtistCredit {
            artist: mb::Artist {
                id: "artist-test".to_string(),
                name: artist.to_string(),
                sort_name: None,
            },
            name: Some(artist.to_string()),
            joinphrase: None,
        }],
        media: vec![mb::Medium {
            position: Some(1),
            format: Some("CD".to_string()),
            track_count: Some(tracks.len() as u32),
            tracks: tracks
                .iter()
                .enumerate()
                .map(|(i, (track_title, length_ms))| mb::Track {
                    position: Some(i as u32 + 1),
                    number: Some((i + 1).to_string()),
                    title: Some(track_title.to_string()),
                    recording: Some(mb::Recording {
                        id: format!("rec-{}", i + 1),
                        title: Some(track_title.to_string()),
                        length: Some(*length_ms),
                        isrcs: vec![],
                    }),
                })
                .collect(),
        }],
    }
}

/// A Spotify album with track detail. Lengths are in seconds; each track
/// carries the given ISRCs as tagged external IDs.
pub fn sp_album(
    name: &str,
    artist: &str,
    tracks: &[(&str, f64, &[&str])],
) -> sp::Album {
    sp::Album {
        name: Some(name.to_string()),
        artist: Some(artist.to_string()),
        href: Some("spotify:album:test".to_string()),
        released: None,
        tracks: tracks
            .iter()
            .enumerate()
            .map(|(i, (track_name, length, isrcs))| sp::Track {
                name: Some(track_name.to_string()),
                href: Some(format!("spotify:track:test-{}", i + 1)),
                length: Some(*length),
                disc_number: Some(1),
                track_number: Some(i as u32 + 1),
                external_ids: isrcs
                    .iter()
                    .map(|id| sp::ExternalId {
                        kind: "isrc".to_string(),
                        id: id.to_string(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
