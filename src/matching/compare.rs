//! Album comparison scoring.
//!
//! Produces a composite 0-100 confidence that two normalized albums describe
//! the same release. The weighting is deliberate legacy behavior and must not
//! be "improved": per-track agreement dominates (0.70) because album titles
//! and artist credits often differ cosmetically between catalogs
//! (transliteration, "feat." credits), while track count and per-track timing
//! are strong release-identity signals.

use super::domain::{Comparison, NormalizedAlbum};
use super::similarity::similarity;

/// Maximum per-track duration difference, in seconds, that earns any credit.
/// A hard cliff, not a smooth decay.
const DURATION_TOLERANCE_SECS: f64 = 15.0;

/// Compare two normalized albums.
///
/// A track-count mismatch is conclusive: overall score 0, no partial credit.
/// For equal-length inputs this never fails. All sub-scores are truncated
/// when weighted, matching the original integer arithmetic.
pub fn compare(a: &NormalizedAlbum, b: &NormalizedAlbum) -> Comparison {
    if a.tracks.len() != b.tracks.len() {
        return Comparison::mismatch();
    }

    let title_score = similarity(&a.title, &b.title);
    let artist_score = similarity(&a.artist, &b.artist);

    let track_scores: Vec<u8> = a
        .tracks
        .iter()
        .zip(&b.tracks)
        .map(|(ta, tb)| {
            let title = similarity(&ta.title, &tb.title);
            let time = time_score(ta.length_seconds, tb.length_seconds);
            // Integer division is exactly trunc(x * 0.5) for scores in [0,100]
            title / 2 + time / 2
        })
        .collect();

    let track_sum: u32 = track_scores.iter().map(|&s| u32::from(s)).sum();
    let track_component = if track_scores.is_empty() {
        0
    } else {
        (f64::from(track_sum) * 0.70 / track_scores.len() as f64) as u8
    };

    let overall = (f64::from(title_score) * 0.15) as u8
        + (f64::from(artist_score) * 0.15) as u8
        + track_component;

    Comparison {
        overall,
        track_scores,
    }
}

/// Score how closely two track durations agree (0-100).
///
/// Differences beyond [`DURATION_TOLERANCE_SECS`] score 0; within the window
/// the score falls off linearly and is truncated to an integer.
fn time_score(a_secs: f64, b_secs: f64) -> u8 {
    let diff = (a_secs - b_secs).abs();
    if diff > DURATION_TOLERANCE_SECS {
        0
    } else {
        ((DURATION_TOLERANCE_SECS - diff) / DURATION_TOLERANCE_SECS * 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::domain::NormalizedTrack;

    fn album(title: &str, artist: &str, tracks: &[(&str, f64)]) -> NormalizedAlbum {
        NormalizedAlbum {
            title: title.to_string(),
            artist: artist.to_string(),
            tracks: tracks
                .iter()
                .map(|(t, len)| NormalizedTrack {
                    title: t.to_string(),
                    length_seconds: *len,
                })
                .collect(),
        }
    }

    #[test]
    fn test_track_count_mismatch_scores_zero() {
        let a = album("X", "Y", &[("One", 100.0), ("Two", 100.0)]);
        let b = album("X", "Y", &[("One", 100.0)]);
        let cmp = compare(&a, &b);
        assert_eq!(cmp.overall, 0);
        assert!(cmp.track_scores.is_empty());
    }

    #[test]
    fn test_identical_albums_score_100() {
        let a = album(
            "Abbey Road",
            "The Beatles",
            &[("Come Together", 259.0), ("Something", 182.0)],
        );
        let cmp = compare(&a, &a.clone());
        assert_eq!(cmp.overall, 100);
        assert_eq!(cmp.track_scores, vec![100, 100]);
    }

    #[test]
    fn test_fully_disjoint_albums_score_zero() {
        let a = album("aaaa", "bbbb", &[("cccc", 0.0)]);
        let b = album("xxxx", "yyyy", &[("zzzz", 100.0)]);
        let cmp = compare(&a, &b);
        assert_eq!(cmp.overall, 0);
        assert_eq!(cmp.track_scores, vec![0]);
    }

    #[test]
    fn test_duration_cliff_at_exactly_15_seconds() {
        // 15.0s difference sits on the cliff edge: (15-15)/15*100 = 0
        assert_eq!(time_score(200.0, 215.0), 0);
        // Just past the cliff is also 0
        assert_eq!(time_score(200.0, 215.1), 0);
        // Identical durations score full marks
        assert_eq!(time_score(200.0, 200.0), 100);
    }

    #[test]
    fn test_one_second_diff_truncates_to_93() {
        // (15 - 1) / 15 * 100 = 93.33.. -> 93
        assert_eq!(time_score(182.0, 183.0), 93);
    }

    #[test]
    fn test_abbey_road_scenario() {
        let a = album(
            "Abbey Road",
            "The Beatles",
            &[("Come Together", 259.0), ("Something", 182.0)],
        );
        let b = album(
            "Abbey Road",
            "The Beatles",
            &[("Come Together", 259.0), ("Something", 183.0)],
        );
        let cmp = compare(&a, &b);
        // Track 2: title 100/2 + time 93/2 = 50 + 46 = 96
        assert_eq!(cmp.track_scores, vec![100, 96]);
        assert!(cmp.overall >= 95, "got {}", cmp.overall);
    }

    #[test]
    fn test_subscore_truncation_preserved() {
        // Odd title score: 93/2 must truncate to 46, not round to 47
        let a = album("X", "Y", &[("Something", 183.0)]);
        let b = album("X", "Y", &[("Something", 182.0)]);
        let cmp = compare(&a, &b);
        assert_eq!(cmp.track_scores, vec![50 + 46]);
    }

    #[test]
    fn test_weights_sum_to_100() {
        // title 100 -> 15, artist 100 -> 15, tracks all 100 -> 70
        let a = album("Same", "Same", &[("T1", 60.0), ("T2", 61.0), ("T3", 62.0)]);
        let cmp = compare(&a, &a.clone());
        assert_eq!(cmp.overall, 100);
    }

    #[test]
    fn test_empty_track_lists_compare_on_header_only() {
        // Degenerate but well-formed: equal (zero) counts, no track component
        let a = album("Same", "Same", &[]);
        let cmp = compare(&a, &a.clone());
        assert_eq!(cmp.overall, 30);
        assert!(cmp.track_scores.is_empty());
    }
}
