//! Submission eligibility policy.
//!
//! The comparison score is advisory - it is shown to a human who makes the
//! final call, and is never used as an automatic cutoff. What IS automatic is
//! the anti-contamination rule below: ISRCs minted by a known third-party
//! aggregator are unreliable and must never be propagated into the canonical
//! catalog, no matter how well the metadata matches.

/// ISRC issuer prefix of the blocked aggregator (TuneCore).
const BLOCKED_ISSUER_PREFIX: &str = "TC";

/// Decide whether a streaming album's identifiers may be submitted.
///
/// Takes the per-track ISRC lists extracted from the raw streaming record
/// (NOT normalized data - identifiers never survive normalization). If any
/// ISRC's first two characters match the blocked issuer prefix,
/// case-insensitively, the whole album is disqualified.
pub fn is_eligible_for_submission(isrcs_per_track: &[Vec<String>]) -> bool {
    !isrcs_per_track
        .iter()
        .flatten()
        .any(|isrc| has_blocked_prefix(isrc))
}

fn has_blocked_prefix(isrc: &str) -> bool {
    isrc.get(..BLOCKED_ISSUER_PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(BLOCKED_ISSUER_PREFIX))
}
