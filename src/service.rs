//! Reconciler service - orchestrates the cross-catalog evaluation flow.
//!
//! This is the high-level API the CLI drives:
//! 1. Fetch the canonical release by MBID
//! 2. Look up the streaming album by the release's barcode
//! 3. Normalize both records and score them against each other
//! 4. Run the streaming side's identifiers through the eligibility policy
//!
//! Submission is a separate call, made only after the operator confirms - the
//! comparison score never gates it automatically.

use crate::catalog::{
    CanonicalCatalog, StreamingCatalog, musicbrainz,
    musicbrainz::dto::Release, spotify, spotify::dto::Album,
};
use crate::error::Error;
use crate::matching::{self, Comparison, NormalizedAlbum};

/// Outcome of evaluating one release.
#[derive(Debug)]
pub enum Evaluation {
    /// Both sides were fetched and scored
    Compared(Box<ComparedRelease>),
    /// No usable streaming counterpart: the release has no barcode, or the
    /// barcode matched zero or several streaming albums. Expected; skip.
    NoComparableRecord { reason: &'static str },
}

/// Everything the CLI needs to display a comparison and drive a submission.
#[derive(Debug)]
pub struct ComparedRelease {
    /// Composite confidence plus per-track scores - advisory, for the human
    pub comparison: Comparison,
    /// Whether the policy allows submitting these identifiers at all
    pub eligible: bool,
    /// Normalized canonical-side album
    pub canonical: NormalizedAlbum,
    /// Normalized streaming-side album
    pub streaming: NormalizedAlbum,
    /// Raw canonical release (for the report and the submission keys)
    pub release: Release,
    /// Raw streaming album (for the report and the ISRC payload)
    pub album: Album,
}

/// Cross-catalog reconciler over the two catalog capabilities.
pub struct Reconciler<C, S> {
    canonical: C,
    streaming: S,
}

impl<C: CanonicalCatalog, S: StreamingCatalog> Reconciler<C, S> {
    pub fn new(canonical: C, streaming: S) -> Self {
        Self {
            canonical,
            streaming,
        }
    }

    /// Evaluate one canonical release against its streaming counterpart.
    ///
    /// Catalog failures and malformed records surface as errors so a batch
    /// driver can skip the one album and keep going; a missing or ambiguous
    /// counterpart is a defined [`Evaluation::NoComparableRecord`] outcome.
    pub async fn evaluate(&self, mbid: &str) -> Result<Evaluation, Error> {
        let release = self.canonical.lookup_release(mbid).await?;

        let Some(barcode) = release.barcode.clone().filter(|b| !b.is_empty()) else {
            tracing::debug!(mbid, "release has no barcode, nothing to join on");
            return Ok(Evaluation::NoComparableRecord {
                reason: "release has no barcode",
            });
        };

        let Some(album) = self.streaming.find_album_by_barcode(&barcode).await? else {
            tracing::debug!(mbid, barcode, "no unique streaming album for barcode");
            return Ok(Evaluation::NoComparableRecord {
                reason: "no unique streaming album for barcode",
            });
        };

        let canonical = musicbrainz::to_album(&release)?;
        let streaming = spotify::to_album(&album)?;

        let comparison = matching::compare(&canonical, &streaming);
        let eligible =
            matching::policy::is_eligible_for_submission(&spotify::isrc_lists(&album));

        tracing::info!(
            mbid,
            overall = comparison.overall,
            eligible,
            "evaluated release"
        );

        Ok(Evaluation::Compared(Box::new(ComparedRelease {
            comparison,
            eligible,
            canonical,
            streaming,
            release,
            album,
        })))
    }

    /// Page through the canonical catalog's release search.
    pub async fn search_releases(
        &self,
        query: &str,
        limit: u32,
        offset: u64,
    ) -> Result<musicbrainz::dto::ReleaseSearchResponse, Error> {
        Ok(self.canonical.search_releases(query, limit, offset).await?)
    }

    /// Submit the streaming side's ISRCs against the canonical recordings.
    ///
    /// Recording MBIDs (in media order) are zipped with the per-track ISRC
    /// lists - the same positional correspondence the comparator scored.
    /// Callers are expected to have checked eligibility and confirmed with
    /// the operator first.
    pub async fn submit_isrcs(&self, compared: &ComparedRelease) -> Result<usize, Error> {
        let recording_ids = musicbrainz::recording_ids(&compared.release)?;
        let isrcs = spotify::isrc_lists(&compared.album);

        let submission: Vec<(String, Vec<String>)> =
            recording_ids.into_iter().zip(isrcs).collect();
        let isrc_count = submission.iter().map(|(_, list)| list.len()).sum();

        self.canonical.submit_isrcs(&submission).await?;
        tracing::info!(
            release = compared.release.id,
            isrcs = isrc_count,
            "submitted ISRCs"
        );
        Ok(isrc_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::catalog::traits::mocks::{MockCanonical, MockStreaming};
    use crate::test_utils::{mb_release, sp_album};

    fn abbey_road_pair() -> Reconciler<MockCanonical, MockStreaming> {
        let release = mb_release(
            "Abbey Road",
            "The Beatles",
            Some("5099969945120"),
            &[("Come Together", 259_000), ("Something", 182_000)],
        );
        let album = sp_album(
            "Abbey Road",
            "The Beatles",
            &[
                ("Come Together", 259.0, &["GBAYE0601690"]),
                ("Something", 183.0, &["GBAYE0601691"]),
            ],
        );
        Reconciler::new(
            MockCanonical::with_release(release),
            MockStreaming::with_album(album),
        )
    }

    #[tokio::test]
    async fn test_evaluate_matching_pair() {
        let reconciler = abbey_road_pair();
        let evaluation = reconciler.evaluate("rel-test").await.unwrap();

        let Evaluation::Compared(compared) = evaluation else {
            panic!("expected a comparison");
        };
        assert!(compared.comparison.overall >= 95);
        assert!(compared.eligible);
        assert_eq!(compared.canonical.tracks.len(), 2);
        assert_eq!(compared.streaming.tracks.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_barcode_is_no_comparable_record() {
        let release = mb_release("X", "Y", None, &[("T", 1000)]);
        let reconciler = Reconciler::new(
            MockCanonical::with_release(release),
            MockStreaming::no_match(),
        );

        let evaluation = reconciler.evaluate("rel-test").await.unwrap();
        assert!(matches!(
            evaluation,
            Evaluation::NoComparableRecord { reason } if reason.contains("barcode")
        ));
    }

    #[tokio::test]
    async fn test_ambiguous_streaming_match_is_no_comparable_record() {
        let release = mb_release("X", "Y", Some("111"), &[("T", 1000)]);
        let reconciler = Reconciler::new(
            MockCanonical::with_release(release),
            MockStreaming::no_match(),
        );

        let evaluation = reconciler.evaluate("rel-test").await.unwrap();
        assert!(matches!(
            evaluation,
            Evaluation::NoComparableRecord { .. }
        ));
    }

    #[tokio::test]
    async fn test_blocked_aggregator_isrc_is_ineligible_despite_perfect_match() {
        let release = mb_release("Same", "Same", Some("111"), &[("T", 100_000)]);
        let album = sp_album("Same", "Same", &[("T", 100.0, &["TC1234567890"])]);
        let reconciler = Reconciler::new(
            MockCanonical::with_release(release),
            MockStreaming::with_album(album),
        );

        let Evaluation::Compared(compared) = reconciler.evaluate("rel-test").await.unwrap()
        else {
            panic!("expected a comparison");
        };
        assert_eq!(compared.comparison.overall, 100);
        assert!(!compared.eligible);
    }

    #[tokio::test]
    async fn test_malformed_streaming_record_surfaces_error() {
        let release = mb_release("X", "Y", Some("111"), &[("T", 1000)]);
        let mut album = sp_album("X", "Y", &[("T", 1.0, &[])]);
        album.artist = None;
        let reconciler = Reconciler::new(
            MockCanonical::with_release(release),
            MockStreaming::with_album(album),
        );

        let err = reconciler.evaluate("rel-test").await.unwrap_err();
        assert!(matches!(err, Error::Match(_)));
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates() {
        let reconciler = Reconciler::new(
            MockCanonical::with_error(CatalogError::NotFound("rel-test".to_string())),
            MockStreaming::no_match(),
        );
        let err = reconciler.evaluate("rel-test").await.unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_submission_zips_recordings_with_isrcs() {
        let reconciler = abbey_road_pair();
        let Evaluation::Compared(compared) = reconciler.evaluate("rel-test").await.unwrap()
        else {
            panic!("expected a comparison");
        };

        let count = reconciler.submit_isrcs(&compared).await.unwrap();
        assert_eq!(count, 2);

        let submitted = reconciler.canonical.submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(
            submitted[0],
            vec![
                ("rec-1".to_string(), vec!["GBAYE0601690".to_string()]),
                ("rec-2".to_string(), vec!["GBAYE0601691".to_string()]),
            ]
        );
    }
}
