//! Batch reconciliation and one-shot evaluation commands.

use std::path::Path;

use tokio::runtime::Runtime;

use crate::catalog::musicbrainz::{Credentials, MusicBrainzClient};
use crate::catalog::spotify::SpotifyClient;
use crate::config::Config;
use crate::done_log::{self, DoneLog};
use crate::report;
use crate::service::{ComparedRelease, Evaluation, Reconciler};

use super::confirm;

/// Search query for the batch loop: every official album with any barcode.
const BATCH_QUERY: &str = "barcode:[0 TO 99999999999999999] AND status:official AND type:album";

type CliReconciler = Reconciler<MusicBrainzClient, SpotifyClient>;

fn build_reconciler(config: &Config, credentials: Option<Credentials>) -> CliReconciler {
    let canonical =
        MusicBrainzClient::with_base_url(&config.catalogs.musicbrainz_url, credentials);
    let streaming = SpotifyClient::with_base_url(&config.catalogs.spotify_url);
    Reconciler::new(canonical, streaming)
}

/// Evaluate a single release without submitting anything
pub fn cmd_evaluate(
    rt: &Runtime,
    config: &Config,
    mbid: &str,
    report_path: Option<&Path>,
) -> anyhow::Result<()> {
    let reconciler = build_reconciler(config, None);

    rt.block_on(async {
        match reconciler.evaluate(mbid).await? {
            Evaluation::NoComparableRecord { reason } => {
                println!("✗ No comparable streaming record: {reason}");
            }
            Evaluation::Compared(compared) => {
                print_summary(mbid, &compared);
                println!();
                for (i, score) in compared.comparison.track_scores.iter().enumerate() {
                    println!(
                        "  {:2}. {:3}%  {}",
                        i + 1,
                        score,
                        compared.canonical.tracks[i].title
                    );
                }
                write_report_if_requested(report_path, config, &compared)?;
            }
        }
        anyhow::Ok(())
    })?;
    Ok(())
}

/// Walk barcoded official releases, prompting before every submission
pub fn cmd_run(
    rt: &Runtime,
    config: &Config,
    username: Option<&str>,
    password: Option<&str>,
    limit: Option<u64>,
    report_path: Option<&Path>,
) -> anyhow::Result<()> {
    let username = username
        .map(String::from)
        .or_else(|| config.credentials.musicbrainz_username.clone());
    let password = password
        .map(String::from)
        .or_else(|| config.credentials.musicbrainz_password.clone());
    let credentials = match (username, password) {
        (Some(username), Some(password)) => Credentials { username, password },
        _ => {
            eprintln!("Error: MusicBrainz credentials required for submission.");
            eprintln!("Use --username/--password, the MUSICBRAINZ_USERNAME and");
            eprintln!("MUSICBRAINZ_PASSWORD env vars, or the [credentials] config section.");
            std::process::exit(1);
        }
    };

    let done_path = config
        .sync
        .done_log
        .clone()
        .or_else(done_log::default_path)
        .ok_or_else(|| anyhow::anyhow!("could not determine a done-log location"))?;
    let mut done = DoneLog::open(&done_path)?;
    if !done.is_empty() {
        println!("Resuming: {} release(s) already processed", done.len());
    }

    let reconciler = build_reconciler(config, Some(credentials));

    rt.block_on(async {
        let mut offset = 0u64;
        let mut evaluated = 0u64;

        'pages: loop {
            let page = reconciler
                .search_releases(BATCH_QUERY, config.sync.page_size, offset)
                .await?;
            if page.releases.is_empty() {
                break;
            }
            offset += page.releases.len() as u64;

            for stub in &page.releases {
                if done.contains(&stub.id) {
                    continue;
                }
                println!("MBID: {}", stub.id);

                // One bad album must not kill the batch
                if let Err(e) = process_release(&reconciler, config, &stub.id, report_path).await
                {
                    tracing::warn!(mbid = stub.id, error = %e, "skipping release");
                    eprintln!("  Error: {e} - skipping");
                }

                done.append(&stub.id)?;
                evaluated += 1;
                if limit.is_some_and(|n| evaluated >= n) {
                    break 'pages;
                }
            }
        }

        println!();
        println!("Done! {evaluated} release(s) evaluated this run");
        anyhow::Ok(())
    })?;
    Ok(())
}

/// Evaluate one release and, when eligible and confirmed, submit its ISRCs.
async fn process_release(
    reconciler: &CliReconciler,
    config: &Config,
    mbid: &str,
    report_path: Option<&Path>,
) -> anyhow::Result<()> {
    let compared = match reconciler.evaluate(mbid).await? {
        Evaluation::NoComparableRecord { reason } => {
            println!("  ✗ {reason}");
            return Ok(());
        }
        Evaluation::Compared(compared) => compared,
    };

    if !compared.eligible {
        println!("  ✗ Aggregator-minted ISRCs detected - not eligible for submission");
        return Ok(());
    }

    print_summary(mbid, &compared);
    write_report_if_requested(report_path, config, &compared)?;

    if confirm("Add ISRCs?") {
        let count = reconciler.submit_isrcs(&compared).await?;
        println!("  ✓ Submitted {count} ISRC(s)");
    }
    Ok(())
}

fn print_summary(mbid: &str, compared: &ComparedRelease) {
    println!(
        "{} by {}",
        compared.canonical.title, compared.canonical.artist
    );
    println!("Similarity: {}%", compared.comparison.overall);
    println!("https://musicbrainz.org/release/{mbid}");
    if let Some(album_id) = compared
        .album
        .href
        .as_deref()
        .and_then(|href| href.rsplit(':').next())
    {
        println!("https://open.spotify.com/album/{album_id}");
    }
}

fn write_report_if_requested(
    report_path: Option<&Path>,
    config: &Config,
    compared: &ComparedRelease,
) -> anyhow::Result<()> {
    let path = report_path.unwrap_or(&config.sync.report_path);
    report::write_report(path, &compared.release, &compared.album)?;
    println!("Comparison page: {}", path.display());
    Ok(())
}
