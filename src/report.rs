//! Side-by-side HTML comparison page.
//!
//! Renders the two raw records - not the normalized albums - so the operator
//! sees exactly what each catalog claims, medium/disc numbering included,
//! before confirming a submission.

use std::path::Path;

use crate::catalog::{musicbrainz::dto::Release, spotify::dto::Album};
use crate::error::Error;

/// Write the comparison page for one release pair.
pub fn write_report(path: &Path, release: &Release, album: &Album) -> Result<(), Error> {
    std::fs::write(path, render(release, album))?;
    tracing::debug!(path = %path.display(), "wrote comparison report");
    Ok(())
}

fn render(release: &Release, album: &Album) -> String {
    let mut html = String::from(
        r#"<html><head><meta charset="utf-8"></head><body><div style="float:left;width:50%">"#,
    );

    // Canonical side: medium-position rows, lengths arrive in milliseconds
    let mb_artist: String = release
        .artist_credit
        .iter()
        .map(|c| {
            let name = c.name.as_deref().unwrap_or(&c.artist.name);
            format!("{}{}", name, c.joinphrase.as_deref().unwrap_or(""))
        })
        .collect();
    push_header(
        &mut html,
        release.title.as_deref(),
        if mb_artist.is_empty() {
            None
        } else {
            Some(mb_artist.as_str())
        },
    );
    for medium in &release.media {
        let medium_no = medium.position.unwrap_or(0);
        for track in &medium.tracks {
            let title = track
                .recording
                .as_ref()
                .and_then(|r| r.title.as_deref())
                .or(track.title.as_deref())
                .unwrap_or("?");
            let seconds = track
                .recording
                .as_ref()
                .and_then(|r| r.length)
                .map(|ms| ms as f64 / 1000.0)
                .unwrap_or(0.0);
            html.push_str(&format!(
                "<div>{}-{}: {} ({})</div>",
                medium_no,
                track.position.unwrap_or(0),
                escape(title),
                format_minsec(seconds)
            ));
        }
    }

    html.push_str(r#"</div><div style="float:right;width:50%">"#);

    // Streaming side: disc-track rows, lengths already in seconds
    push_header(&mut html, album.name.as_deref(), album.artist.as_deref());
    for track in &album.tracks {
        html.push_str(&format!(
            "<div>{}-{}: {} ({})</div>",
            track.disc_number.unwrap_or(0),
            track.track_number.unwrap_or(0),
            escape(track.name.as_deref().unwrap_or("?")),
            format_minsec(track.length.unwrap_or(0.0))
        ));
    }

    html.push_str(&format!(
        r#"</div><div style="clear:both;font-size:small">generated {}</div></body></html>"#,
        chrono::Utc::now().to_rfc3339()
    ));
    html
}

fn push_header(html: &mut String, title: Option<&str>, artist: Option<&str>) {
    html.push_str(&format!(
        r#"<div style="font-weight:bold">{}</div>"#,
        escape(title.unwrap_or("?"))
    ));
    html.push_str(&format!(
        r#"<div style="font-weight:bold">{}</div>"#,
        escape(artist.unwrap_or("?"))
    ));
}

/// Format a duration as `m:ss.mmm`, seconds zero-padded to width 6.
fn format_minsec(seconds: f64) -> String {
    let minutes = (seconds / 60.0) as u64;
    let rem = seconds - minutes as f64 * 60.0;
    format!("{minutes}:{rem:06.3}")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
