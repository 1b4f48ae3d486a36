//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `sync`: batch reconciliation loop and one-shot evaluation

mod sync;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

pub use sync::{cmd_evaluate, cmd_run};

/// isrc-sync CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Walk barcoded official releases, comparing each against the streaming
    /// catalog and prompting before every ISRC submission
    Run {
        /// MusicBrainz username (or set MUSICBRAINZ_USERNAME env var)
        #[arg(short, long, env = "MUSICBRAINZ_USERNAME")]
        username: Option<String>,
        /// MusicBrainz password (or set MUSICBRAINZ_PASSWORD env var)
        #[arg(short, long, env = "MUSICBRAINZ_PASSWORD")]
        password: Option<String>,
        /// Stop after evaluating this many releases
        #[arg(long)]
        limit: Option<u64>,
        /// Where to write the side-by-side comparison page
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Evaluate a single release without submitting anything
    Evaluate {
        /// MusicBrainz release ID
        mbid: String,
        /// Write the side-by-side comparison page here
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let config = crate::config::load();

    // Seed a config file on first run so there is something to edit
    if crate::config::config_path().is_some_and(|p| !p.exists()) {
        if let Err(e) = crate::config::save(&config) {
            tracing::warn!("Could not write default config: {e}");
        }
    }

    match &cli.command {
        Commands::Run {
            username,
            password,
            limit,
            report,
        } => cmd_run(
            &rt,
            &config,
            username.as_deref(),
            password.as_deref(),
            *limit,
            report.as_deref(),
        ),
        Commands::Evaluate { mbid, report } => {
            cmd_evaluate(&rt, &config, mbid, report.as_deref())
        }
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Ask a yes/no question on the terminal. Anything but "y" is a no.
pub(crate) fn confirm(prompt: &str) -> bool {
    use std::io::{BufRead, Write};

    print!("{prompt} [y/n] ");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    line.trim().eq_ignore_ascii_case("y")
}
