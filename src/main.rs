//! isrc-sync - copy ISRCs from a streaming catalog into MusicBrainz.
//!
//! For each barcoded official release, the matching core scores the
//! MusicBrainz track listing against the streaming album sharing the same
//! barcode. The score is shown to the operator, who decides whether the
//! streaming side's ISRCs get submitted; a policy rule vetoes known-bad
//! aggregator identifiers outright.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod done_log;
pub mod error;
pub mod matching;
pub mod report;
pub mod service;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("isrc_sync=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
