//! Command-line interface for isrc-sync.
//!
//! Two subcommands: an interactive batch `run` over barcoded official
//! releases, and a read-only one-shot `evaluate` for a single release.

mod commands;

pub use commands::{Cli, Commands, run_command};
