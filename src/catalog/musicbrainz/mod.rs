//! MusicBrainz API integration
//!
//! The canonical catalog side: release lookup (with artist credits,
//! recordings, ISRCs and media), release search for the batch loop, and
//! ISRC submission.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod adapter;
mod client;

pub use adapter::{recording_ids, to_album};
pub use client::{Credentials, MusicBrainzClient};
