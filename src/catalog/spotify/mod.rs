//! Spotify lookup-service integration
//!
//! The streaming catalog side: UPC barcode search plus album lookup with
//! track detail (names, lengths, external IDs). Albums are only usable when
//! the barcode search returns exactly one match - zero or many is an
//! expected non-match, not an error.

pub mod dto;
mod adapter;
mod client;

pub use adapter::{isrc_lists, to_album};
pub use client::SpotifyClient;
