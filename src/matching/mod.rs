//! Album matching core.
//!
//! Everything in this module is pure computation: no I/O, no shared state.
//! The pipeline is: raw catalog records get projected into [`NormalizedAlbum`]
//! by the per-catalog adapters, [`compare`] scores two normalized albums
//! against each other, and [`policy`] decides whether the streaming side's
//! identifiers are trustworthy enough to submit at all.

pub mod compare;
pub mod domain;
pub mod policy;
pub mod similarity;

pub use compare::compare;
pub use domain::{Comparison, MatchError, NormalizedAlbum, NormalizedTrack};
pub use similarity::similarity;
