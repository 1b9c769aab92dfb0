//! @acp:module "Verses"
//! @acp:summary "Verse loading, whitespace normalization, and short-line concatenation"
//! @acp:domain typing
//! @acp:layer logic
//!
//! Verses flow through this module in one direction: raw lines from a
//! [`VerseSource`] are cleaned by [`normalize_line`], blank results are
//! dropped, and [`concatenate_lines`] merges short neighbours into chunks.

pub mod concat;
pub mod normalize;
pub mod source;

pub use concat::concatenate_lines;
pub use normalize::{normalize_line, normalize_lines};
pub use source::{VerseFile, VerseSource};
