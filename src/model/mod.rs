//! Data model for tracks read from the MPD database
//!
//! Tracks carry the raw tag values from the dump plus the full path
//! reconstructed from the directory nesting.

mod track;

pub use track::{format_duration, Track, UNKNOWN_DURATION};
