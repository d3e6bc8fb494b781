//! mpd-picker - pick MPD tracks with fzf
//!
//! Reads MPD's compressed tag database, lays every song out as a
//! fixed-width line with its path hidden at the end, and lets fzf do the
//! searching. Selected lines come back through the `_play` and `_queue`
//! sub-commands, which queue and play the track with mpc.

pub mod error;
pub mod external;
pub mod model;
pub mod mpd;
pub mod picker;

pub use picker::config::PickerConfig;
pub use picker::pipeline::PickerPipeline;
