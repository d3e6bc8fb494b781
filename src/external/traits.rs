//! Interfaces to the external processes the picker drives

use anyhow::Result;

/// How the finder process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderExit {
    /// Normal exit
    Completed,

    /// The user interrupted the finder (Esc / Ctrl-C)
    Cancelled,
}

/// Interactive line selector fed with formatted track lines
pub trait Finder {
    /// Stream `lines` to the finder and wait until it exits
    ///
    /// Cancellation by the user is reported as [`FinderExit::Cancelled`],
    /// any other abnormal exit as an error.
    fn run<I>(&self, lines: I) -> Result<FinderExit>
    where
        I: Iterator<Item = String>;
}

/// Playback control for the active MPD session
pub trait Playback {
    /// File paths in the current queue, in queue order
    fn queue(&self) -> Result<Vec<String>>;

    /// Append a file to the queue
    fn add(&self, path: &str) -> Result<()>;

    /// Start playing the queue entry at a 1-based position
    fn play(&self, position: usize) -> Result<()>;
}
