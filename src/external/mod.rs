//! External processes the picker depends on
//!
//! fzf presents the lines, mpc controls playback and stty reports the
//! terminal width. The [`Finder`] and [`Playback`] traits let the core run
//! against stand-ins.

mod fzf;
mod mpc;
mod notify;
mod terminal;
mod traits;

pub use fzf::{exit_outcome, write_lines, FzfFinder, StdoutFinder};
pub use mpc::MpcPlayback;
pub use notify::notify_failure;
pub use terminal::{parse_stty_size, terminal_columns};
pub use traits::{Finder, FinderExit, Playback};
