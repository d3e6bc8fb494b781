//! Failure notifications for when fzf hides the terminal
//!
//! Selection runs inside fzf's `execute-silent`, so stderr is not visible.
//! Errors are shown in the tmux status line when running under tmux, and
//! as a desktop notification otherwise.

use std::process::{Command, Stdio};

const SUMMARY: &str = "mpd-picker";

/// Show `message` to the user, best effort
pub fn notify_failure(message: &str) {
    if std::env::var_os("TMUX").is_some() && tmux_display(message) {
        return;
    }
    desktop(message);
}

fn tmux_display(message: &str) -> bool {
    Command::new("tmux")
        .arg("display")
        .arg(message)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(feature = "notify")]
fn desktop(message: &str) {
    if let Err(e) = notify_rust::Notification::new()
        .summary(SUMMARY)
        .body(message)
        .show()
    {
        log::debug!("Desktop notification failed: {}", e);
    }
}

#[cfg(not(feature = "notify"))]
fn desktop(message: &str) {
    let result = Command::new("notify-send")
        .arg(SUMMARY)
        .arg(message)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    if let Err(e) = result {
        log::debug!("notify-send failed: {}", e);
    }
}
