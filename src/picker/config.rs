//! Picker configuration

use super::format::DELIMITER;

/// Columns fzf needs for its own pointer and scrollbar
pub const FINDER_MARGIN: usize = 5;

/// Configuration for a picking session
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Visible width of each formatted line, in terminal columns
    pub width: usize,

    /// Finder program to run
    pub finder: String,

    /// Path of this executable, re-invoked by the finder on selection
    pub executable: String,

    /// fzf key that plays the highlighted track
    pub play_key: String,

    /// fzf key that only queues the highlighted track
    pub queue_key: String,
}

impl PickerConfig {
    /// Create a configuration for a terminal `columns` wide
    pub fn new(columns: usize, executable: impl Into<String>) -> Self {
        Self {
            width: columns.saturating_sub(FINDER_MARGIN),
            finder: "fzf".to_string(),
            executable: executable.into(),
            play_key: "enter".to_string(),
            queue_key: "alt-enter".to_string(),
        }
    }

    /// Key bindings that call back into `_play` / `_queue`
    pub fn bindings(&self) -> String {
        let exe = shell_quote(&self.executable);
        format!(
            "{}:execute-silent({} _play {{}}),{}:execute-silent({} _queue {{}})",
            self.play_key, exe, self.queue_key, exe
        )
    }

    /// Command line arguments for fzf
    ///
    /// Only the first field (track info) is searchable; the duration and
    /// the hidden path are not.
    pub fn finder_args(&self) -> Vec<String> {
        vec![
            "--no-hscroll".to_string(),
            "--nth".to_string(),
            "1".to_string(),
            "--delimiter".to_string(),
            DELIMITER.to_string(),
            "--bind".to_string(),
            self.bindings(),
        ]
    }
}

/// Quote a word for the shell fzf runs its actions in
fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+'));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
