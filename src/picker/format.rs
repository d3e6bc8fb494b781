//! Fixed-width track lines with a hidden path field
//!
//! Every line follows the same protocol:
//!
//! ```text
//! <info, padded or truncated><DELIMITER><duration><DELIMITER><path>
//! ```
//!
//! [`DELIMITER`] is U+2002 EN SPACE. It renders as a blank, so the line
//! reads naturally, but it is practically never found in tags. Any
//! occurrence in the info text is replaced by a regular space before the
//! line is built. The path is not sanitized: splitting the line into at
//! most [`FIELD_COUNT`] fields always yields the path intact as the last
//! field. fzf is told to search only the first field.
//!
//! Widths are terminal columns, so wide (CJK) characters count double.

use crate::model::Track;
use unicode_width::UnicodeWidthChar;

/// Separator between the info, duration and path fields
pub const DELIMITER: char = '\u{2002}';

/// Number of fields in a formatted line
pub const FIELD_COUNT: usize = 3;

/// Marker appended to truncated info text
pub const ELLIPSIS: &str = "...";

/// Formats tracks into lines of a fixed visible width
#[derive(Debug, Clone, Copy)]
pub struct LineFormatter {
    width: usize,
}

impl LineFormatter {
    /// `width` covers info, inner delimiter and duration
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Format one track
    pub fn format(&self, track: &Track) -> String {
        let info = sanitize(&display_text(track));
        let duration = track.duration();

        let reserved = columns(&duration) + char_columns(DELIMITER);
        let budget = self.width.saturating_sub(reserved);

        let mut line = pad_right(&truncate(&info, budget), budget);
        line.push(DELIMITER);
        line.push_str(&duration);
        line.push(DELIMITER);
        line.push_str(&track.path);
        line
    }
}

/// `Artist - Title {Album}`, leaving out what is missing
///
/// Untitled tracks fall back to their file name without extension.
pub fn display_text(track: &Track) -> String {
    let mut info = if track.title.is_empty() {
        track.stem().to_string()
    } else {
        track.title.clone()
    };
    if !track.artist.is_empty() {
        info = format!("{} - {}", track.artist, info);
    }
    if !track.album.is_empty() {
        info.push_str(" {");
        info.push_str(&track.album);
        info.push('}');
    }
    info
}

/// Replace the delimiter and control characters with plain spaces
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c == DELIMITER || c.is_control() { ' ' } else { c })
        .collect()
}

/// Display columns of a string
pub fn columns(text: &str) -> usize {
    text.chars().map(char_columns).sum()
}

fn char_columns(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `text` to at most `max` columns on a character boundary
///
/// Truncated text ends with [`ELLIPSIS`] when there is room for it.
pub fn truncate(text: &str, max: usize) -> String {
    if columns(text) <= max {
        return text.to_string();
    }

    let ellipsis = columns(ELLIPSIS);
    let (limit, tail) = if max >= ellipsis {
        (max - ellipsis, ELLIPSIS)
    } else {
        (max, "")
    };

    let mut out = String::with_capacity(text.len().min(max * 4) + tail.len());
    let mut used = 0;
    for c in text.chars() {
        let w = char_columns(c);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(tail);
    out
}

/// Pad `text` with spaces up to `width` columns
pub fn pad_right(text: &str, width: usize) -> String {
    let used = columns(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(used));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}
