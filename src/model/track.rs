use std::path::Path;

/// Placeholder shown when the `Time` field is missing or not a number
pub const UNKNOWN_DURATION: &str = "(-:--)";

/// A single song entry from the MPD database
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    /// Album name (may be empty)
    pub album: String,

    /// Artist name (may be empty)
    pub artist: String,

    /// Release date as tagged
    pub date: String,

    /// Genre as tagged
    pub genre: String,

    /// Track title (may be empty)
    pub title: String,

    /// Raw duration in seconds, as found in the dump (may be fractional)
    pub time: String,

    /// Leaf file name from `song_begin`
    pub filename: String,

    /// Full path relative to the music directory
    ///
    /// Captured once at `song_begin` from the directory stack.
    pub path: String,
}

impl Track {
    /// Create an empty track
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a metadata tag by its database key
    ///
    /// Returns false for keys that are not track metadata.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let field = match key {
            "Album" => &mut self.album,
            "Artist" => &mut self.artist,
            "Date" => &mut self.date,
            "Genre" => &mut self.genre,
            "Time" => &mut self.time,
            "Title" => &mut self.title,
            _ => return false,
        };
        *field = value.to_string();
        true
    }

    /// Formatted duration, e.g. `(3:07)` or `(1:01:01)`
    pub fn duration(&self) -> String {
        format_duration(&self.time)
    }

    /// File name with its extension removed
    pub fn stem(&self) -> &str {
        Path::new(&self.filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.filename)
    }
}

/// Format a duration given in seconds
///
/// MPD writes fractional seconds (`215.123000`); the fraction is dropped.
/// Under an hour: `(M:SS)` with unpadded minutes. Otherwise `(H:MM:SS)`.
/// Anything that is not a non-negative number gives [`UNKNOWN_DURATION`].
pub fn format_duration(seconds: &str) -> String {
    let total = match seconds.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value.floor() as u64,
        _ => return UNKNOWN_DURATION.to_string(),
    };

    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours == 0 {
        format!("({}:{:02})", minutes, secs)
    } else {
        format!("({}:{:02}:{:02})", hours, minutes, secs)
    }
}
