//! MPD database (tag cache) parser
//!
//! The database is a flat log of `key: value` lines. Directories open
//! with `directory` and close with `end`; songs are framed by
//! `song_begin` and `song_end` with their tags in between.

use super::reader::{key_value, Lines};
use super::stack::PathStack;
use crate::error::DatabaseError;
use crate::model::Track;
use std::io::BufRead;

/// Parser state for one pass over the database
#[derive(Debug, Default)]
pub struct DatabaseParser {
    stack: PathStack,
    current: Track,
    tracks: Vec<Track>,
    line: usize,
}

impl DatabaseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line and return the updated state
    pub fn step(mut self, line: &str) -> Result<Self, DatabaseError> {
        self.line += 1;
        let (key, value) = key_value(line);

        match key {
            "directory" => self.stack.push(value),
            "end" => {
                self.stack
                    .pop()
                    .map_err(|source| DatabaseError::CorruptedDirectoryStack {
                        line: self.line,
                        source,
                    })?;
            }
            "song_begin" => {
                self.current.filename = value.to_string();
                self.current.path = self.stack.join(value);
            }
            "song_end" => {
                let track = std::mem::take(&mut self.current);
                self.tracks.push(track);
            }
            _ => {
                self.current.set(key, value);
            }
        }

        Ok(self)
    }

    /// Directory depth at this point of the stream
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Finish parsing and hand out the collected tracks
    pub fn finish(self) -> Vec<Track> {
        if !self.stack.is_empty() {
            log::warn!(
                "Database ended with {} unclosed directories ({:?})",
                self.stack.depth(),
                self.stack.current_path()
            );
        }
        if self.current != Track::default() {
            log::debug!("Dropping unterminated song entry {:?}", self.current.path);
        }
        self.tracks
    }
}

/// Parse a decompressed database stream into tracks
pub fn parse_database<R: BufRead>(reader: R) -> Result<Vec<Track>, DatabaseError> {
    let parser = Lines::new(reader).try_fold(DatabaseParser::new(), |parser, line| {
        parser.step(&line?)
    })?;

    let tracks = parser.finish();
    log::info!("Parsed {} tracks from MPD database", tracks.len());
    Ok(tracks)
}
