//! MPD database reading
//!
//! Finds the database through mpd.conf, decompresses it and parses the
//! song entries into [`Track`]s with full paths.

pub mod config;
mod database;
mod reader;
mod stack;

pub use config::find_db_file;
pub use database::{parse_database, DatabaseParser};
pub use reader::{key_value, Lines};
pub use stack::PathStack;

use crate::model::Track;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load all tracks from a gzip-compressed MPD database
///
/// An empty file holds no songs and is not an error.
pub fn load_tracks(db_path: &Path) -> Result<Vec<Track>> {
    log::info!("Reading MPD database from {:?}", db_path);

    let file = File::open(db_path)
        .with_context(|| format!("Failed to open MPD database: {:?}", db_path))?;

    let size = file
        .metadata()
        .with_context(|| format!("Failed to stat MPD database: {:?}", db_path))?
        .len();
    if size == 0 {
        log::warn!("MPD database {:?} is empty", db_path);
        return Ok(Vec::new());
    }

    let reader = BufReader::new(GzDecoder::new(BufReader::new(file)));
    let tracks = parse_database(reader)
        .with_context(|| format!("Failed to parse MPD database: {:?}", db_path))?;

    Ok(tracks)
}
