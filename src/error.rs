//! Error types for the picker
//!
//! Domain failures are typed here; the binary wraps them in `anyhow`
//! with context on the way up.

use std::path::PathBuf;
use thiserror::Error;

/// Popping the directory stack when it is already empty
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("directory stack is empty")]
pub struct StackUnderflow;

/// Errors while reading the MPD database dump
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Invalid directory state at line {line}. Corrupted database?")]
    CorruptedDirectoryStack {
        line: usize,
        #[source]
        source: StackUnderflow,
    },

    #[error("Failed to read database: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors while locating the database through mpd.conf
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No config file found (searched {searched:?})")]
    NotFound { searched: Vec<PathBuf> },

    #[error("Could not find 'db_file' in configuration file {config:?}")]
    MissingDbFile { config: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A selected line that does not follow the line protocol
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("split assertion failure: expected 3 fields, found {fields}")]
    SplitAssertion { fields: usize },
}

/// Failures of external processes (fzf, mpc, stty)
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Exited { program: String, status: String },

    #[error("'{program}' failed ({status}): {output}")]
    Failed {
        program: String,
        status: String,
        output: String,
    },
}
