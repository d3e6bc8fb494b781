//! Playback control through the `mpc` command line client

use super::traits::Playback;
use crate::error::CollaboratorError;
use anyhow::Result;
use std::process::Command;

/// Controls MPD by running `mpc`
pub struct MpcPlayback {
    program: String,
}

impl MpcPlayback {
    pub fn new() -> Self {
        Self {
            program: "mpc".to_string(),
        }
    }

    /// Run mpc and return its stdout
    ///
    /// On failure the error carries stdout and stderr combined, which is
    /// where mpc explains what went wrong.
    fn run(&self, args: &[&str]) -> Result<String, CollaboratorError> {
        log::debug!("Running {} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| CollaboratorError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CollaboratorError::Failed {
                program: format!("{} {}", self.program, args.join(" ")),
                status: output.status.to_string(),
                output: format!("{}{}", stdout, stderr).trim().to_string(),
            });
        }

        Ok(stdout)
    }
}

impl Default for MpcPlayback {
    fn default() -> Self {
        Self::new()
    }
}

impl Playback for MpcPlayback {
    fn queue(&self) -> Result<Vec<String>> {
        let listing = self.run(&["playlist", "-f", "%file%"])?;
        Ok(listing.lines().map(str::to_string).collect())
    }

    fn add(&self, path: &str) -> Result<()> {
        self.run(&["add", path])?;
        Ok(())
    }

    fn play(&self, position: usize) -> Result<()> {
        self.run(&["play", &position.to_string()])?;
        Ok(())
    }
}
