//! Terminal size query through `stty`

use crate::error::CollaboratorError;
use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Number of columns of the controlling terminal
pub fn terminal_columns() -> Result<usize> {
    let output = Command::new("stty")
        .arg("size")
        .stdin(Stdio::inherit())
        .output()
        .map_err(|source| CollaboratorError::Spawn {
            program: "stty".to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(CollaboratorError::Failed {
            program: "stty size".to_string(),
            status: output.status.to_string(),
            output: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    let text = String::from_utf8_lossy(&output.stdout);
    let (rows, columns) =
        parse_stty_size(&text).with_context(|| format!("Unexpected 'stty size' output: {:?}", text))?;

    log::debug!("Terminal is {} rows x {} columns", rows, columns);
    Ok(columns)
}

/// Parse `"<rows> <columns>"`
pub fn parse_stty_size(text: &str) -> Option<(usize, usize)> {
    let mut parts = text.split_whitespace();
    let rows = parts.next()?.parse().ok()?;
    let columns = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((rows, columns))
}
