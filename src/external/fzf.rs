//! Finder implementations: fzf and plain stdout

use super::traits::{Finder, FinderExit};
use crate::error::CollaboratorError;
use crate::picker::PickerConfig;
use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use std::process::{Child, Command, ExitStatus, Stdio};

/// Exit code fzf uses when interrupted with Ctrl-C or Esc
const INTERRUPTED: i32 = 130;

/// Runs fzf with the track lines on its stdin
pub struct FzfFinder {
    program: String,
    args: Vec<String>,
}

impl FzfFinder {
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            program: config.finder.clone(),
            args: config.finder_args(),
        }
    }
}

impl Finder for FzfFinder {
    fn run<I>(&self, lines: I) -> Result<FinderExit>
    where
        I: Iterator<Item = String>,
    {
        log::debug!("Starting {} {:?}", self.program, self.args);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| CollaboratorError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdin = child
            .stdin
            .take()
            .context("Finder stdin was not captured")?;

        if let Err(e) = write_lines(BufWriter::new(stdin), lines) {
            stop(&mut child);
            return Err(e).with_context(|| format!("Failed to write tracks to {}", self.program));
        }

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for {}", self.program))?;

        Ok(exit_outcome(&self.program, status)?)
    }
}

/// Writes the track lines to stdout instead of an interactive finder
#[derive(Debug, Default)]
pub struct StdoutFinder;

impl StdoutFinder {
    pub fn new() -> Self {
        Self
    }
}

impl Finder for StdoutFinder {
    fn run<I>(&self, lines: I) -> Result<FinderExit>
    where
        I: Iterator<Item = String>,
    {
        let stdout = io::stdout();
        write_lines(BufWriter::new(stdout.lock()), lines).context("Failed to write tracks")?;
        Ok(FinderExit::Completed)
    }
}

/// Write one line per item, stopping quietly if the reader went away
///
/// Returns the number of lines written.
pub fn write_lines<W, I>(mut writer: W, lines: I) -> io::Result<usize>
where
    W: Write,
    I: Iterator<Item = String>,
{
    let mut written = 0;
    for line in lines {
        match writeln!(writer, "{}", line) {
            Ok(()) => written += 1,
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                log::debug!("Reader closed its input after {} lines", written);
                return Ok(written);
            }
            Err(e) => return Err(e),
        }
    }

    match writer.flush() {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
        _ => Ok(written),
    }
}

/// Map the finder's exit status to an outcome
pub fn exit_outcome(program: &str, status: ExitStatus) -> Result<FinderExit, CollaboratorError> {
    if status.success() {
        return Ok(FinderExit::Completed);
    }
    if status.code() == Some(INTERRUPTED) || interrupted_by_signal(&status) {
        log::debug!("{} cancelled by user", program);
        return Ok(FinderExit::Cancelled);
    }

    Err(CollaboratorError::Exited {
        program: program.to_string(),
        status: status.to_string(),
    })
}

/// Kill a child and reap it so it does not linger as a zombie
fn stop(child: &mut Child) {
    if let Err(e) = child.kill() {
        log::debug!("Failed to kill child {}: {}", child.id(), e);
    }
    if let Err(e) = child.wait() {
        log::debug!("Failed to reap child {}: {}", child.id(), e);
    }
}

#[cfg(unix)]
fn interrupted_by_signal(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(2)
}

#[cfg(not(unix))]
fn interrupted_by_signal(_status: &ExitStatus) -> bool {
    false
}
