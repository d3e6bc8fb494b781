//! Main picking pipeline: database to finder

use super::config::PickerConfig;
use super::format::LineFormatter;
use super::group::group_by_artist;
use crate::external::{Finder, FinderExit};
use crate::model::Track;
use anyhow::Result;
use rand::Rng;
use std::path::Path;

/// Feeds formatted tracks to a finder
pub struct PickerPipeline<F: Finder> {
    config: PickerConfig,
    finder: F,
}

impl<F: Finder> PickerPipeline<F> {
    pub fn new(config: PickerConfig, finder: F) -> Self {
        Self { config, finder }
    }

    /// Load the database at `db_path` and run the finder over it
    pub fn pick(&self, db_path: &Path) -> Result<FinderExit> {
        let tracks = crate::mpd::load_tracks(db_path)?;
        self.run(tracks, &mut rand::thread_rng())
    }

    /// Group, format and stream `tracks` to the finder
    ///
    /// The user cancelling the finder is a normal outcome, not an error.
    pub fn run<R: Rng + ?Sized>(&self, tracks: Vec<Track>, rng: &mut R) -> Result<FinderExit> {
        let tracks = group_by_artist(tracks, rng);
        let formatter = LineFormatter::new(self.config.width);

        log::info!(
            "Presenting {} tracks at {} columns",
            tracks.len(),
            formatter.width()
        );

        let exit = self
            .finder
            .run(tracks.iter().map(|track| formatter.format(track)))?;

        match exit {
            FinderExit::Completed => log::info!("Finder closed"),
            FinderExit::Cancelled => log::info!("Finder cancelled by user"),
        }
        Ok(exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{path_from_line, DELIMITER};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    /// Finder stand-in that records the lines and exits as told
    struct RecordingFinder {
        lines: RefCell<Vec<String>>,
        exit: FinderExit,
    }

    impl RecordingFinder {
        fn exiting(exit: FinderExit) -> Self {
            Self {
                lines: RefCell::new(Vec::new()),
                exit,
            }
        }
    }

    impl Finder for &RecordingFinder {
        fn run<I>(&self, lines: I) -> Result<FinderExit>
        where
            I: Iterator<Item = String>,
        {
            self.lines.borrow_mut().extend(lines);
            Ok(self.exit)
        }
    }

    fn tracks() -> Vec<Track> {
        ["x.mp3", "y.mp3", "z.mp3"]
            .iter()
            .map(|name| Track {
                artist: "Artist".to_string(),
                title: name.to_string(),
                time: "100".to_string(),
                filename: name.to_string(),
                path: format!("dir/{}", name),
                ..Track::default()
            })
            .collect()
    }

    #[test]
    fn test_every_track_reaches_the_finder() {
        let finder = RecordingFinder::exiting(FinderExit::Completed);
        let pipeline = PickerPipeline::new(PickerConfig::new(45, "mpd-picker"), &finder);

        let exit = pipeline
            .run(tracks(), &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(exit, FinderExit::Completed);

        let lines = finder.lines.borrow();
        assert_eq!(lines.len(), 3);
        let paths: Vec<&str> = lines.iter().map(|l| path_from_line(l).unwrap()).collect();
        assert_eq!(paths, vec!["dir/x.mp3", "dir/y.mp3", "dir/z.mp3"]);
        assert!(lines.iter().all(|l| l.matches(DELIMITER).count() == 2));
    }

    #[test]
    fn test_cancel_is_not_an_error() {
        let finder = RecordingFinder::exiting(FinderExit::Cancelled);
        let pipeline = PickerPipeline::new(PickerConfig::new(80, "mpd-picker"), &finder);

        let exit = pipeline.run(tracks(), &mut StdRng::seed_from_u64(1));
        assert_eq!(exit.unwrap(), FinderExit::Cancelled);
    }
}
