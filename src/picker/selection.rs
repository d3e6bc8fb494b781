//! Turning a selected fzf line back into a playback action

use super::format::{DELIMITER, FIELD_COUNT};
use crate::error::SelectionError;
use crate::external::Playback;
use anyhow::Result;

/// What to do with the selected track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// Queue the track and start playing it
    Play,

    /// Only make sure the track is queued
    Queue,
}

/// Recover the hidden path from a formatted line
pub fn path_from_line(line: &str) -> Result<&str, SelectionError> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(SelectionError::SplitAssertion {
            fields: fields.len(),
        });
    }
    Ok(fields[FIELD_COUNT - 1])
}

/// Queue `path` unless already queued, then play it if asked to
///
/// Returns the 1-based queue position of the track.
pub fn select<P: Playback + ?Sized>(playback: &P, path: &str, action: SelectAction) -> Result<usize> {
    let queue = playback.queue()?;

    let position = match queue.iter().position(|entry| entry == path) {
        Some(index) => {
            log::debug!("{:?} already queued at {}", path, index + 1);
            index + 1
        }
        None => {
            playback.add(path)?;
            log::debug!("Queued {:?} at {}", path, queue.len() + 1);
            queue.len() + 1
        }
    };

    if action == SelectAction::Play {
        playback.play(position)?;
    }

    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Track;
    use crate::picker::LineFormatter;
    use std::cell::RefCell;

    /// In-memory queue recording the commands it receives
    #[derive(Default)]
    struct FakePlayback {
        queue: RefCell<Vec<String>>,
        played: RefCell<Vec<usize>>,
    }

    impl Playback for FakePlayback {
        fn queue(&self) -> Result<Vec<String>> {
            Ok(self.queue.borrow().clone())
        }

        fn add(&self, path: &str) -> Result<()> {
            self.queue.borrow_mut().push(path.to_string());
            Ok(())
        }

        fn play(&self, position: usize) -> Result<()> {
            self.played.borrow_mut().push(position);
            Ok(())
        }
    }

    fn queued(paths: &[&str]) -> FakePlayback {
        let playback = FakePlayback::default();
        playback
            .queue
            .replace(paths.iter().map(|p| p.to_string()).collect());
        playback
    }

    #[test]
    fn test_round_trip_recovers_path() {
        let track = Track {
            artist: "Sigur Rós".to_string(),
            title: "Hoppípolla".to_string(),
            time: "268".to_string(),
            filename: "04 Hoppípolla.flac".to_string(),
            path: "Sigur Rós/Takk.../04 Hoppípolla.flac".to_string(),
            ..Track::default()
        };

        for width in [0, 5, 20, 120] {
            let line = LineFormatter::new(width).format(&track);
            assert_eq!(path_from_line(&line).unwrap(), track.path);
        }
    }

    #[test]
    fn test_split_assertion() {
        assert_eq!(
            path_from_line("no delimiters here"),
            Err(SelectionError::SplitAssertion { fields: 1 })
        );
        let one = format!("info{}(1:00)", DELIMITER);
        assert_eq!(
            path_from_line(&one),
            Err(SelectionError::SplitAssertion { fields: 2 })
        );
    }

    #[test]
    fn test_play_new_track_appends_and_plays() {
        let playback = queued(&["a.mp3", "b.mp3"]);
        let position = select(&playback, "c.mp3", SelectAction::Play).unwrap();

        assert_eq!(position, 3);
        assert_eq!(*playback.queue.borrow(), vec!["a.mp3", "b.mp3", "c.mp3"]);
        assert_eq!(*playback.played.borrow(), vec![3]);
    }

    #[test]
    fn test_play_queued_track_does_not_add_again() {
        let playback = queued(&["a.mp3", "b.mp3"]);
        let position = select(&playback, "b.mp3", SelectAction::Play).unwrap();

        assert_eq!(position, 2);
        assert_eq!(playback.queue.borrow().len(), 2);
        assert_eq!(*playback.played.borrow(), vec![2]);
    }

    #[test]
    fn test_queue_only_does_not_play() {
        let playback = queued(&[]);
        let position = select(&playback, "x.mp3", SelectAction::Queue).unwrap();

        assert_eq!(position, 1);
        assert_eq!(*playback.queue.borrow(), vec!["x.mp3"]);
        assert!(playback.played.borrow().is_empty());
    }
}
