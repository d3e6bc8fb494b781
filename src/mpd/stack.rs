//! Directory nesting while walking the database

use crate::error::StackUnderflow;
use std::path::MAIN_SEPARATOR;

/// Stack of directory names, outermost first
///
/// The joined path is kept up to date on every push and pop so that
/// snapshotting it for each song costs a single copy.
#[derive(Debug, Clone, Default)]
pub struct PathStack {
    segments: Vec<String>,
    /// Length of `joined` before each segment was pushed
    marks: Vec<usize>,
    joined: String,
}

impl PathStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a directory
    pub fn push(&mut self, segment: &str) {
        self.marks.push(self.joined.len());
        if !self.joined.is_empty() {
            self.joined.push(MAIN_SEPARATOR);
        }
        self.joined.push_str(segment);
        self.segments.push(segment.to_string());
    }

    /// Leave the innermost directory
    pub fn pop(&mut self) -> Result<String, StackUnderflow> {
        let segment = self.segments.pop().ok_or(StackUnderflow)?;
        if let Some(mark) = self.marks.pop() {
            self.joined.truncate(mark);
        }
        Ok(segment)
    }

    /// Current directory, empty at the top level
    pub fn current_path(&self) -> &str {
        &self.joined
    }

    /// Owned path of `filename` inside the current directory
    pub fn join(&self, filename: &str) -> String {
        if self.joined.is_empty() {
            return filename.to_string();
        }
        let mut path = String::with_capacity(self.joined.len() + 1 + filename.len());
        path.push_str(&self.joined);
        path.push(MAIN_SEPARATOR);
        path.push_str(filename);
        path
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sep(parts: &[&str]) -> String {
        parts.join(&MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn test_empty_stack() {
        let stack = PathStack::new();
        assert_eq!(stack.current_path(), "");
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.join("song.mp3"), "song.mp3");
    }

    #[test]
    fn test_push_pop_updates_path() {
        let mut stack = PathStack::new();
        stack.push("Artist");
        stack.push("Album");
        assert_eq!(stack.current_path(), sep(&["Artist", "Album"]));
        assert_eq!(stack.join("01.flac"), sep(&["Artist", "Album", "01.flac"]));

        assert_eq!(stack.pop(), Ok("Album".to_string()));
        assert_eq!(stack.current_path(), "Artist");

        stack.push("Other Album");
        assert_eq!(stack.current_path(), sep(&["Artist", "Other Album"]));

        stack.pop().unwrap();
        stack.pop().unwrap();
        assert!(stack.is_empty());
        assert_eq!(stack.current_path(), "");
    }

    #[test]
    fn test_pop_empty_fails() {
        let mut stack = PathStack::new();
        assert_eq!(stack.pop(), Err(StackUnderflow));

        stack.push("a");
        stack.pop().unwrap();
        assert_eq!(stack.pop(), Err(StackUnderflow));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_join_is_a_snapshot() {
        let mut stack = PathStack::new();
        stack.push("a");
        let path = stack.join("x.mp3");
        stack.pop().unwrap();
        stack.push("b");
        assert_eq!(path, sep(&["a", "x.mp3"]));
    }
}
