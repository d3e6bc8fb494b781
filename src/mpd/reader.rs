//! Line splitting for the MPD database text format

use std::io::{self, BufRead};

/// Split a database line into its key and value
///
/// Lines look like `key: value` or a bare `keyword`. The value is taken
/// verbatim after the `": "` separator and may contain further colons.
pub fn key_value(line: &str) -> (&str, &str) {
    let Some(i) = line.find(':') else {
        return (line, "");
    };
    if i == line.len() - 1 {
        return (&line[..i], "");
    }

    // The value is normally preceded by a single space
    let skip = if line.as_bytes()[i + 1] == b' ' { 2 } else { 1 };
    (&line[..i], &line[i + skip..])
}

/// Iterator over the lines of a reader that tolerates invalid UTF-8
///
/// Tags written by other tools occasionally carry broken encodings; those
/// bytes are replaced rather than aborting the whole read. A trailing
/// `\r` is stripped along with the newline.
pub struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_key_value_pair() {
        assert_eq!(key_value("Artist: Miles Davis"), ("Artist", "Miles Davis"));
    }

    #[test]
    fn test_bare_keyword() {
        assert_eq!(key_value("song_end"), ("song_end", ""));
        assert_eq!(key_value("end:"), ("end", ""));
    }

    #[test]
    fn test_value_with_colons() {
        assert_eq!(
            key_value("Title: Act II: Scene 3: Finale"),
            ("Title", "Act II: Scene 3: Finale")
        );
    }

    #[test]
    fn test_missing_space_after_colon() {
        assert_eq!(key_value("Time:215"), ("Time", "215"));
    }

    #[test]
    fn test_value_kept_verbatim() {
        assert_eq!(key_value("Title:   padded "), ("Title", "  padded "));
        assert_eq!(key_value("Album: "), ("Album", ""));
    }

    #[test]
    fn test_lines_strip_endings() {
        let input = Cursor::new(b"directory: a\r\nsong_end\nlast".to_vec());
        let lines: Vec<String> = Lines::new(input).map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["directory: a", "song_end", "last"]);
    }

    #[test]
    fn test_lines_invalid_utf8() {
        let input = Cursor::new(b"Title: caf\xe9\n".to_vec());
        let lines: Vec<String> = Lines::new(input).map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["Title: caf\u{fffd}"]);
    }
}
