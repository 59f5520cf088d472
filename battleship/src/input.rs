// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Parsing of placement and guess records, and of file names typed on standard input.
use std::io::{self, BufRead};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use seabattle::board::PlacementRecord;

/// Matcher for `<class> <x1> <y1> <x2> <y2>`.
static PLACEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)
        (?P<class>\S+)\s+
        (?P<x1>[-+]?[0-9]+)\s+(?P<y1>[-+]?[0-9]+)\s+
        (?P<x2>[-+]?[0-9]+)\s+(?P<y2>[-+]?[0-9]+)$",
    )
    .unwrap()
});

/// Matcher for `<x> <y>`.
static GUESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?x)(?P<x>[-+]?[0-9]+)\s+(?P<y>[-+]?[0-9]+)$").unwrap());

/// Parse a named integer capture. Values too large for an `i64` saturate, so they are
/// still off the board rather than malformed.
fn int(captures: &Captures, name: &str) -> Option<i64> {
    let digits = captures.name(name)?.as_str();
    Some(digits.parse().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

/// Parse one placement line. The record keeps the trimmed line as its diagnostic text.
/// Returns `None` if the line does not have the shape of a placement record.
pub fn parse_placement(line: &str) -> Option<PlacementRecord> {
    let line = line.trim();
    let captures = PLACEMENT.captures(line)?;
    let ends = [
        int(&captures, "x1")?,
        int(&captures, "y1")?,
        int(&captures, "x2")?,
        int(&captures, "y2")?,
    ];
    Some(PlacementRecord::new(&captures["class"], ends).with_text(line))
}

/// Parse one guess line into raw `(x, y)` values. Range checks are left to the game.
pub fn parse_guess(line: &str) -> Option<(i64, i64)> {
    let captures = GUESS.captures(line.trim())?;
    Some((int(&captures, "x")?, int(&captures, "y")?))
}

/// Helper to read file names from the player, one per line.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Read the next line, trimmed. Fails with `UnexpectedEof` if input has ended.
    pub fn read_input(&mut self, what: &str) -> io::Result<String> {
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {} on standard input", what),
            ));
        }
        Ok(self.buf.trim().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_keeps_trimmed_text() {
        let record = parse_placement("  A 0 0 0 4 \n").unwrap();
        assert_eq!(record.class_code(), "A");
        assert_eq!(record.ends(), [0, 0, 0, 4]);
        assert_eq!(record.text(), "A 0 0 0 4");
    }

    #[test]
    fn placement_allows_signs_and_tabs() {
        let record = parse_placement("P\t-1 +2  3 4").unwrap();
        assert_eq!(record.ends(), [-1, 2, 3, 4]);
    }

    #[test]
    fn placement_needs_five_fields() {
        assert_eq!(parse_placement("A 0 0 0"), None);
        assert_eq!(parse_placement("A 0 0 0 4 5"), None);
        assert_eq!(parse_placement("A 0 zero 0 4"), None);
    }

    #[test]
    fn huge_values_saturate() {
        let record = parse_placement("A 0 -99999999999999999999 0 99999999999999999999").unwrap();
        assert_eq!(record.ends(), [0, i64::MIN, 0, i64::MAX]);
        assert_eq!(parse_guess("99999999999999999999 0"), Some((i64::MAX, 0)));
    }

    #[test]
    fn guess_fields() {
        assert_eq!(parse_guess("5 5"), Some((5, 5)));
        assert_eq!(parse_guess(" 10 -3\r\n"), Some((10, -3)));
        assert_eq!(parse_guess("5"), None);
        assert_eq!(parse_guess("5 5 5"), None);
        assert_eq!(parse_guess("a b"), None);
    }

    #[test]
    fn reads_file_names_until_eof() {
        let mut input = InputReader::new(&b"ships.txt\n  guesses.txt \n"[..]);
        assert_eq!(input.read_input("a").unwrap(), "ships.txt");
        assert_eq!(input.read_input("b").unwrap(), "guesses.txt");
        let err = input.read_input("c").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
