//! Line source
//!
//! Reads the raw input lines and puts them in the order the tree builder
//! expects: lexicographic, ignoring leading blanks, duplicates kept.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{FoldtreeError, FoldtreeResult};

/// Open the input stream: the given file, or stdin when no file is given.
pub fn open_input(path: Option<&Path>) -> FoldtreeResult<Box<dyn BufRead>> {
    match path {
        Some(path) => match File::open(path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FoldtreeError::InputNotFound {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(FoldtreeError::Io(e)),
        },
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Read every line of `reader`, stripping the line terminator.
///
/// Input is arbitrary text, so invalid UTF-8 is replaced rather than rejected.
pub fn read_lines(mut reader: impl Read) -> io::Result<Vec<String>> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;

    let text = String::from_utf8_lossy(&raw);
    Ok(text
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect())
}

/// Byte offset of the first character that is not a space or tab.
///
/// A line made only of blanks sorts by its full text.
pub fn first_nonblank(line: &str) -> usize {
    line.find(|c: char| c != ' ' && c != '\t').unwrap_or(0)
}

/// Sort lines lexicographically, ignoring leading blanks.
///
/// `separator` collates below every other character, so `foo/bar` lands
/// right after `foo` and ahead of `foo.txt`, keeping each subtree contiguous.
pub fn sort_lines(lines: &mut [String], separator: char) {
    let key = |line: &str| -> Vec<(bool, char)> {
        line[first_nonblank(line)..]
            .chars()
            .map(|c| (c != separator, c))
            .collect()
    };
    lines.sort_by_cached_key(|line| key(line));
}
