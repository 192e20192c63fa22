//! Word-list reader
//!
//! One key per line, in file order. Only the line terminator is stripped;
//! blank lines become empty-string keys.

use crate::error::CheckError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read every line of `path` as a key
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>, CheckError> {
    let path = path.as_ref();
    let io_error = |source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let words = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error)?;

    tracing::debug!(path = %path.display(), words = words.len(), "word list read");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_lines_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "password\r\n123456\nqwerty\n").unwrap();

        let words = load_word_list(file.path()).unwrap();
        assert_eq!(words, vec!["password", "123456", "qwerty"]);
    }

    #[test]
    fn test_keeps_blank_lines_and_spacing() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "dragon\n\n monkey \nletmein").unwrap();

        let words = load_word_list(file.path()).unwrap();
        assert_eq!(words, vec!["dragon", "", " monkey ", "letmein"]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_word_list("/nonexistent/wordlist.txt").unwrap_err();
        match err {
            CheckError::Io { path, .. } => assert!(path.ends_with("wordlist.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
