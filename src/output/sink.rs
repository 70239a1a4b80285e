//! File sink: appends produced lines in the output encoding

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::encoding;

/// Platform-default line terminator, appended after every output line
/// including the last.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// Append `lines` to the file at `path`, creating it if absent. One
/// encoded write per line; I/O failures propagate immediately.
pub fn append_lines(path: &Path, lines: impl Iterator<Item = String>) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open file for append: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writer
            .write_all(&encoding::encode(&line))
            .with_context(|| format!("Failed to write to file: {}", path.display()))?;
        writer
            .write_all(&encoding::encode(LINE_TERMINATOR))
            .with_context(|| format!("Failed to write to file: {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_append_creates_and_extends_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        append_lines(&path, vec!["a,b".to_string()].into_iter()).unwrap();
        append_lines(&path, vec!["c,d".to_string()].into_iter()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            format!("a,b{LINE_TERMINATOR}c,d{LINE_TERMINATOR}")
        );
    }

    #[test]
    fn test_missing_directory_propagates_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");
        assert!(append_lines(&path, std::iter::empty()).is_err());
    }

    #[test]
    fn test_latin1_bytes_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        append_lines(&path, vec!["café".to_string()].into_iter()).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"caf\xe9"));
    }
}
