//! Newline-separated text files with append-only writes.
use crate::error::Result;
use crate::fsys::ensure_parent_dir;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A text file read as a list of lines and appended to one line at a time
///
/// Lines are separated by a single `\n` with no trailing newline, so
/// `write_line` only emits a separator when the file already has content.
#[derive(Debug)]
pub struct LineFile {
    path: PathBuf,
    file: File,
}

impl LineFile {
    /// Open `path` for appending, creating the file and its parent directories
    /// when missing. Existing content is kept.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        ensure_parent_dir(&path)?;
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)?;
        Ok(Self { path, file })
    }

    /// All lines of the file, with surrounding blank lines stripped.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        read_lines(&self.path)
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        if self.file.metadata()?.len() > 0 {
            self.file.write_all(b"\n")?;
        }
        self.file.write_all(line.as_bytes())?;
        Ok(())
    }
}

/// Read `path` and split it into lines, ignoring leading and trailing newlines.
///
/// An empty file yields no lines. `\r\n` endings are accepted.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let trimmed = content.trim_matches(|c| c == '\n' || c == '\r');
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    Ok(trimmed
        .split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect())
}
