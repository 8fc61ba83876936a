use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;
use xi_rope::Rope;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Yields a document as an ordered sequence of lines.
pub trait LineSource {
    fn read_lines(&self) -> Result<Vec<String>, IoError>;
}

/// Persists an ordered sequence of lines.
pub trait LineSink {
    fn write_lines(&self, lines: &[String]) -> Result<(), IoError>;
}

/// Split text into lines, each keeping its terminator.
///
/// `\r\n` stays attached to its line and a final line without a terminator is kept
/// as is, so concatenating the result reproduces `text` exactly.
pub fn split_lines(text: &str) -> Vec<String> {
    let rope = Rope::from(text);
    rope.lines_raw(..).map(|line| line.into_owned()).collect()
}

/// The line break `line` ends with: `"\r\n"`, `"\n"` or `""`.
pub fn line_terminator(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

/// Reads lines from a UTF-8 text file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileSource {
    fn read_lines(&self) -> Result<Vec<String>, IoError> {
        if !self.path.exists() {
            return Err(IoError::NotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        let lines = split_lines(&content);
        debug!("read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }
}

/// Writes lines verbatim to a file, replacing it atomically.
///
/// Content goes to a temporary file next to the destination which is then renamed
/// over it, so a failed write leaves the previous file intact. An existing file's
/// permissions carry over.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSink for FileSink {
    fn write_lines(&self, lines: &[String]) -> Result<(), IoError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        for line in lines {
            tmp.write_all(line.as_bytes())?;
        }
        tmp.flush()?;

        if let Ok(metadata) = fs::metadata(&self.path) {
            tmp.as_file().set_permissions(metadata.permissions())?;
        }

        tmp.persist(&self.path).map_err(|e| IoError::Io(e.error))?;
        debug!("wrote {} lines to {}", lines.len(), self.path.display());
        Ok(())
    }
}
