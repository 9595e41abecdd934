//! Line-oriented reading and writing of measurement files.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::FileError;

/// Line terminator of a text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// CRLF when the first line break is `\r\n`.
    pub fn detect(content: &str) -> Self {
        match content.find('\n') {
            Some(pos) if pos > 0 && content.as_bytes()[pos - 1] == b'\r' => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// The lines of a text file plus the terminator to write them back with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    pub lines: Vec<String>,
    pub line_ending: LineEnding,
}

impl TextFile {
    /// Split file content into lines. Invalid UTF-8 is replaced rather than
    /// rejected so one stray byte never aborts a file.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let content = String::from_utf8_lossy(bytes);
        Self {
            line_ending: LineEnding::detect(&content),
            lines: content.lines().map(str::to_string).collect(),
        }
    }
}

/// Read a measurement file. An empty file is an error.
pub fn read_lines(path: &Path) -> Result<TextFile, FileError> {
    if !path.exists() {
        return Err(FileError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file = TextFile::from_bytes(&bytes);
    if file.lines.is_empty() {
        return Err(FileError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(file)
}

/// Write lines, each followed by the terminator.
///
/// Uses a temp file and rename so a failed write never leaves a truncated
/// output behind.
pub fn write_lines<S: AsRef<str>>(
    path: &Path,
    lines: &[S],
    line_ending: LineEnding,
) -> Result<(), FileError> {
    let write_error = |source| FileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push_str(line_ending.as_str());
    }

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, content).map_err(write_error)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(e));
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}
