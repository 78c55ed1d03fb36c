//! File listing, reading and writing for the browser pane and the editor.
//!
//! Listing and reading never fail: errors come back as empty results, the
//! same as an empty directory or an empty file. Writing reports a status.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

/// Visible entry names of `dir`, sorted. Hidden (`.`-prefixed) names are dropped.
pub fn list_files(dir: &str) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Listing {:?} failed: {}", dir, e);
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();
    names
}

/// Whole file as text, or an empty string if it can't be read.
pub fn read_file(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            debug!("Reading {} failed: {}", path.display(), e);
            String::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStatus {
    Saved,
    Failed(String),
}

impl WriteStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, WriteStatus::Saved)
    }
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteStatus::Saved => f.write_str("Saved!"),
            WriteStatus::Failed(msg) => write!(f, "Error saving file: {}", msg),
        }
    }
}

/// Replace the file's contents with `content`.
pub fn write_file(path: impl AsRef<Path>, content: &str) -> WriteStatus {
    let path = path.as_ref();
    match fs::write(path, content) {
        Ok(()) => WriteStatus::Saved,
        Err(e) => {
            debug!("Writing {} failed: {}", path.display(), e);
            WriteStatus::Failed(e.to_string())
        }
    }
}
