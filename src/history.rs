//! Quick-connect history
//!
//! Host strings typed into the entry box are kept most-recent-first in
//! `~/.sshmenu_history`, one per line. Re-adding a string moves it to the
//! front. The file is re-read only when its modification time changes.

use crate::{log_debug, log_warn};
use std::{
    error::Error,
    fmt, fs, io,
    path::{Path, PathBuf},
    time::SystemTime,
};

const HISTORY_FILE_NAME: &str = ".sshmenu_history";

#[derive(Debug)]
pub enum HistoryError {
    Write { path: PathBuf, source: io::Error },
    IoError(io::Error),
    HomeDirectoryNotFound,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Write { path, source } => write!(f, "Error writing {}: {}", path.display(), source),
            HistoryError::IoError(e) => write!(f, "I/O error: {}", e),
            HistoryError::HomeDirectoryNotFound => write!(f, "Home directory not found"),
        }
    }
}

impl Error for HistoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HistoryError::Write { source, .. } => Some(source),
            HistoryError::IoError(e) => Some(e),
            HistoryError::HomeDirectoryNotFound => None,
        }
    }
}

impl From<io::Error> for HistoryError {
    fn from(error: io::Error) -> Self {
        HistoryError::IoError(error)
    }
}

pub struct HistoryStore {
    path: PathBuf,
    lines: Vec<String>,
    modified: Option<SystemTime>,
}

impl HistoryStore {
    /// Opens the history at `path`. A missing or unreadable file is an empty history.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            lines: Vec::new(),
            modified: None,
        };
        store.reload();
        store
    }

    /// `~/.sshmenu_history`
    pub fn default_path() -> Result<PathBuf, HistoryError> {
        let home_dir = dirs::home_dir().ok_or(HistoryError::HomeDirectoryNotFound)?;
        Ok(home_dir.join(HISTORY_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries, most recent first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Re-reads the file if another process changed it. Returns whether it did.
    pub fn freshen(&mut self) -> bool {
        if !self.path.exists() {
            return false;
        }
        if modified_time(&self.path) == self.modified {
            return false;
        }
        self.reload();
        true
    }

    /// Moves `line` to the front (dropping any earlier copy) and rewrites the file.
    pub fn add_line(&mut self, line: &str) -> Result<(), HistoryError> {
        self.lines.retain(|existing| existing != line);
        self.lines.insert(0, line.to_string());

        let mut content = String::new();
        for entry in &self.lines {
            content.push_str(entry);
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(|source| HistoryError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.modified = modified_time(&self.path);
        Ok(())
    }

    /// Entries containing `text`, ignoring case: those starting with it first,
    /// then (unless `prefix_only`) the rest, each group in history order.
    pub fn each_match<'a>(&'a self, text: &str, prefix_only: bool) -> impl Iterator<Item = &'a str> + use<'a> {
        let needle = text.to_lowercase();
        let other_needle = needle.clone();
        let prefixed = self
            .lines
            .iter()
            .filter(move |line| line.to_lowercase().starts_with(&needle))
            .map(String::as_str);
        let contained = self
            .lines
            .iter()
            .filter(move |_| !prefix_only)
            .filter(move |line| {
                let lower = line.to_lowercase();
                !lower.starts_with(&other_needle) && lower.contains(&other_needle)
            })
            .map(String::as_str);
        prefixed.chain(contained)
    }

    fn reload(&mut self) {
        self.lines.clear();
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                self.lines = content.lines().map(str::to_string).collect();
                self.modified = modified_time(&self.path);
                log_debug!("Loaded {} history entries from {:?}", self.lines.len(), self.path);
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => log_warn!("Failed to read history file {:?}: {}", self.path, err),
        }
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

#[cfg(test)]
#[path = "test/history.rs"]
mod tests;
