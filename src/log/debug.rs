//! Debug log file writer
//!
//! Entries are appended to `~/.sshmenu.d/logs/sshmenu.log` with a timestamp and
//! level tag. The file is opened on the first entry and kept open afterwards.

use super::{LogError, LogLevel, formatter::LogFormatter};
use std::{
    fs::{self, File, OpenOptions},
    io::{LineWriter, Write},
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

#[cfg(unix)]
const PRIVATE_LOG_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const PRIVATE_LOG_FILE_MODE: u32 = 0o600;

#[derive(Default)]
struct DebugLogState {
    path: Option<PathBuf>,
    writer: Option<LineWriter<File>>,
}

pub(super) struct DebugLogger {
    formatter: LogFormatter,
    state: Mutex<DebugLogState>,
}

impl DebugLogger {
    pub(super) fn new() -> Self {
        Self {
            formatter: LogFormatter::default(),
            state: Mutex::new(DebugLogState::default()),
        }
    }

    pub(super) fn set_path(&self, path: PathBuf) {
        let mut state = self.lock_state();
        state.path = Some(path);
        state.writer = None;
    }

    pub(super) fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let formatted = self.formatter.format(Some(level), message);
        let mut state = self.lock_state();

        if state.writer.is_none() {
            let log_path = match &state.path {
                Some(path) => path.clone(),
                None => default_log_path()?,
            };
            state.writer = Some(LineWriter::new(open_private_append_file(&log_path)?));
        }

        if let Some(writer) = state.writer.as_mut() {
            writeln!(writer, "{}", formatted)?;
        }
        Ok(())
    }

    pub(super) fn flush(&self) -> Result<(), LogError> {
        if let Some(writer) = self.lock_state().writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    fn lock_state(&self) -> MutexGuard<'_, DebugLogState> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => {
                eprintln!("Debug log lock poisoned; continuing with recovered state");
                poisoned.into_inner()
            }
        }
    }
}

fn default_log_path() -> Result<PathBuf, LogError> {
    let home_dir = dirs::home_dir().ok_or_else(|| LogError::DirectoryCreationError("Home directory not found".to_string()))?;
    let log_dir = home_dir.join(".sshmenu.d").join("logs");

    // Create directory structure if it doesn't exist
    create_private_directory(&log_dir)?;

    Ok(log_dir.join("sshmenu.log"))
}

fn create_private_directory(path: &Path) -> Result<(), LogError> {
    fs::create_dir_all(path).map_err(|err| LogError::DirectoryCreationError(format!("{}: {}", path.display(), err)))?;
    set_private_directory_permissions(path)
}

fn open_private_append_file(path: &Path) -> Result<File, LogError> {
    let mut options = OpenOptions::new();
    options
        .create(true) // Create if missing.
        .append(true); // Preserve existing logs.
    #[cfg(unix)]
    {
        options.mode(PRIVATE_LOG_FILE_MODE);
    }
    let file = options.open(path)?;
    set_private_file_permissions(path)?;
    Ok(file)
}

#[cfg(unix)]
fn set_private_directory_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_DIR_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_directory_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(unix)]
fn set_private_file_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_FILE_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_file_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(test)]
#[path = "../test/log/debug.rs"]
mod tests;
