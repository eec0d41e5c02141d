//! Lookup of external programs on `PATH`.
//!
//! Results are cached for the life of the process.

use crate::command::ALT_TRANSPORT_PROGRAM;
use once_cell::sync::OnceCell;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

#[cfg(unix)]
const EXECUTE_BITS: u32 = 0o111;

#[derive(Debug, Clone)]
struct CachedPathError {
    kind: io::ErrorKind,
    message: String,
}

impl CachedPathError {
    fn from_io(err: io::Error) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

static ALT_TRANSPORT_PATH: OnceCell<Result<PathBuf, CachedPathError>> = OnceCell::new();

fn resolve_cached(
    cell: &OnceCell<Result<PathBuf, CachedPathError>>,
    label: &'static str,
    resolver: impl FnOnce() -> io::Result<PathBuf>,
) -> io::Result<PathBuf> {
    let cached = cell.get_or_init(|| resolver().map_err(CachedPathError::from_io));
    match cached {
        Ok(path) => Ok(path.clone()),
        Err(err) => Err(io::Error::new(err.kind, format!("{label}: {}", err.message))),
    }
}

pub fn alt_transport_path() -> io::Result<PathBuf> {
    resolve_cached(&ALT_TRANSPORT_PATH, ALT_TRANSPORT_PROGRAM, || resolve_path_from_env(ALT_TRANSPORT_PROGRAM))
}

/// Whether the alternate transport wrapper is installed.
pub fn have_alt_transport() -> bool {
    alt_transport_path().is_ok()
}

/// Uncached lookup of any program, e.g. the selected terminal.
pub fn resolve_path_from_env(binary: &str) -> io::Result<PathBuf> {
    let located = which::which(binary).map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("{binary} not found in PATH: {err}")))?;
    validate_executable_path(&located, binary)
}

fn validate_executable_path(path: &Path, label: &str) -> io::Result<PathBuf> {
    let canonical = fs::canonicalize(path).map_err(|err| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("unable to canonicalize {label} path '{}': {err}", path.display()),
        )
    })?;

    let metadata = fs::metadata(&canonical).map_err(|err| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("unable to inspect {label} path '{}': {err}", canonical.display()),
        )
    })?;

    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{label} path '{}' is not a regular file", canonical.display()),
        ));
    }

    #[cfg(unix)]
    {
        if metadata.permissions().mode() & EXECUTE_BITS == 0 {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{label} path '{}' is not executable", canonical.display()),
            ));
        }
    }

    Ok(canonical)
}

#[cfg(test)]
#[path = "test/command_path.rs"]
mod tests;
