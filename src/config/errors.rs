use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read or parsed.
    Read { path: PathBuf, detail: String },
    /// The config file could not be written.
    Write { path: PathBuf, source: io::Error },
    IoError(io::Error),
    HomeDirectoryNotFound,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, detail } => write!(f, "Error reading {}: {}", path.display(), detail),
            ConfigError::Write { path, source } => write!(f, "Error writing {}: {}", path.display(), source),
            ConfigError::IoError(e) => write!(f, "I/O error: {}", e),
            ConfigError::HomeDirectoryNotFound => write!(f, "Home directory not found"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Write { source, .. } => Some(source),
            ConfigError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::IoError(error)
    }
}
