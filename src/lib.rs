pub mod app;
pub mod args;
pub mod command;
pub mod command_path;
pub mod completion;
pub mod config;
pub mod history;
pub mod known_hosts;
pub mod log;
pub mod menu;
pub mod reorder;
pub mod shell;

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Config(config::ConfigError),
    History(history::HistoryError),
    App(app::AppError),
    Log(log::LogError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(err) => write!(f, "Configuration error: {}", err),
            Error::History(err) => write!(f, "History error: {}", err),
            Error::App(err) => write!(f, "{}", err),
            Error::Log(err) => write!(f, "Logging error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

// Implement From for each error type
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<history::HistoryError> for Error {
    fn from(err: history::HistoryError) -> Self {
        Error::History(err)
    }
}

impl From<app::AppError> for Error {
    fn from(err: app::AppError) -> Self {
        Error::App(err)
    }
}

impl From<log::LogError> for Error {
    fn from(err: log::LogError) -> Self {
        Error::Log(err)
    }
}
