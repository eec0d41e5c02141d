//! Menu model diagnostics

use std::{error::Error, fmt};

/// A record whose `type` is not `separator`, `host` or `menu`.
///
/// Non-fatal: the record is dropped and its siblings are still loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownItemType {
    pub type_name: String,
}

impl fmt::Display for UnknownItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ignoring item of unknown type '{}'", self.type_name)
    }
}

impl Error for UnknownItemType {}

/// Reasons a host entry cannot be saved from the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingTitle,
    MissingHostname,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingTitle => write!(f, "You must enter a title"),
            ValidationError::MissingHostname => write!(f, "You must enter a hostname"),
        }
    }
}

impl Error for ValidationError {}
