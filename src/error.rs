//! Error types for the data and config boundary
//!
//! The engine itself never fails; only reading or writing external files can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Failed to serialize {what}: {message}")]
    Serialize { what: &'static str, message: String },

    #[error("Invalid data: {0}")]
    Invalid(String),
}

impl DataError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataError::Io { path: path.into(), source }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        DataError::Parse { path: path.into(), message: message.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
