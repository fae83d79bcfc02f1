//! Error types for headerdiff operations

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeaderDiffError>;

#[derive(Error, Debug)]
pub enum HeaderDiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file could not be opened or its first line could not be decoded.
    /// Displays only the underlying message, as it is printed inline in reports.
    #[error("{message}")]
    ReadError { path: PathBuf, message: String },

    #[error("Header missing")]
    EmptyHeader { path: PathBuf },

    #[error("Invalid folder path: {path}")]
    InvalidFolder { path: PathBuf },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl HeaderDiffError {
    pub fn read_error(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn empty_header(path: impl Into<PathBuf>) -> Self {
        Self::EmptyHeader { path: path.into() }
    }

    pub fn invalid_folder(path: impl Into<PathBuf>) -> Self {
        Self::InvalidFolder { path: path.into() }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }
}
