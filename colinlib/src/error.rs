//! Error types for colinlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting or analyzing lines
#[derive(Error, Debug)]
pub enum ColinError {
    /// Path is neither a file nor a directory
    #[error("entry not found: {0}")]
    NotFound(PathBuf),

    /// A directory operation was given a path to a file
    #[error("path must refer to a directory and not a file: {0}")]
    NotADirectory(PathBuf),

    /// A directory operation was given a path that does not exist
    #[error("directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed while walking a directory tree
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Unrecognised configuration value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
