//! Error types for foldtree
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//! Search-specific errors live in [`crate::search`].

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for foldtree operations
pub type FoldtreeResult<T> = Result<T, FoldtreeError>;

/// Main error type for foldtree operations
#[derive(Error, Debug)]
pub enum FoldtreeError {
    /// Input file given on the command line does not exist
    #[error("file '{path}' does not exist")]
    InputNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("failed to read config {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Config parsed but holds an unusable value
    #[error("invalid config value for '{key}': {message}")]
    InvalidConfig { key: String, message: String },

    /// A bound shell command could not be started
    #[error("failed to run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A bound shell command exited unsuccessfully
    #[error("'{command}' exited with {status}")]
    CommandFailed { command: String, status: ExitStatus },
}
