//! Diagnostic log file.
//!
//! The terminal belongs to the interface, so logs only go to a file and
//! nothing is installed unless one is requested.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::FoldtreeResult;

pub const LOG_FILE_ENV: &str = "FOLDTREE_LOG";

/// Default filter for a `-v` count
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `--log-file` if given, else `FOLDTREE_LOG` when set and non-empty.
pub fn log_file_path(
    cli: Option<PathBuf>,
    get_env: impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    cli.or_else(|| {
        get_env(LOG_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Append logs to `log_file`. `RUST_LOG` overrides the verbosity level.
pub fn init_file_logging(log_file: &Path, verbosity: u8) -> FoldtreeResult<()> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(file = %log_file.display(), "logging initialized");
    Ok(())
}
