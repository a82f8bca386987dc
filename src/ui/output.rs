//! Messages printed to stderr before the interface takes over the terminal.

use std::io::{self, Write};

use crate::config::ConfigWarning;

pub fn print_config_warnings(out: &mut impl Write, warnings: &[ConfigWarning]) -> io::Result<()> {
    for w in warnings {
        tracing::warn!(key = %w.key, file = %w.file.display(), line = ?w.line, "unknown config key");

        match w.line {
            Some(line) => writeln!(
                out,
                "foldtree: unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            )?,
            None => writeln!(
                out,
                "foldtree: unknown config key '{}' in {}",
                w.key,
                w.file.display()
            )?,
        }

        if let Some(suggestion) = &w.suggestion {
            writeln!(out, "   did you mean '{}'?", suggestion)?;
        }
    }
    Ok(())
}
