//! User-bound shell commands (clipboard copy and the like).
//!
//! A command receives the selected node's full path on stdin and in the
//! `FOLDTREE_PATH` environment variable. Commands run synchronously: the
//! interface waits for the child to exit before handling the next event.

use std::collections::HashMap;
use std::io::Write;
use std::process::{Command, Stdio};

use crate::config::CommandBinding;
use crate::error::{FoldtreeError, FoldtreeResult};

/// Key → shell command lookup built from the config
#[derive(Debug, Clone, Default)]
pub struct CommandBindings {
    by_key: HashMap<char, String>,
}

impl CommandBindings {
    /// Build from validated bindings; entries whose key is not a single
    /// character are skipped.
    pub fn from_config(bindings: &[CommandBinding]) -> Self {
        let by_key = bindings
            .iter()
            .filter_map(|b| {
                let mut chars = b.key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some((c, b.run.clone())),
                    _ => None,
                }
            })
            .collect();
        Self { by_key }
    }

    pub fn get(&self, key: char) -> Option<&str> {
        self.by_key.get(&key).map(String::as_str)
    }
}

/// Run `command` through `sh -c`, feeding it `full_path`, and wait for it.
pub fn run_command(command: &str, full_path: &str) -> FoldtreeResult<()> {
    tracing::info!(command, path = full_path, "running bound command");

    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .env("FOLDTREE_PATH", full_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| FoldtreeError::CommandSpawn {
            command: command.to_string(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        // A command that ignores its input closes the pipe early; that is
        // not a failure of the command itself.
        match stdin.write_all(full_path.as_bytes()) {
            Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => {
                return Err(FoldtreeError::Io(e));
            }
            _ => {}
        }
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(FoldtreeError::CommandFailed {
            command: command.to_string(),
            status,
        })
    }
}
