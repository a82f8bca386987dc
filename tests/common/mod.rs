//! Common test utilities for foldtree CLI tests.
//!
//! `TestEnv` runs the binary with an isolated config directory and no
//! inherited `FOLDTREE_*` variables. Standard output is always a pipe, so
//! the binary never reaches the interactive interface.

#![allow(dead_code)]

pub mod fixtures;

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

pub use fixtures::*;

/// Result of running the foldtree binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

pub struct TestEnv {
    /// Stands in for `$XDG_CONFIG_HOME`
    pub config_home: TempDir,
    /// Scratch space for input files
    pub work_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            config_home: TempDir::new().unwrap(),
            work_dir: TempDir::new().unwrap(),
        }
    }

    /// Write the user config picked up without `--config`
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home.path().join("foldtree");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_foldtree"));
        cmd.current_dir(self.work_dir.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("FOLDTREE_SEPARATOR")
            .env_remove("FOLDTREE_FOLDED")
            .env_remove("FOLDTREE_GLYPHS")
            .env_remove("FOLDTREE_LOG")
            .env_remove("RUST_LOG")
            .stdin(Stdio::null());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.command().args(args).output().unwrap().into()
    }
}
