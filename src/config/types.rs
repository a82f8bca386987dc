//! Configuration type definitions

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FoldtreeError, FoldtreeResult};
use crate::tree::FoldState;

use super::loader::{self, ConfigWarning};

/// Tree construction settings
#[derive(Debug, Clone, Deserialize)]
pub struct TreeConfig {
    /// Path separator; must be a single character
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Start with every node folded
    #[serde(default)]
    pub folded: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            folded: false,
        }
    }
}

fn default_separator() -> String {
    "/".to_string()
}

/// Glyph set used for fold markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlyphMode {
    /// Unicode unless the terminal looks incapable
    #[default]
    Auto,
    Unicode,
    Ascii,
}

/// Interface settings
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Columns of indentation per depth level
    #[serde(default = "default_indent")]
    pub indent: usize,

    #[serde(default)]
    pub glyphs: GlyphMode,

    /// Columns moved by one horizontal scroll
    #[serde(default = "default_scroll_step")]
    pub scroll_step: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            glyphs: GlyphMode::default(),
            scroll_step: default_scroll_step(),
        }
    }
}

fn default_indent() -> usize {
    2
}

fn default_scroll_step() -> usize {
    4
}

/// A key bound to a shell command, e.g. for copying to the clipboard
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandBinding {
    pub key: String,
    pub run: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub commands: Vec<CommandBinding>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FoldtreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FoldtreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, the user config, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> FoldtreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (FOLDTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Check values serde cannot express
    pub fn validate(&self) -> FoldtreeResult<()> {
        single_char(&self.tree.separator).ok_or_else(|| FoldtreeError::InvalidConfig {
            key: "tree.separator".to_string(),
            message: format!(
                "must be a single character, got '{}'",
                self.tree.separator
            ),
        })?;

        if self.ui.indent == 0 {
            return Err(FoldtreeError::InvalidConfig {
                key: "ui.indent".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for binding in &self.commands {
            let key = single_char(&binding.key).ok_or_else(|| FoldtreeError::InvalidConfig {
                key: "commands.key".to_string(),
                message: format!("mapping must be a single character, got '{}'", binding.key),
            })?;
            if !seen.insert(key) {
                return Err(FoldtreeError::InvalidConfig {
                    key: "commands.key".to_string(),
                    message: format!("'{}' is bound more than once", key),
                });
            }
            if binding.run.trim().is_empty() {
                return Err(FoldtreeError::InvalidConfig {
                    key: "commands.run".to_string(),
                    message: format!("command for '{}' is empty", key),
                });
            }
        }

        Ok(())
    }

    /// The separator as a char. Falls back to `/` for unvalidated configs.
    pub fn separator(&self) -> char {
        single_char(&self.tree.separator).unwrap_or('/')
    }

    pub fn initial_state(&self) -> FoldState {
        if self.tree.folded {
            FoldState::Folded
        } else {
            FoldState::Unfolded
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
