//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FoldtreeError, FoldtreeResult};

use super::types::{Config, GlyphMode};

/// Non-fatal configuration warning surfaced in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FoldtreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FoldtreeError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, else the user config, else defaults.
///
/// An explicit path must exist; a missing user config is not an error.
/// Environment overrides are applied in every case.
pub fn load_or_default(explicit: Option<&Path>) -> FoldtreeResult<(Config, Vec<ConfigWarning>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|p| p.exists()),
    };

    let (config, warnings) = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// `$XDG_CONFIG_HOME/foldtree/config.toml`, or the platform config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("foldtree").join("config.toml"))
}

/// Apply environment variable overrides (FOLDTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_impl(config, |key| std::env::var(key).ok())
}

pub(super) fn with_env_overrides_impl(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // FOLDTREE_SEPARATOR
    if let Some(sep) = get_env("FOLDTREE_SEPARATOR") {
        if !sep.is_empty() {
            config.tree.separator = sep;
        }
    }

    // FOLDTREE_FOLDED
    if let Some(val) = get_env("FOLDTREE_FOLDED") {
        config.tree.folded = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes");
    }

    // FOLDTREE_GLYPHS
    if let Some(val) = get_env("FOLDTREE_GLYPHS") {
        config.ui.glyphs = match val.to_lowercase().as_str() {
            "unicode" => GlyphMode::Unicode,
            "ascii" => GlyphMode::Ascii,
            _ => GlyphMode::Auto,
        };
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// 1-based line on which `key` is assigned, e.g. `key = ...`
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

/// Closest known key within two edits of `unknown`
pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &[
        "tree",
        "separator",
        "folded",
        "ui",
        "indent",
        "glyphs",
        "scroll_step",
        "commands",
        "key",
        "run",
    ];

    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .min_by_key(|(dist, _)| *dist)
        .filter(|(dist, _)| *dist <= 2)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }
    row[b.len()]
}
