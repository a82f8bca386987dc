//! Configuration module for foldtree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FOLDTREE_*)
//! 3. User config (~/.config/foldtree/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{default_config_path, ConfigWarning};
pub use types::{CommandBinding, Config, GlyphMode, TreeConfig, UiConfig};
