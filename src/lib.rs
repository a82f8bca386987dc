//! foldtree - interactive collapsible tree viewer for path lists
//!
//! Reads newline-separated paths (the output of `find`, `git ls-files`,
//! `tar -t` and the like), builds a tree from them and lets the user fold,
//! unfold and search it in the terminal.

pub mod commands;
pub mod config;
pub mod error;
pub mod lines;
pub mod logging;
pub mod search;
pub mod tree;
pub mod ui;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use error::{FoldtreeError, FoldtreeResult};
pub use search::{reveal, Direction, MatchTarget, SearchEngine, SearchError};
pub use tree::{FoldState, NodeId, PathArena, PathEntry, ViewChange, VisibleView};
