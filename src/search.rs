//! Directional regex search over the path arena.
//!
//! Searches scan the arena rather than the visible view, so nodes hidden
//! under a folded ancestor are still found; [`reveal`] then unfolds just
//! enough of the tree to show a hit.

use regex::Regex;
use thiserror::Error;

use crate::tree::{NodeId, PathArena, PathEntry, VisibleView};

/// Scan order through the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Increasing node index
    #[default]
    Forward,
    /// Decreasing node index
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Which text of a node a pattern is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTarget {
    /// The whole separator-joined path
    FullPath,
    /// The node's own component
    Component,
}

impl MatchTarget {
    /// Patterns mentioning the separator describe paths; anything else is
    /// matched against the last component only.
    pub fn for_pattern(pattern: &str, separator: char) -> Self {
        if pattern.contains(separator) {
            MatchTarget::FullPath
        } else {
            MatchTarget::Component
        }
    }

    fn text(self, entry: &PathEntry) -> &str {
        match self {
            MatchTarget::FullPath => entry.full_path(),
            MatchTarget::Component => entry.component(),
        }
    }
}

/// The pattern given to a search could not be compiled
#[derive(Error, Debug)]
#[error("invalid pattern '{pattern}': {message}")]
pub struct PatternError {
    pub pattern: String,
    pub message: String,
}

/// A search could not be carried out
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// A repeat was requested before any pattern was entered
    #[error("no previous search pattern")]
    NoActiveSearch,
}

#[derive(Debug)]
struct ActiveSearch {
    pattern: String,
    regex: Regex,
    direction: Direction,
    target: MatchTarget,
}

/// Holds the current search, if any.
///
/// A new search replaces the previous one wholesale; a search is never used
/// up, so `find_next` can be repeated as often as needed.
#[derive(Debug)]
pub struct SearchEngine {
    separator: char,
    active: Option<ActiveSearch>,
}

impl SearchEngine {
    pub fn new(separator: char) -> Self {
        Self {
            separator,
            active: None,
        }
    }

    /// Compile `pattern` and make it the active search.
    ///
    /// On error the previous search stays active.
    pub fn start_search(&mut self, pattern: &str, direction: Direction) -> Result<(), PatternError> {
        let regex = Regex::new(pattern).map_err(|e| PatternError {
            pattern: pattern.to_string(),
            message: error_summary(&e),
        })?;
        let target = MatchTarget::for_pattern(pattern, self.separator);

        tracing::info!(pattern, ?direction, ?target, "search started");

        self.active = Some(ActiveSearch {
            pattern: pattern.to_string(),
            regex,
            direction,
            target,
        });
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn pattern(&self) -> Option<&str> {
        self.active.as_ref().map(|s| s.pattern.as_str())
    }

    pub fn direction(&self) -> Option<Direction> {
        self.active.as_ref().map(|s| s.direction)
    }

    pub fn target(&self) -> Option<MatchTarget> {
        self.active.as_ref().map(|s| s.target)
    }

    /// Test one node against the active search.
    ///
    /// `Ok(false)` means the node does not match; an error means there is
    /// nothing to match with.
    pub fn matches(&self, entry: &PathEntry) -> Result<bool, SearchError> {
        let search = self.active.as_ref().ok_or(SearchError::NoActiveSearch)?;
        Ok(search.regex.is_match(search.target.text(entry)))
    }

    /// Find the next matching node after `from`, in the search direction, or
    /// in the opposite one when `invert` is set. Stops at the end of the
    /// arena without wrapping around; `Ok(None)` means nothing matched.
    pub fn find_next(
        &self,
        arena: &PathArena,
        from: NodeId,
        invert: bool,
    ) -> Result<Option<NodeId>, SearchError> {
        let search = self.active.as_ref().ok_or(SearchError::NoActiveSearch)?;
        let direction = if invert {
            search.direction.reversed()
        } else {
            search.direction
        };

        let start = from.index();
        let candidates: Box<dyn Iterator<Item = NodeId>> = match direction {
            Direction::Forward => Box::new(arena.ids().skip(start + 1)),
            Direction::Backward => Box::new(arena.ids().take(start).rev()),
        };

        for id in candidates {
            if self.matches(&arena[id])? {
                tracing::debug!(node = %id, "search hit");
                return Ok(Some(id));
            }
        }
        Ok(None)
    }
}

/// Last line of a regex error. Syntax errors span several lines, with the
/// actual complaint at the end.
fn error_summary(err: &regex::Error) -> String {
    let text = err.to_string();
    let last = text.lines().rev().find(|l| !l.trim().is_empty()).unwrap_or("");
    last.trim().trim_start_matches("error: ").to_string()
}

/// Unfold the folded ancestors of `target` and return the row showing it.
///
/// # Panics
///
/// Panics if `target` cannot be reached from the view, which means the view
/// and arena disagree.
pub fn reveal(arena: &mut PathArena, view: &mut VisibleView, target: NodeId) -> usize {
    let chain = arena.ancestry(target);
    let mut expected = 0;

    let mut row = 0;
    while row < view.len() {
        if view[row] == chain[expected] {
            if expected + 1 == chain.len() {
                return row;
            }
            if arena[chain[expected]].is_folded() {
                view.unfold(arena, row);
            }
            expected += 1;
        }
        row += 1;
    }

    panic!("reveal: node {target} is not reachable from the view");
}
