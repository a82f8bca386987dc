//! Path entry data structure.

use std::fmt;

/// Stable handle to a [`PathEntry`] inside a [`super::PathArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the entry in the arena (input order).
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a node's children are projected into the visible view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoldState {
    /// Children are shown
    #[default]
    Unfolded,
    /// Children are hidden
    Folded,
}

impl FoldState {
    pub fn toggled(self) -> Self {
        match self {
            FoldState::Unfolded => FoldState::Folded,
            FoldState::Folded => FoldState::Unfolded,
        }
    }
}

/// A node in the path tree
#[derive(Debug, Clone)]
pub struct PathEntry {
    /// Own path segment; empty only for the root
    pub(crate) component: String,
    /// Ancestors' components and this one, joined by the separator
    pub(crate) full_path: String,
    pub(crate) depth: usize,
    pub(crate) state: FoldState,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl PathEntry {
    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn state(&self) -> FoldState {
        self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// The synthetic root produced by a leading separator
    pub fn is_root(&self) -> bool {
        self.component.is_empty()
    }

    pub fn is_folded(&self) -> bool {
        self.state == FoldState::Folded
    }
}
