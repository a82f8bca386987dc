//! Path arena and tree construction.

use std::ops::Index;

use super::entry::{FoldState, NodeId, PathEntry};
use super::view::VisibleView;

/// Append-only store owning every node of the tree.
///
/// Entries are only added by [`PathArena::build`]; afterwards every
/// [`NodeId`] stays valid for the lifetime of the arena.
#[derive(Debug, Default)]
pub struct PathArena {
    entries: Vec<PathEntry>,
    roots: Vec<NodeId>,
    separator: char,
}

impl PathArena {
    /// Build the tree from lines sorted by [`crate::lines::sort_lines`].
    ///
    /// Every node starts in `initial_state`. The returned view holds the rows
    /// visible under that state: everything when unfolded, only the top-level
    /// nodes when folded.
    pub fn build<S: AsRef<str>>(
        lines: &[S],
        separator: char,
        initial_state: FoldState,
    ) -> (PathArena, VisibleView) {
        let mut arena = PathArena {
            entries: Vec::with_capacity(lines.len()),
            roots: Vec::new(),
            separator,
        };
        let mut view = VisibleView::with_capacity(lines.len());

        // Chain of ancestors of the most recent node, one per depth, and
        // whether each of them currently exposes its children.
        let mut stack: Vec<NodeId> = Vec::new();
        let mut open: Vec<bool> = Vec::new();

        for line in lines {
            let line = line.as_ref();
            if line.is_empty() {
                continue;
            }

            let mut depth = 0;
            for component in line.split(separator) {
                if component.is_empty() && depth > 0 {
                    continue;
                }

                if depth < stack.len() && arena[stack[depth]].component == component {
                    depth += 1;
                    continue;
                }

                stack.truncate(depth);
                open.truncate(depth);

                let parent = stack.last().copied();
                let visible = open.last().copied().unwrap_or(true);
                let id = arena.push(parent, component, initial_state);

                if visible {
                    view.push(id);
                }
                stack.push(id);
                open.push(visible && initial_state == FoldState::Unfolded);
                depth += 1;
            }
        }

        tracing::debug!(
            nodes = arena.len(),
            visible = view.len(),
            "built path tree"
        );

        (arena, view)
    }

    fn push(&mut self, parent: Option<NodeId>, component: &str, state: FoldState) -> NodeId {
        let id = NodeId(self.entries.len());
        let (depth, full_path) = match parent {
            Some(p) => {
                let parent = &self.entries[p.0];
                let mut full_path =
                    String::with_capacity(parent.full_path.len() + 1 + component.len());
                full_path.push_str(&parent.full_path);
                full_path.push(self.separator);
                full_path.push_str(component);
                (parent.depth + 1, full_path)
            }
            None => (0, component.to_string()),
        };

        self.entries.push(PathEntry {
            component: component.to_string(),
            full_path,
            depth,
            state,
            parent,
            children: Vec::new(),
        });

        match parent {
            Some(p) => self.entries[p.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&PathEntry> {
        self.entries.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut PathEntry {
        &mut self.entries[id.0]
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Top-level nodes, in input order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// All node ids, in input order
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator {
        (0..self.entries.len()).map(NodeId)
    }

    /// Id of the node at `index`, if the arena holds one
    pub fn id_at(&self, index: usize) -> Option<NodeId> {
        (index < self.entries.len()).then_some(NodeId(index))
    }

    /// Ancestors of `id` from the top-level node down to `id` itself
    pub fn ancestry(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = vec![id];
        let mut current = self[id].parent;
        while let Some(parent) = current {
            chain.push(parent);
            current = self[parent].parent;
        }
        chain.reverse();
        chain
    }
}

impl Index<NodeId> for PathArena {
    type Output = PathEntry;

    fn index(&self, id: NodeId) -> &PathEntry {
        &self.entries[id.0]
    }
}
