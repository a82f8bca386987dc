//! Flattened projection of the tree: the rows currently on screen.
//!
//! The view is the depth-first pre-order walk of the tree restricted to
//! unfolded subtrees. Folding and unfolding splice blocks of rows in place,
//! so their cost is proportional to the rows moved rather than the tree size.

use std::ops::Index;

use super::arena::PathArena;
use super::entry::{FoldState, NodeId};

/// Rows added or removed by a [`VisibleView::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChange {
    Unfolded(usize),
    Folded(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleView {
    rows: Vec<NodeId>,
}

impl VisibleView {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, id: NodeId) {
        self.rows.push(id);
    }

    /// Show the children of the node at `row`.
    ///
    /// Children that were left unfolded by an earlier cycle are unfolded
    /// again, so the subtree reappears exactly as it was folded. Returns the
    /// number of rows inserted.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds. Unfolding a row that is already
    /// unfolded duplicates its children; callers check the state first.
    pub fn unfold(&mut self, arena: &mut PathArena, row: usize) -> usize {
        assert!(
            row < self.rows.len(),
            "unfold: row {row} out of bounds for view of {} rows",
            self.rows.len()
        );

        let id = self.rows[row];
        arena.get_mut(id).state = FoldState::Unfolded;

        let first = row + 1;
        let children = arena[id].children();
        let count = children.len();
        if count == 0 {
            return 0;
        }

        self.rows.splice(first..first, children.iter().copied());

        // Each recursive unfold pushes later siblings further down.
        let mut growth = 0;
        for j in 0..count {
            let child = arena[id].children()[j];
            if arena[child].state() == FoldState::Unfolded {
                growth += self.unfold(arena, first + j + growth);
            }
        }

        count + growth
    }

    /// Hide every row below the node at `row`. Returns the number of rows
    /// removed. Descendants keep their own fold state.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn fold(&mut self, arena: &mut PathArena, row: usize) -> usize {
        assert!(
            row < self.rows.len(),
            "fold: row {row} out of bounds for view of {} rows",
            self.rows.len()
        );

        let id = self.rows[row];
        arena.get_mut(id).state = FoldState::Folded;
        if !arena[id].has_children() {
            return 0;
        }

        let depth = arena[id].depth();
        let first = row + 1;
        let end = self.rows[first..]
            .iter()
            .position(|&n| arena[n].depth() <= depth)
            .map_or(self.rows.len(), |offset| first + offset);

        self.rows.drain(first..end);
        end - first
    }

    /// Fold an unfolded row or unfold a folded one.
    pub fn toggle(&mut self, arena: &mut PathArena, row: usize) -> ViewChange {
        let id = self[row];
        let change = match arena[id].state().toggled() {
            FoldState::Folded => ViewChange::Folded(self.fold(arena, row)),
            FoldState::Unfolded => ViewChange::Unfolded(self.unfold(arena, row)),
        };
        tracing::debug!(node = %id, row, ?change, "toggled fold");
        change
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<NodeId> {
        self.rows.get(row).copied()
    }

    /// Row currently showing `id`, if it is visible
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.rows.iter().position(|&n| n == id)
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.rows.iter().copied()
    }
}

impl Index<usize> for VisibleView {
    type Output = NodeId;

    fn index(&self, row: usize) -> &NodeId {
        &self.rows[row]
    }
}
