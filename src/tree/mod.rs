//! Path tree index
//!
//! Turns a sorted list of path-like lines into a tree and keeps a flattened,
//! foldable projection of it for drawing.
//!
//! # Module Structure
//!
//! - `entry` - PathEntry, NodeId and FoldState
//! - `arena` - PathArena storage and the single-pass builder
//! - `view` - VisibleView with in-place fold/unfold

mod arena;
mod entry;
mod view;

pub use arena::PathArena;
pub use entry::{FoldState, NodeId, PathEntry};
pub use view::{ViewChange, VisibleView};
