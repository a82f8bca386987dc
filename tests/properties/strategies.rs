//! Shared generators.

use foldtree::lines::sort_lines;
use foldtree::{NodeId, PathArena, VisibleView};
use proptest::prelude::*;

/// Short paths over a tiny alphabet so prefixes are shared often; `.` sorts
/// above the separator in raw bytes, which exercises the collation.
pub fn path_lines() -> impl Strategy<Value = Vec<String>> {
    let segment = proptest::string::string_regex("[abc.]{1,2}").unwrap();
    let path = proptest::collection::vec(segment, 1..=4).prop_map(|parts| parts.join("/"));
    proptest::collection::vec(path, 0..40).prop_map(|mut lines| {
        sort_lines(&mut lines, '/');
        lines
    })
}

/// Rows the view must hold: pre-order walk descending only into unfolded
/// nodes.
pub fn expected_rows(arena: &PathArena) -> Vec<NodeId> {
    fn walk(arena: &PathArena, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        if !arena[id].is_folded() {
            for &child in arena[id].children() {
                walk(arena, child, out);
            }
        }
    }

    let mut out = Vec::new();
    for &root in arena.roots() {
        walk(arena, root, &mut out);
    }
    out
}

pub fn assert_view_consistent(arena: &PathArena, view: &VisibleView) {
    assert_eq!(view.as_slice(), expected_rows(arena).as_slice());
}
