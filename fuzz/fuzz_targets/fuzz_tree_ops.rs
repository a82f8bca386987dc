#![no_main]

use libfuzzer_sys::fuzz_target;

use foldtree::lines::{read_lines, sort_lines};
use foldtree::{FoldState, PathArena};

// Input: first byte picks the initial state, the next 16 drive toggles,
// the rest is the path listing.
fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }
    let state = if data[0] & 1 == 0 {
        FoldState::Unfolded
    } else {
        FoldState::Folded
    };

    let Ok(mut lines) = read_lines(&data[17..]) else {
        return;
    };
    sort_lines(&mut lines, '/');

    let (mut arena, mut view) = PathArena::build(&lines, '/', state);
    for &b in &data[1..17] {
        if view.is_empty() {
            break;
        }
        let row = b as usize % view.len();
        view.toggle(&mut arena, row);
    }

    // The view must remain a pre-order walk of the unfolded subtrees
    let mut prev_depth = None;
    for id in view.iter() {
        let depth = arena[id].depth();
        if let Some(prev) = prev_depth {
            assert!(depth <= prev + 1);
        }
        if let Some(parent) = arena[id].parent() {
            assert!(!arena[parent].is_folded());
        }
        prev_depth = Some(depth);
    }
});
