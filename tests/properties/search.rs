//! Property tests for search and reveal.

use proptest::prelude::*;

use foldtree::{reveal, Direction, FoldState, NodeId, PathArena, SearchEngine};

use crate::strategies::{assert_view_consistent, path_lines};

fn pattern() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["a", "^b$", "c.", "a/b", "^c/", "ab|ca"])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: forward search returns the first match after `from` in
    /// arena order, backward search the last match before it.
    #[test]
    fn property_search_scans_in_arena_order(
        lines in path_lines(),
        pattern in pattern(),
        backward in any::<bool>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let (arena, _) = PathArena::build(&lines, '/', FoldState::Unfolded);
        prop_assume!(!arena.is_empty());

        let direction = if backward { Direction::Backward } else { Direction::Forward };
        let mut engine = SearchEngine::new('/');
        engine.start_search(pattern, direction).unwrap();

        let from = arena.id_at(pick.index(arena.len())).unwrap();
        let found = engine.find_next(&arena, from, false).unwrap();

        let matching: Vec<NodeId> = arena
            .ids()
            .filter(|&id| engine.matches(&arena[id]).unwrap())
            .collect();
        let expected = if backward {
            matching.iter().rev().find(|id| id.index() < from.index()).copied()
        } else {
            matching.iter().find(|id| id.index() > from.index()).copied()
        };

        prop_assert_eq!(found, expected);
    }

    /// PROPERTY: inverting a search scans the opposite way.
    #[test]
    fn property_invert_reverses_direction(
        lines in path_lines(),
        pattern in pattern(),
        pick in any::<prop::sample::Index>(),
    ) {
        let (arena, _) = PathArena::build(&lines, '/', FoldState::Unfolded);
        prop_assume!(!arena.is_empty());
        let from = arena.id_at(pick.index(arena.len())).unwrap();

        let mut forward = SearchEngine::new('/');
        forward.start_search(pattern, Direction::Forward).unwrap();
        let mut backward = SearchEngine::new('/');
        backward.start_search(pattern, Direction::Backward).unwrap();

        prop_assert_eq!(
            forward.find_next(&arena, from, true).unwrap(),
            backward.find_next(&arena, from, false).unwrap()
        );
    }

    /// PROPERTY: revealing any node makes it visible at the returned row and
    /// leaves the view consistent.
    #[test]
    fn property_reveal_shows_target(lines in path_lines(), pick in any::<prop::sample::Index>()) {
        let (mut arena, mut view) = PathArena::build(&lines, '/', FoldState::Folded);
        prop_assume!(!arena.is_empty());

        let target = arena.id_at(pick.index(arena.len())).unwrap();
        let row = reveal(&mut arena, &mut view, target);

        prop_assert_eq!(view[row], target);
        assert_view_consistent(&arena, &view);
    }
}
