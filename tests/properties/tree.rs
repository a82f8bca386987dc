//! Property tests for tree building and fold/unfold.

use proptest::prelude::*;

use foldtree::{FoldState, PathArena};

use crate::strategies::{assert_view_consistent, path_lines};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every full path is its ancestors' components joined by the
    /// separator, and every input line names a node.
    #[test]
    fn property_full_path_rebuilds_from_components(lines in path_lines()) {
        let (arena, _) = PathArena::build(&lines, '/', FoldState::Unfolded);

        for id in arena.ids() {
            let joined: Vec<&str> = arena
                .ancestry(id)
                .into_iter()
                .map(|a| arena[a].component())
                .collect();
            prop_assert_eq!(joined.join("/"), arena[id].full_path());
            prop_assert_eq!(arena[id].depth() + 1, joined.len());
        }

        for line in &lines {
            prop_assert!(arena.ids().any(|id| arena[id].full_path() == line));
        }
    }

    /// PROPERTY: the initial view is the walk of the unfolded subtrees, for
    /// either initial state.
    #[test]
    fn property_initial_view_is_consistent(lines in path_lines(), folded in any::<bool>()) {
        let state = if folded { FoldState::Folded } else { FoldState::Unfolded };
        let (arena, view) = PathArena::build(&lines, '/', state);

        assert_view_consistent(&arena, &view);
        if folded {
            prop_assert_eq!(view.len(), arena.roots().len());
        } else {
            prop_assert_eq!(view.len(), arena.len());
        }
    }

    /// PROPERTY: folding then unfolding a row restores the view exactly.
    #[test]
    fn property_fold_unfold_round_trip(lines in path_lines(), pick in any::<prop::sample::Index>()) {
        let (mut arena, mut view) = PathArena::build(&lines, '/', FoldState::Unfolded);
        prop_assume!(!view.is_empty());

        let row = pick.index(view.len());
        let before = view.clone();

        view.fold(&mut arena, row);
        view.unfold(&mut arena, row);

        prop_assert_eq!(view, before);
    }

    /// PROPERTY: folding removes exactly the contiguous block of deeper rows
    /// below the folded one.
    #[test]
    fn property_fold_removes_deeper_block(lines in path_lines(), pick in any::<prop::sample::Index>()) {
        let (mut arena, mut view) = PathArena::build(&lines, '/', FoldState::Unfolded);
        prop_assume!(!view.is_empty());

        let row = pick.index(view.len());
        let depth = arena[view[row]].depth();
        let before = view.as_slice().to_vec();

        let removed = view.fold(&mut arena, row);

        for id in &before[row + 1..row + 1 + removed] {
            prop_assert!(arena[*id].depth() > depth);
        }
        if let Some(next) = before.get(row + 1 + removed) {
            prop_assert!(arena[*next].depth() <= depth);
        }
        prop_assert_eq!(view.len(), before.len() - removed);
        assert_view_consistent(&arena, &view);
    }

    /// PROPERTY: unfolding reports exactly the number of rows it inserted.
    #[test]
    fn property_unfold_growth_matches_length(lines in path_lines(), pick in any::<prop::sample::Index>()) {
        let (mut arena, mut view) = PathArena::build(&lines, '/', FoldState::Folded);
        prop_assume!(!view.is_empty());

        let row = pick.index(view.len());
        let before = view.len();
        let growth = view.unfold(&mut arena, row);

        prop_assert_eq!(view.len() - before, growth);
        prop_assert_eq!(growth, arena[view[row]].child_count());
    }

    /// PROPERTY: with nested folds already in place, unfolding a folded row
    /// reports exactly the rows it inserted, including those re-exposed
    /// from unfolded descendants.
    #[test]
    fn property_nested_unfold_counts_inserted_rows(
        lines in path_lines(),
        mask in proptest::collection::vec(any::<bool>(), 64),
        pick in any::<prop::sample::Index>(),
    ) {
        let (mut arena, mut view) = PathArena::build(&lines, '/', FoldState::Unfolded);
        prop_assume!(!view.is_empty());

        // Fold deepest rows first so every chosen node is still visible.
        let mut chosen: Vec<_> = arena
            .ids()
            .filter(|id| mask[id.index() % mask.len()])
            .collect();
        chosen.sort_by_key(|id| std::cmp::Reverse(arena[*id].depth()));
        for id in chosen {
            if let Some(row) = view.position(id) {
                if !arena[id].is_folded() {
                    view.fold(&mut arena, row);
                }
            }
        }
        assert_view_consistent(&arena, &view);

        let folded_rows: Vec<usize> = (0..view.len())
            .filter(|&row| arena[view[row]].is_folded())
            .collect();
        prop_assume!(!folded_rows.is_empty());

        let row = folded_rows[pick.index(folded_rows.len())];
        let before = view.len();
        let inserted = view.unfold(&mut arena, row);

        prop_assert_eq!(view.len() - before, inserted);
        prop_assert!(inserted >= arena[view[row]].child_count());
        assert_view_consistent(&arena, &view);
    }

    /// PROPERTY: any sequence of toggles keeps the view consistent with the
    /// fold states.
    #[test]
    fn property_toggle_sequence_keeps_view_consistent(
        lines in path_lines(),
        folded in any::<bool>(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..20),
    ) {
        let state = if folded { FoldState::Folded } else { FoldState::Unfolded };
        let (mut arena, mut view) = PathArena::build(&lines, '/', state);
        prop_assume!(!view.is_empty());

        for pick in picks {
            let row = pick.index(view.len());
            view.toggle(&mut arena, row);
            assert_view_consistent(&arena, &view);
        }
    }
}
