#![no_main]

use libfuzzer_sys::fuzz_target;

use foldtree::{reveal, Direction, FoldState, PathArena, SearchEngine};

const PATHS: &[&str] = &["/", "/etc", "/etc/hosts", "src/main.rs", "src/ui/app.rs", "target"];

fuzz_target!(|data: &[u8]| {
    let Ok(pattern) = std::str::from_utf8(data) else {
        return;
    };

    let (mut arena, mut view) = PathArena::build(PATHS, '/', FoldState::Folded);
    let mut engine = SearchEngine::new('/');
    if engine.start_search(pattern, Direction::Forward).is_err() {
        return;
    }

    let mut from = arena.roots()[0];
    while let Ok(Some(hit)) = engine.find_next(&arena, from, false) {
        let row = reveal(&mut arena, &mut view, hit);
        assert_eq!(view[row], hit);
        from = hit;
    }
});
