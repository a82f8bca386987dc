//! Test fixtures - reusable input and config content.

/// A small `find`-style listing
pub const FIND_OUTPUT: &str = "\
.
./src
./src/main.rs
./src/lib.rs
./Cargo.toml
";

/// Config with every section set
pub const FULL_CONFIG: &str = r#"
[tree]
separator = "/"
folded = true

[ui]
indent = 4
glyphs = "ascii"
scroll_step = 8

[[commands]]
key = "y"
run = "cat > /dev/null"
"#;
