//! What the controlling terminal can do.

use std::io;

use is_terminal::IsTerminal;

/// Size used when the terminal does not report one
const FALLBACK_SIZE: (u16, u16) = (80, 24);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Standard output is a terminal
    pub is_tty: bool,
    pub supports_unicode: bool,
    pub width: u16,
    pub height: u16,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    TerminalCapabilities::from_parts(
        |key| std::env::var(key).ok(),
        io::stdout().is_terminal(),
        crossterm::terminal::size().ok(),
    )
}

impl TerminalCapabilities {
    fn from_parts(
        get_env: impl Fn(&str) -> Option<String>,
        is_tty: bool,
        size: Option<(u16, u16)>,
    ) -> Self {
        let dumb = get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let (width, height) = size.unwrap_or(FALLBACK_SIZE);

        Self {
            is_tty,
            supports_unicode: !dumb && locale_is_utf8(&get_env),
            width,
            height,
        }
    }
}

/// Locale lookup order follows POSIX: the first non-empty of `LC_ALL`,
/// `LC_CTYPE`, `LANG` decides. No locale at all counts as UTF-8.
fn locale_is_utf8(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .filter_map(|key| get_env(key))
        .find(|val| !val.is_empty())
        .map_or(true, |val| {
            let val = val.to_ascii_lowercase();
            val.contains("utf-8") || val.contains("utf8")
        })
}
