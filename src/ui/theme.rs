//! Design tokens for the tree viewer: colors, scroll markers and fold glyphs.
//!
//! All colors and glyphs must be sourced from this module.

use crossterm::style::Color;

use crate::config::GlyphMode;

use super::terminal::TerminalCapabilities;

/// Row and status colors
pub mod colors {
    use super::Color;

    /// Cursor row and scroll markers
    pub const HIGHLIGHT_FG: Color = Color::Black;
    pub const HIGHLIGHT_BG: Color = Color::White;
    /// Status line errors
    pub const ERROR: Color = Color::Red;
    /// Position counter
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const LEAF: &str = "•";
    pub const FOLDED: &str = "▶";
    pub const UNFOLDED: &str = "▼";
    pub const ROOT: &str = "/";
}

pub mod icons_ascii {
    pub const LEAF: &str = "*";
    pub const FOLDED: &str = "+";
    pub const UNFOLDED: &str = "-";
    pub const ROOT: &str = "/";
}

pub mod markers {
    /// Line continues past the left edge
    pub const CUT_LEFT: char = '<';
    /// Line continues past the right edge
    pub const CUT_RIGHT: char = '>';
}

/// Glyph set chosen once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub leaf: &'static str,
    pub folded: &'static str,
    pub unfolded: &'static str,
    pub root: &'static str,
}

impl Glyphs {
    pub fn unicode() -> Self {
        Self {
            leaf: icons::LEAF,
            folded: icons::FOLDED,
            unfolded: icons::UNFOLDED,
            root: icons::ROOT,
        }
    }

    pub fn ascii() -> Self {
        Self {
            leaf: icons_ascii::LEAF,
            folded: icons_ascii::FOLDED,
            unfolded: icons_ascii::UNFOLDED,
            root: icons_ascii::ROOT,
        }
    }

    pub fn select(mode: GlyphMode, caps: &TerminalCapabilities) -> Self {
        match mode {
            GlyphMode::Unicode => Self::unicode(),
            GlyphMode::Ascii => Self::ascii(),
            GlyphMode::Auto if caps.supports_unicode => Self::unicode(),
            GlyphMode::Auto => Self::ascii(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(supports_unicode: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_unicode,
            width: 80,
            height: 24,
        }
    }

    #[test]
    fn auto_follows_terminal() {
        assert_eq!(Glyphs::select(GlyphMode::Auto, &caps(true)), Glyphs::unicode());
        assert_eq!(Glyphs::select(GlyphMode::Auto, &caps(false)), Glyphs::ascii());
    }

    #[test]
    fn explicit_mode_wins() {
        assert_eq!(Glyphs::select(GlyphMode::Ascii, &caps(true)), Glyphs::ascii());
        assert_eq!(Glyphs::select(GlyphMode::Unicode, &caps(false)), Glyphs::unicode());
    }
}
