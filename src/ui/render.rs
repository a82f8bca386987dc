//! Frame rendering.
//!
//! `render_frame` turns the application state into plain text rows; `draw`
//! writes a frame to the terminal.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::lines::first_nonblank;
use crate::search::Direction;
use crate::tree::PathEntry;

use super::app::{App, Mode, StatusKind, StatusMessage};
use super::theme::{colors, markers, Glyphs};

/// A line cut to the screen width.
///
/// `body` holds the visible columns between the optional markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipped {
    pub body: String,
    pub cut_left: bool,
    pub cut_right: bool,
}

impl Clipped {
    /// The line as shown, markers included
    pub fn plain(&self) -> String {
        let mut out = String::new();
        if self.cut_left {
            out.push(markers::CUT_LEFT);
        }
        out.push_str(&self.body);
        if self.cut_right {
            out.push(markers::CUT_RIGHT);
        }
        out
    }
}

/// Show `width` columns of `line` starting at column `left`.
///
/// A `<` replaces the first column when text before `left` is hidden (the
/// indentation does not count), a `>` the last one when text continues past
/// the right edge.
pub fn clip(line: &str, left: usize, width: usize) -> Clipped {
    if width == 0 {
        return Clipped {
            body: String::new(),
            cut_left: false,
            cut_right: false,
        };
    }

    let total = line.width();
    let cut_left = left > first_nonblank(line);
    let cut_right = total > left + width && width > usize::from(cut_left);

    let start = left + usize::from(cut_left);
    let avail = width - usize::from(cut_left) - usize::from(cut_right);
    let mut body = slice_columns(line, start, avail);

    if cut_right {
        let pad = avail.saturating_sub(body.width());
        body.extend(std::iter::repeat(' ').take(pad));
    }

    Clipped {
        body,
        cut_left,
        cut_right,
    }
}

/// Columns `[start, start + len)` of `line`. Wide chars split by the left
/// edge become spaces; those split by the right edge are dropped.
fn slice_columns(line: &str, start: usize, len: usize) -> String {
    let end = start + len;
    let mut out = String::new();
    let mut col = 0;

    for ch in line.chars() {
        if col >= end {
            break;
        }
        let w = ch.width().unwrap_or(0);
        if col >= start {
            if col + w > end {
                break;
            }
            out.push(ch);
        } else if col + w > start {
            let visible = (col + w).min(end) - start;
            out.extend(std::iter::repeat(' ').take(visible));
        }
        col += w;
    }
    out
}

/// Indentation, fold glyph and label for one entry.
pub fn row_text(entry: &PathEntry, indent: usize, glyphs: &Glyphs) -> String {
    let glyph = if !entry.has_children() {
        glyphs.leaf
    } else if entry.is_folded() {
        glyphs.folded
    } else {
        glyphs.unfolded
    };

    let label: String = if entry.component().is_empty() {
        glyphs.root.to_string()
    } else {
        entry
            .component()
            .chars()
            .map(|c| if c.is_control() { '?' } else { c })
            .collect()
    };

    format!(
        "{:width$}{} {}",
        "",
        glyph,
        label,
        width = entry.depth() * indent
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    pub line: Clipped,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// Search prompt being edited; `cursor` is a screen column
    Prompt { text: String, cursor: usize },
    Info {
        message: Option<StatusMessage>,
        position: String,
    },
}

/// Everything drawn on one screen refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    /// One entry per screen line; `None` past either end of the view
    pub rows: Vec<Option<FrameRow>>,
    pub status: StatusLine,
}

pub fn render_frame(app: &App) -> Frame {
    let width = app.width();
    let pager = app.pager();
    let view = app.view();
    let arena = app.arena();
    let settings = app.settings();

    let rows = (0..pager.height)
        .map(|line| {
            pager.row_at(line, view.len()).map(|row| {
                let entry = &arena[view[row]];
                let text = row_text(entry, settings.indent, &settings.glyphs);
                FrameRow {
                    line: clip(&text, pager.left, width),
                    selected: row == pager.cursor,
                }
            })
        })
        .collect();

    Frame {
        width,
        rows,
        status: render_status(app, width),
    }
}

fn render_status(app: &App, width: usize) -> StatusLine {
    if let Mode::Prompt(direction) = app.mode() {
        let prefix = match direction {
            Direction::Forward => '/',
            Direction::Backward => '?',
        };
        let editor = app.editor();
        let full: String = std::iter::once(prefix)
            .chain(editor.text().chars())
            .collect();

        let cursor_col: usize = full
            .chars()
            .take(editor.cursor() + 1)
            .map(|c| c.width().unwrap_or(0))
            .sum();
        let skip = (cursor_col + 1).saturating_sub(width);

        return StatusLine::Prompt {
            text: slice_columns(&full, skip, width),
            cursor: cursor_col.saturating_sub(skip),
        };
    }

    let position = match app.cursor_node() {
        Some(id) => format!("{}/{}", id.index() + 1, app.arena().len()),
        None => "0/0".to_string(),
    };
    StatusLine::Info {
        message: app.status().cloned(),
        position,
    }
}

impl StatusLine {
    /// The line as shown, without colors
    pub fn plain(&self, width: usize) -> String {
        match self {
            StatusLine::Prompt { text, .. } => text.clone(),
            StatusLine::Info { message, position } => {
                let position = slice_columns(position, 0, width);
                let room = width.saturating_sub(position.width() + 1);
                let text = message
                    .as_ref()
                    .map(|m| slice_columns(&m.text, 0, room))
                    .unwrap_or_default();
                let gap = width - position.width() - text.width();
                format!("{}{:gap$}{}", text, "", position, gap = gap)
            }
        }
    }
}

impl Frame {
    /// The frame as plain text, one line per screen line
    pub fn to_text(&self) -> String {
        let mut lines: Vec<String> = self
            .rows
            .iter()
            .map(|row| match row {
                Some(row) => row.line.plain().trim_end().to_string(),
                None => String::new(),
            })
            .collect();
        lines.push(self.status.plain(self.width));
        lines.join("\n")
    }
}

/// Write `frame` to the terminal.
pub fn draw(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    queue!(out, cursor::Hide)?;

    for (y, row) in frame.rows.iter().enumerate() {
        queue!(out, cursor::MoveTo(0, y as u16))?;
        if let Some(row) = row {
            draw_row(out, row, frame.width)?;
        }
        queue!(out, Clear(ClearType::UntilNewLine))?;
    }

    let y = frame.rows.len() as u16;
    queue!(out, cursor::MoveTo(0, y))?;
    match &frame.status {
        StatusLine::Prompt { text, cursor: col } => {
            queue!(
                out,
                Print(text),
                Clear(ClearType::UntilNewLine),
                cursor::MoveTo(*col as u16, y),
                cursor::Show
            )?;
        }
        StatusLine::Info { message, .. } => {
            let line = frame.status.plain(frame.width);
            let color = match message.as_ref().map(|m| m.kind) {
                Some(StatusKind::Error) => colors::ERROR,
                _ => colors::DIM,
            };
            queue!(
                out,
                SetForegroundColor(color),
                Print(line),
                ResetColor,
                Clear(ClearType::UntilNewLine)
            )?;
        }
    }

    out.flush()
}

fn draw_row(out: &mut impl Write, row: &FrameRow, width: usize) -> io::Result<()> {
    if row.line.cut_left {
        draw_marker(out, markers::CUT_LEFT)?;
    }

    if row.selected {
        let used = usize::from(row.line.cut_left) + usize::from(row.line.cut_right);
        let pad = width.saturating_sub(used + row.line.body.width());
        queue!(
            out,
            SetForegroundColor(colors::HIGHLIGHT_FG),
            SetBackgroundColor(colors::HIGHLIGHT_BG),
            Print(&row.line.body),
            Print(format!("{:pad$}", "", pad = pad)),
            ResetColor
        )?;
    } else {
        queue!(out, Print(&row.line.body))?;
    }

    if row.line.cut_right {
        draw_marker(out, markers::CUT_RIGHT)?;
    }
    Ok(())
}

fn draw_marker(out: &mut impl Write, marker: char) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(colors::HIGHLIGHT_FG),
        SetBackgroundColor(colors::HIGHLIGHT_BG),
        Print(marker),
        ResetColor
    )
}
