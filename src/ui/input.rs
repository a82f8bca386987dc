//! Keyboard and mouse mapping, and the interactive loop.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::commands::CommandBindings;
use crate::search::Direction;

use super::app::{Action, App, Mode};
use super::prompt::PromptEvent;
use super::render::{draw, render_frame};

const TICK: Duration = Duration::from_millis(100);

/// Lines scrolled per mouse wheel step
const WHEEL_STEP: isize = 1;

/// Convert a key press to an action for the current mode
pub fn key_to_action(key: KeyEvent, mode: Mode, bindings: &CommandBindings) -> Option<Action> {
    match mode {
        Mode::Normal => normal_key(key, bindings),
        Mode::Prompt(_) => prompt_key(key).map(|ev| match ev {
            PromptKey::Edit(ev) => Action::Prompt(ev),
            PromptKey::Submit => Action::PromptSubmit,
            PromptKey::Cancel => Action::PromptCancel,
        }),
    }
}

fn normal_key(key: KeyEvent, bindings: &CommandBindings) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('e') => Some(Action::ScrollLines(1)),
            KeyCode::Char('y') => Some(Action::ScrollLines(-1)),
            KeyCode::Char('d') => Some(Action::ScrollHalfPage(1)),
            KeyCode::Char('u') => Some(Action::ScrollHalfPage(-1)),
            KeyCode::Char('f') => Some(Action::ScrollPage(1)),
            KeyCode::Char('b') => Some(Action::ScrollPage(-1)),
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    if let KeyCode::Char(ch) = key.code {
        if bindings.get(ch).is_some() {
            return Some(Action::RunCommand(ch));
        }
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::ScrollLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::ScrollRight),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),
        KeyCode::PageDown => Some(Action::ScrollPage(1)),
        KeyCode::PageUp => Some(Action::ScrollPage(-1)),
        KeyCode::Char('z') => Some(Action::Center),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Toggle),
        KeyCode::Char('/') => Some(Action::StartSearch(Direction::Forward)),
        KeyCode::Char('?') => Some(Action::StartSearch(Direction::Backward)),
        KeyCode::Char('n') => Some(Action::SearchNext),
        KeyCode::Char('N') => Some(Action::SearchPrev),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

enum PromptKey {
    Edit(PromptEvent),
    Submit,
    Cancel,
}

fn prompt_key(key: KeyEvent) -> Option<PromptKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('a') => Some(PromptKey::Edit(PromptEvent::Home)),
            KeyCode::Char('e') => Some(PromptKey::Edit(PromptEvent::End)),
            KeyCode::Char('u') => Some(PromptKey::Edit(PromptEvent::Clear)),
            KeyCode::Char('c') => Some(PromptKey::Cancel),
            _ => None,
        };
    }

    let event = match key.code {
        KeyCode::Enter => return Some(PromptKey::Submit),
        KeyCode::Esc => return Some(PromptKey::Cancel),
        KeyCode::Char(ch) => PromptEvent::Insert(ch),
        KeyCode::Backspace => PromptEvent::Backspace,
        KeyCode::Delete => PromptEvent::Delete,
        KeyCode::Left => PromptEvent::Left,
        KeyCode::Right => PromptEvent::Right,
        KeyCode::Home => PromptEvent::Home,
        KeyCode::End => PromptEvent::End,
        KeyCode::Up => PromptEvent::HistoryUp,
        KeyCode::Down => PromptEvent::HistoryDown,
        _ => return None,
    };
    Some(PromptKey::Edit(event))
}

/// Convert a mouse event to an action. Clicks are ignored while the
/// prompt is open.
pub fn mouse_to_action(mouse: MouseEvent, mode: Mode) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if mode == Mode::Normal => {
            Some(Action::Click(mouse.row as usize))
        }
        MouseEventKind::ScrollDown => Some(Action::ScrollLines(WHEEL_STEP)),
        MouseEventKind::ScrollUp => Some(Action::ScrollLines(-WHEEL_STEP)),
        _ => None,
    }
}

/// Raw mode, alternate screen and mouse capture for the life of the value
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the interface until the user quits.
///
/// The terminal is restored on return, including on error.
pub fn run(app: &mut App) -> io::Result<()> {
    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;

    draw(&mut stdout, &render_frame(app))?;

    while app.is_running() {
        if !event::poll(TICK)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                key_to_action(key, app.mode(), app.bindings())
            }
            Event::Mouse(mouse) => mouse_to_action(mouse, app.mode()),
            Event::Resize(width, height) => Some(Action::Resize(width, height)),
            _ => None,
        };

        if let Some(action) = action {
            tracing::trace!(?action, "handling action");
            if app.handle_action(action) && app.is_running() {
                draw(&mut stdout, &render_frame(app))?;
            }
        }
    }

    Ok(())
}
