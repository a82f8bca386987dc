//! Interactive application state and action handling.
//!
//! `App` owns the tree, its visible view and the active search, and turns
//! [`Action`]s into mutations. It never touches the terminal, so every
//! behavior here can be exercised from tests.

use crate::commands::{run_command, CommandBindings};
use crate::error::FoldtreeResult;
use crate::search::{reveal, Direction, SearchEngine, SearchError};
use crate::tree::{NodeId, PathArena, PathEntry, VisibleView};

use super::pager::Pager;
use super::prompt::{LineEditor, PromptEvent};
use super::theme::Glyphs;

/// What a key or mouse event asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Top,
    Bottom,
    Center,
    /// Scroll by a number of lines
    ScrollLines(isize),
    /// Scroll half a screen; the sign gives the direction
    ScrollHalfPage(isize),
    /// Scroll a full screen; the sign gives the direction
    ScrollPage(isize),
    ScrollLeft,
    ScrollRight,
    /// Fold or unfold the cursor row
    Toggle,
    /// Select and toggle the row on a screen line
    Click(usize),
    /// Open the search prompt
    StartSearch(Direction),
    /// Repeat the last search in its direction
    SearchNext,
    /// Repeat the last search in the opposite direction
    SearchPrev,
    /// Run the shell command bound to a key
    RunCommand(char),
    Prompt(PromptEvent),
    PromptSubmit,
    PromptCancel,
    Resize(u16, u16),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing a search pattern
    Prompt(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-shot message shown on the bottom line until the next action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// Display and behavior settings resolved from config and CLI
#[derive(Debug, Clone)]
pub struct Settings {
    pub indent: usize,
    pub glyphs: Glyphs,
    pub scroll_step: usize,
    pub bindings: CommandBindings,
}

type CommandRunner = fn(&str, &str) -> FoldtreeResult<()>;

pub struct App {
    arena: PathArena,
    view: VisibleView,
    search: SearchEngine,
    pager: Pager,
    editor: LineEditor,
    mode: Mode,
    status: Option<StatusMessage>,
    settings: Settings,
    width: usize,
    running: bool,
    runner: CommandRunner,
}

/// Lines reserved below the tree for the prompt/status line
const PROMPT_HEIGHT: usize = 1;

impl App {
    pub fn new(
        arena: PathArena,
        view: VisibleView,
        settings: Settings,
        (width, height): (u16, u16),
    ) -> Self {
        let search = SearchEngine::new(arena.separator());
        Self {
            arena,
            view,
            search,
            pager: Pager::new((height as usize).saturating_sub(PROMPT_HEIGHT)),
            editor: LineEditor::new(),
            mode: Mode::Normal,
            status: None,
            settings,
            width: width as usize,
            running: true,
            runner: run_command,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_command_runner(mut self, runner: CommandRunner) -> Self {
        self.runner = runner;
        self
    }

    /// Apply an action. Returns whether the screen needs redrawing.
    pub fn handle_action(&mut self, action: Action) -> bool {
        if !matches!(action, Action::Resize(..)) {
            self.status = None;
        }

        let rows = self.view.len();
        let height = self.pager.height as isize;
        let step = self.settings.scroll_step as isize;

        match action {
            Action::Up => self.pager.move_cursor(-1, rows),
            Action::Down => self.pager.move_cursor(1, rows),
            Action::Top => self.pager.set_cursor(0, rows),
            Action::Bottom => self.pager.set_cursor(rows.saturating_sub(1), rows),
            Action::Center => self.pager.center(),
            Action::ScrollLines(n) => self.pager.scroll(n, rows),
            Action::ScrollHalfPage(sign) => self.pager.scroll(sign * (height / 2), rows),
            Action::ScrollPage(sign) => self.pager.scroll(sign * height, rows),
            Action::ScrollLeft => self.pager.scroll_horizontal(-step),
            Action::ScrollRight => self.pager.scroll_horizontal(step),
            Action::Toggle => self.toggle_cursor(),
            Action::Click(line) => match self.pager.row_at(line, rows) {
                Some(row) => {
                    self.pager.set_cursor(row, rows);
                    self.toggle_cursor();
                }
                None => return false,
            },
            Action::StartSearch(direction) => {
                self.editor.reset();
                self.mode = Mode::Prompt(direction);
            }
            Action::SearchNext => self.repeat_search(false),
            Action::SearchPrev => self.repeat_search(true),
            Action::RunCommand(key) => self.run_bound_command(key),
            Action::Prompt(PromptEvent::Backspace) if self.editor.is_empty() => {
                self.mode = Mode::Normal;
            }
            Action::Prompt(event) => self.editor.apply(event),
            Action::PromptSubmit => self.submit_search(),
            Action::PromptCancel => {
                self.editor.reset();
                self.mode = Mode::Normal;
            }
            Action::Resize(width, height) => {
                self.width = width as usize;
                self.pager
                    .resize((height as usize).saturating_sub(PROMPT_HEIGHT), rows);
            }
            Action::Quit => self.running = false,
        }
        true
    }

    fn toggle_cursor(&mut self) {
        if self.view.is_empty() {
            return;
        }
        self.view.toggle(&mut self.arena, self.pager.cursor);
        self.pager.clamp(self.view.len());
    }

    fn submit_search(&mut self) {
        let Mode::Prompt(direction) = self.mode else {
            return;
        };
        self.mode = Mode::Normal;

        let pattern = self.editor.submit();
        if pattern.is_empty() {
            return;
        }

        match self.search.start_search(&pattern, direction) {
            Ok(()) => self.search_from_cursor(false),
            Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    fn repeat_search(&mut self, invert: bool) {
        if self.search.is_active() {
            self.search_from_cursor(invert);
        } else {
            self.status = Some(StatusMessage::error(SearchError::NoActiveSearch.to_string()));
        }
    }

    fn search_from_cursor(&mut self, invert: bool) {
        let Some(from) = self.view.get(self.pager.cursor) else {
            return;
        };

        match self.search.find_next(&self.arena, from, invert) {
            Ok(Some(hit)) => {
                let row = reveal(&mut self.arena, &mut self.view, hit);
                let rows = self.view.len();
                let offset = row as isize - self.pager.top;
                let on_screen = offset >= 0 && (offset as usize) < self.pager.height;
                self.pager.set_cursor(row, rows);
                if !on_screen {
                    self.pager.center();
                }
            }
            Ok(None) => {
                let pattern = self.search.pattern().unwrap_or_default();
                self.status = Some(StatusMessage::error(format!(
                    "pattern not found: {}",
                    pattern
                )));
            }
            Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    fn run_bound_command(&mut self, key: char) {
        let Some(command) = self.settings.bindings.get(key).map(str::to_string) else {
            return;
        };
        let Some(node) = self.cursor_node() else {
            return;
        };

        let full_path = self.arena[node].full_path().to_string();
        self.status = Some(match (self.runner)(&command, &full_path) {
            Ok(()) => StatusMessage::info(format!("ran '{}'", command)),
            Err(e) => StatusMessage::error(e.to_string()),
        });
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn arena(&self) -> &PathArena {
        &self.arena
    }

    pub fn view(&self) -> &VisibleView {
        &self.view
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn bindings(&self) -> &CommandBindings {
        &self.settings.bindings
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Node under the cursor, if the view has any rows
    pub fn cursor_node(&self) -> Option<NodeId> {
        self.view.get(self.pager.cursor)
    }

    pub fn cursor_entry(&self) -> Option<&PathEntry> {
        self.cursor_node().and_then(|id| self.arena.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FoldtreeError;
    use crate::tree::FoldState;

    fn settings() -> Settings {
        Settings {
            indent: 2,
            glyphs: Glyphs::ascii(),
            scroll_step: 4,
            bindings: CommandBindings::from_config(&[crate::config::CommandBinding {
                key: "y".to_string(),
                run: "copy".to_string(),
            }]),
        }
    }

    fn app(lines: &[&str], state: FoldState, height: u16) -> App {
        let (arena, view) = PathArena::build(lines, '/', state);
        App::new(arena, view, settings(), (40, height))
    }

    fn cursor_path(app: &App) -> String {
        app.cursor_entry().unwrap().full_path().to_string()
    }

    fn type_search(app: &mut App, direction: Direction, pattern: &str) {
        app.handle_action(Action::StartSearch(direction));
        for ch in pattern.chars() {
            app.handle_action(Action::Prompt(PromptEvent::Insert(ch)));
        }
        app.handle_action(Action::PromptSubmit);
    }

    #[test]
    fn navigation_moves_cursor() {
        let mut app = app(&["a/b", "a/c", "d"], FoldState::Unfolded, 10);
        app.handle_action(Action::Down);
        app.handle_action(Action::Down);
        assert_eq!(cursor_path(&app), "a/c");
        app.handle_action(Action::Bottom);
        assert_eq!(cursor_path(&app), "d");
        app.handle_action(Action::Top);
        assert_eq!(cursor_path(&app), "a");
    }

    #[test]
    fn toggle_folds_and_unfolds_cursor_row() {
        let mut app = app(&["a/b", "a/c", "d"], FoldState::Unfolded, 10);
        app.handle_action(Action::Toggle);
        assert_eq!(app.view().len(), 2);
        app.handle_action(Action::Toggle);
        assert_eq!(app.view().len(), 4);
    }

    #[test]
    fn click_selects_and_toggles() {
        let mut app = app(&["a/b", "d/e"], FoldState::Folded, 10);
        assert!(app.handle_action(Action::Click(1)));
        assert_eq!(cursor_path(&app), "d");
        assert_eq!(app.view().len(), 3);

        assert!(!app.handle_action(Action::Click(7)));
    }

    #[test]
    fn search_reveals_folded_match() {
        let mut app = app(&["a/b/target", "a/c", "z"], FoldState::Folded, 10);
        type_search(&mut app, Direction::Forward, "targ");

        assert_eq!(app.mode(), Mode::Normal);
        assert_eq!(cursor_path(&app), "a/b/target");
        assert_eq!(app.view().len(), 5);
        assert!(app.status().is_none());
    }

    #[test]
    fn search_uses_tree_separator_for_path_patterns() {
        let (arena, view) = PathArena::build(&["a.b", "b.a"], '.', FoldState::Folded);
        let mut app = App::new(arena, view, settings(), (40, 10));
        // the pattern contains '.', so it is matched against full paths
        type_search(&mut app, Direction::Forward, "^a\\.b$");
        assert_eq!(cursor_path(&app), "a.b");
        assert_eq!(app.view().len(), 3);
    }

    #[test]
    fn search_next_and_previous() {
        let mut app = app(&["x1", "x2", "x3"], FoldState::Unfolded, 10);
        type_search(&mut app, Direction::Forward, "x");
        assert_eq!(cursor_path(&app), "x2");

        app.handle_action(Action::SearchNext);
        assert_eq!(cursor_path(&app), "x3");

        app.handle_action(Action::SearchPrev);
        assert_eq!(cursor_path(&app), "x2");
    }

    #[test]
    fn search_not_found_sets_status() {
        let mut app = app(&["a", "b"], FoldState::Unfolded, 10);
        type_search(&mut app, Direction::Forward, "zzz");

        let status = app.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "pattern not found: zzz");
        assert_eq!(cursor_path(&app), "a");
    }

    #[test]
    fn bad_pattern_sets_status() {
        let mut app = app(&["a", "b"], FoldState::Unfolded, 10);
        type_search(&mut app, Direction::Forward, "(");
        assert!(app.status().unwrap().text.starts_with("invalid pattern '('"));
    }

    #[test]
    fn repeat_without_search_reports_error() {
        let mut app = app(&["a"], FoldState::Unfolded, 10);
        app.handle_action(Action::SearchNext);
        assert_eq!(app.status().unwrap().text, "no previous search pattern");
    }

    #[test]
    fn backward_search_from_bottom() {
        let mut app = app(&["a/x", "b/x", "c"], FoldState::Unfolded, 10);
        app.handle_action(Action::Bottom);
        type_search(&mut app, Direction::Backward, "^x$");
        assert_eq!(cursor_path(&app), "b/x");
    }

    #[test]
    fn status_cleared_by_next_action() {
        let mut app = app(&["a"], FoldState::Unfolded, 10);
        app.handle_action(Action::SearchNext);
        assert!(app.status().is_some());
        app.handle_action(Action::Down);
        assert!(app.status().is_none());
    }

    #[test]
    fn prompt_backspace_on_empty_cancels() {
        let mut app = app(&["a"], FoldState::Unfolded, 10);
        app.handle_action(Action::StartSearch(Direction::Forward));
        assert_eq!(app.mode(), Mode::Prompt(Direction::Forward));
        app.handle_action(Action::Prompt(PromptEvent::Backspace));
        assert_eq!(app.mode(), Mode::Normal);
    }

    #[test]
    fn far_match_is_centered() {
        let lines: Vec<String> = (0..50).map(|i| format!("n{:02}", i)).collect();
        let (arena, view) = PathArena::build(&lines, '/', FoldState::Unfolded);
        let mut app = App::new(arena, view, settings(), (40, 11));

        type_search(&mut app, Direction::Forward, "n40");
        assert_eq!(app.pager().cursor, 40);
        assert_eq!(app.pager().top, 35);
    }

    #[test]
    fn bound_command_gets_full_path() {
        fn ok_runner(command: &str, path: &str) -> FoldtreeResult<()> {
            assert_eq!(command, "copy");
            assert_eq!(path, "a/b");
            Ok(())
        }

        let mut app = app(&["a/b"], FoldState::Unfolded, 10).with_command_runner(ok_runner);
        app.handle_action(Action::Down);
        app.handle_action(Action::RunCommand('y'));
        assert_eq!(app.status(), Some(&StatusMessage::info("ran 'copy'")));
    }

    #[test]
    fn bound_command_failure_is_reported() {
        fn failing_runner(command: &str, _path: &str) -> FoldtreeResult<()> {
            Err(FoldtreeError::CommandSpawn {
                command: command.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        }

        let mut app = app(&["a"], FoldState::Unfolded, 10).with_command_runner(failing_runner);
        app.handle_action(Action::RunCommand('y'));
        assert_eq!(app.status().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn resize_updates_viewport() {
        let mut app = app(&["a"], FoldState::Unfolded, 10);
        assert_eq!(app.pager().height, 9);
        app.handle_action(Action::Resize(100, 30));
        assert_eq!(app.pager().height, 29);
        assert_eq!(app.width(), 100);
    }

    #[test]
    fn empty_tree_ignores_actions() {
        let lines: [&str; 0] = [];
        let mut app = app(&lines, FoldState::Unfolded, 10);
        app.handle_action(Action::Toggle);
        app.handle_action(Action::Down);
        app.handle_action(Action::RunCommand('y'));
        assert!(app.cursor_node().is_none());
    }

    #[test]
    fn quit_stops_running() {
        let mut app = app(&["a"], FoldState::Unfolded, 10);
        app.handle_action(Action::Quit);
        assert!(!app.is_running());
    }
}
