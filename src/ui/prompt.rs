//! Single-line editor with history for the search prompt.

/// Editing operations understood by [`LineEditor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    HistoryUp,
    HistoryDown,
    Clear,
}

/// Line editor state. Cursor positions count chars, not bytes.
#[derive(Debug, Default)]
pub struct LineEditor {
    line: Vec<char>,
    cursor: usize,
    history: Vec<String>,
    /// Index into `history` while browsing it
    browsing: Option<usize>,
    /// Line being typed before history browsing started
    draft: Vec<char>,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.line.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn apply(&mut self, event: PromptEvent) {
        match event {
            PromptEvent::Insert(ch) => {
                self.line.insert(self.cursor, ch);
                self.cursor += 1;
            }
            PromptEvent::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.line.remove(self.cursor);
                }
            }
            PromptEvent::Delete => {
                if self.cursor < self.line.len() {
                    self.line.remove(self.cursor);
                }
            }
            PromptEvent::Left => self.cursor = self.cursor.saturating_sub(1),
            PromptEvent::Right => self.cursor = (self.cursor + 1).min(self.line.len()),
            PromptEvent::Home => self.cursor = 0,
            PromptEvent::End => self.cursor = self.line.len(),
            PromptEvent::HistoryUp => self.history_up(),
            PromptEvent::HistoryDown => self.history_down(),
            PromptEvent::Clear => {
                self.line.clear();
                self.cursor = 0;
                self.browsing = None;
            }
        }
    }

    /// Take the current line, recording it in history.
    ///
    /// A line already in history moves to the end instead of repeating.
    /// Empty lines are returned but not recorded.
    pub fn submit(&mut self) -> String {
        let text = self.text();
        self.reset();

        if !text.is_empty() {
            self.history.retain(|h| h != &text);
            self.history.push(text.clone());
        }
        text
    }

    /// Drop the current line without recording it.
    pub fn reset(&mut self) {
        self.line.clear();
        self.draft.clear();
        self.cursor = 0;
        self.browsing = None;
    }

    fn history_up(&mut self) {
        let next = match self.browsing {
            None if self.history.is_empty() => return,
            None => {
                self.draft = std::mem::take(&mut self.line);
                self.history.len() - 1
            }
            Some(0) => return,
            Some(i) => i - 1,
        };
        self.load(next);
    }

    fn history_down(&mut self) {
        match self.browsing {
            None => {}
            Some(i) if i + 1 < self.history.len() => self.load(i + 1),
            Some(_) => {
                self.line = std::mem::take(&mut self.draft);
                self.cursor = self.line.len();
                self.browsing = None;
            }
        }
    }

    fn load(&mut self, index: usize) {
        self.line = self.history[index].chars().collect();
        self.cursor = self.line.len();
        self.browsing = Some(index);
    }
}
