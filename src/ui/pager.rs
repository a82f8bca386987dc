//! Viewport over the visible rows: cursor, vertical and horizontal scroll.
//!
//! `top` is signed because centering near the first row may leave blank
//! lines above it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    /// Row drawn on the first screen line
    pub top: isize,
    /// Columns hidden on the left
    pub left: usize,
    /// Selected row
    pub cursor: usize,
    /// Screen lines available for rows
    pub height: usize,
}

impl Pager {
    pub fn new(height: usize) -> Self {
        Self {
            top: 0,
            left: 0,
            cursor: 0,
            height: height.max(1),
        }
    }

    pub fn resize(&mut self, height: usize, rows: usize) {
        self.height = height.max(1);
        self.clamp(rows);
    }

    fn bottom(&self) -> isize {
        self.top + self.height as isize - 1
    }

    /// Put the cursor on `row`, scrolling just enough to keep it on screen.
    pub fn set_cursor(&mut self, row: usize, rows: usize) {
        if rows == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = row.min(rows - 1);

        let cursor = self.cursor as isize;
        if cursor < self.top {
            self.top = cursor;
        } else if cursor > self.bottom() {
            self.top = cursor - self.height as isize + 1;
        }
    }

    /// Move the cursor by `delta` rows; moves past either end are ignored.
    pub fn move_cursor(&mut self, delta: isize, rows: usize) {
        let target = self.cursor as isize + delta;
        if target < 0 || target >= rows as isize {
            return;
        }
        self.set_cursor(target as usize, rows);
    }

    /// Scroll the viewport by `delta` lines, dragging the cursor along.
    pub fn scroll(&mut self, delta: isize, rows: usize) {
        let max_top = (rows as isize - self.height as isize).max(0);
        self.top = (self.top + delta).clamp(0, max_top);

        if rows > 0 {
            let target = (self.cursor as isize + delta).clamp(0, rows as isize - 1);
            self.set_cursor(target as usize, rows);
        }
    }

    pub fn scroll_horizontal(&mut self, delta: isize) {
        self.left = (self.left as isize + delta).max(0) as usize;
    }

    /// Scroll so the cursor sits in the middle of the screen.
    pub fn center(&mut self) {
        self.top = self.cursor as isize - (self.height / 2) as isize;
    }

    /// Row shown on screen line `line`, if any
    pub fn row_at(&self, line: usize, rows: usize) -> Option<usize> {
        if line >= self.height {
            return None;
        }
        let row = self.top + line as isize;
        (row >= 0 && row < rows as isize).then_some(row as usize)
    }

    /// Keep the cursor valid after the number of rows changed.
    pub fn clamp(&mut self, rows: usize) {
        self.set_cursor(self.cursor, rows);
    }
}
