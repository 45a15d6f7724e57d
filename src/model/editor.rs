//! Editor state - cursor, viewport, and cursor movement

use super::document::Document;
use crate::messages::Direction;
use crate::util::text::display_column;

/// A position in the document (line and column)
///
/// As a cursor, `line` may equal the document's line count: the virtual
/// trailing line where typing appends a new line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number in logical characters (0-indexed)
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Viewport state - what portion of the document is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// First visible display column (for horizontal scrolling)
    pub left_column: usize,
    /// Number of text rows on screen
    pub visible_lines: usize,
    /// Number of columns on screen
    pub visible_columns: usize,
}

impl Viewport {
    /// Create a new viewport with the given dimensions
    pub fn new(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            top_line: 0,
            left_column: 0,
            visible_lines: visible_lines.max(1),
            visible_columns: visible_columns.max(1),
        }
    }

    /// Last visible line (inclusive)
    pub fn bottom_line(&self) -> usize {
        self.top_line + self.visible_lines - 1
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(22, 80)
    }
}

/// Editor state - cursor and view over a document
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Logical cursor position
    pub cursor: Position,
    /// Viewport showing which portion of the document is visible
    pub viewport: Viewport,
    /// Display column of the cursor, recomputed by [`EditorState::scroll`]
    pub render_column: usize,
}

impl EditorState {
    /// Create a new editor state with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor state with specific viewport dimensions
    pub fn with_viewport(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            viewport: Viewport::new(visible_lines, visible_columns),
            ..Self::default()
        }
    }

    /// Put the cursor at the origin and reset the view
    pub fn reset(&mut self) {
        self.cursor = Position::default();
        self.viewport.top_line = 0;
        self.viewport.left_column = 0;
        self.render_column = 0;
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Move the cursor one step, wrapping across line boundaries
    /// horizontally, then snap the column to the new line's length.
    pub fn move_cursor(&mut self, document: &Document, direction: Direction) {
        let line_count = document.line_count();
        let cursor = &mut self.cursor;

        match direction {
            Direction::Left => {
                if cursor.column > 0 {
                    cursor.column -= 1;
                } else if cursor.line > 0 {
                    cursor.line -= 1;
                    cursor.column = document.line_len(cursor.line);
                }
            }
            Direction::Right => {
                if cursor.line < line_count {
                    if cursor.column < document.line_len(cursor.line) {
                        cursor.column += 1;
                    } else {
                        cursor.line += 1;
                        cursor.column = 0;
                    }
                }
            }
            Direction::Down => {
                if cursor.line < line_count {
                    cursor.line += 1;
                }
            }
            Direction::Up => {
                if cursor.line > 0 {
                    cursor.line -= 1;
                }
            }
        }

        self.snap_to_line(document);
    }

    /// Clamp the cursor into the document
    pub fn snap_to_line(&mut self, document: &Document) {
        self.cursor.line = self.cursor.line.min(document.line_count());
        self.cursor.column = self.cursor.column.min(document.line_len(self.cursor.line));
    }

    /// Move cursor to start of line
    pub fn move_line_start(&mut self) {
        self.cursor.column = 0;
    }

    /// Move cursor to end of line (stays put on the virtual trailing line)
    pub fn move_line_end(&mut self, document: &Document) {
        if self.cursor.line < document.line_count() {
            self.cursor.column = document.line_len(self.cursor.line);
        }
    }

    /// Jump to the top of the viewport, then a full page up
    pub fn page_up(&mut self, document: &Document) {
        self.cursor.line = self.viewport.top_line.min(document.line_count());
        for _ in 0..self.viewport.visible_lines {
            self.move_cursor(document, Direction::Up);
        }
    }

    /// Jump to the bottom of the viewport, then a full page down
    pub fn page_down(&mut self, document: &Document) {
        self.cursor.line = self.viewport.bottom_line().min(document.line_count());
        for _ in 0..self.viewport.visible_lines {
            self.move_cursor(document, Direction::Down);
        }
    }

    /// Place the cursor at `position`, clamped into the document
    pub fn set_cursor(&mut self, document: &Document, position: Position) {
        self.cursor = position;
        self.snap_to_line(document);
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Recompute the cursor's display column and scroll the viewport just
    /// enough to keep the cursor visible.
    ///
    /// Idempotent when the cursor is already on screen.
    pub fn scroll(&mut self, document: &Document) {
        self.render_column = document
            .line(self.cursor.line)
            .map_or(0, |line| {
                display_column(line.chars(), self.cursor.column, document.tab_stop())
            });

        let viewport = &mut self.viewport;
        let rows = viewport.visible_lines.max(1);
        let cols = viewport.visible_columns.max(1);

        if self.cursor.line < viewport.top_line {
            viewport.top_line = self.cursor.line;
        }
        if self.cursor.line >= viewport.top_line + rows {
            viewport.top_line = self.cursor.line + 1 - rows;
        }
        if self.render_column < viewport.left_column {
            viewport.left_column = self.render_column;
        }
        if self.render_column >= viewport.left_column + cols {
            viewport.left_column = self.render_column + 1 - cols;
        }
    }

    /// Screen row and column (1-based) of the cursor after [`scroll`]
    ///
    /// [`scroll`]: EditorState::scroll
    pub fn screen_position(&self) -> (usize, usize) {
        (
            self.cursor.line - self.viewport.top_line + 1,
            self.render_column - self.viewport.left_column + 1,
        )
    }

    /// Check the cursor against the document (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, document: &Document, context: &str) {
        debug_assert!(
            self.cursor.line <= document.line_count(),
            "[{}] cursor line {} past virtual line {}",
            context,
            self.cursor.line,
            document.line_count()
        );
        debug_assert!(
            self.cursor.column <= document.line_len(self.cursor.line),
            "[{}] cursor column {} past end of line {} (len {})",
            context,
            self.cursor.column,
            self.cursor.line,
            document.line_len(self.cursor.line)
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self, _document: &Document, _context: &str) {}
}
