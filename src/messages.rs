//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::model::Document;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement, viewport scrolling)
#[derive(Debug, Clone)]
pub enum EditorMsg {
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to start of line
    MoveCursorLineStart,
    /// Move cursor to end of line
    MoveCursorLineEnd,
    /// Cursor to the top of the screen, then one screen up
    PageUp,
    /// Cursor to the bottom of the screen, then one screen down
    PageDown,
    /// Set cursor to a specific position (search results)
    SetCursorPosition { line: usize, column: usize },
}

/// Document-specific messages (text editing)
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Insert a character at cursor
    InsertChar(char),
    /// Insert a newline at cursor
    InsertNewline,
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character after cursor (Delete)
    DeleteForward,
    /// Delete from the cursor to the end of the line
    KillLine,
}

/// Application-level messages (file operations, terminal events)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Terminal resized to `cols` x `rows`
    Resize { cols: u16, rows: u16 },
    /// Save current file, asking for a name if it has none
    SaveFile,
    /// The save-as prompt returned a name
    SaveAs(PathBuf),
    /// The save-as prompt was dismissed
    SaveCancelled,
    /// File write finished with the byte count or an error message
    SaveCompleted {
        path: PathBuf,
        result: Result<usize, String>,
    },
    /// Ask for a file to open
    OpenFile,
    /// The open prompt returned a name
    OpenPath(PathBuf),
    /// The open prompt was dismissed
    OpenCancelled,
    /// File read finished
    FileLoaded {
        path: PathBuf,
        result: Result<Document, String>,
    },
    /// Start an incremental search
    Find,
    /// Quit, asking for confirmation once if there are unsaved changes
    Quit,
    /// Help placeholder
    Help,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Editor messages (cursor, viewport)
    Editor(EditorMsg),
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// App messages (file I/O, terminal)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cursor movement message
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor(direction))
    }

    /// Create an insert character message
    pub fn insert_char(ch: char) -> Self {
        Msg::Document(DocumentMsg::InsertChar(ch))
    }

    /// Create a resize message
    pub fn resize(cols: u16, rows: u16) -> Self {
        Msg::App(AppMsg::Resize { cols, rows })
    }

    /// Whether handling this message can change the document
    pub fn is_mutating(&self) -> bool {
        matches!(self, Msg::Document(_))
    }
}
