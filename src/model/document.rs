//! Document model - the line buffer and file state

use std::io;
use std::path::{Path, PathBuf};

use super::editor::Position;
use crate::util::text::{expand_tabs, TABULATOR_WIDTH};

/// A single line of text
///
/// `render` is derived from `chars` and is rebuilt after every mutation;
/// nothing outside this type writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    chars: Vec<char>,
    render: Vec<char>,
}

impl Line {
    /// Create a line from text, rendering tabs with `tab_stop`
    pub fn new(text: &str, tab_stop: usize) -> Self {
        Self::from_chars(text.chars().collect(), tab_stop)
    }

    fn from_chars(chars: Vec<char>, tab_stop: usize) -> Self {
        let render = expand_tabs(&chars, tab_stop);
        Self { chars, render }
    }

    /// Logical characters
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Tab-expanded characters as drawn on screen
    pub fn render(&self) -> &[char] {
        &self.render
    }

    /// Number of logical characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The logical content as a String
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn update_render(&mut self, tab_stop: usize) {
        self.render = expand_tabs(&self.chars, tab_stop);
    }

    /// Insert `ch` before `column`. Returns false (line untouched) if
    /// `column` is past the end of the line.
    fn insert_char(&mut self, column: usize, ch: char, tab_stop: usize) -> bool {
        if column > self.chars.len() {
            return false;
        }
        self.chars.insert(column, ch);
        self.update_render(tab_stop);
        true
    }

    /// Remove the character at `column`. Returns false (line untouched) if
    /// there is no character there.
    fn delete_char(&mut self, column: usize, tab_stop: usize) -> bool {
        if column >= self.chars.len() {
            return false;
        }
        self.chars.remove(column);
        self.update_render(tab_stop);
        true
    }

    /// Cut everything from `column` to the end of the line.
    fn split_off(&mut self, column: usize, tab_stop: usize) -> Vec<char> {
        let tail = self.chars.split_off(column.min(self.chars.len()));
        self.update_render(tab_stop);
        tail
    }

    fn append(&mut self, tail: &[char], tab_stop: usize) {
        self.chars.extend_from_slice(tail);
        self.update_render(tab_stop);
    }
}

/// Document state - the lines of text and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<Line>,
    /// Tab width used to build each line's render form
    tab_stop: usize,
    /// Path to the file on disk (None for new/unsaved documents)
    pub file_path: Option<PathBuf>,
    /// Whether the lines have unsaved changes
    pub is_modified: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document (zero lines)
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            tab_stop: TABULATOR_WIDTH,
            file_path: None,
            is_modified: false,
        }
    }

    /// Create a document with initial text, split into lines the same way a
    /// file is
    pub fn with_text(text: &str) -> Self {
        let mut doc = Self::new();
        doc.lines = split_lines(text, doc.tab_stop);
        doc
    }

    /// Load a document from an in-memory byte source
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::with_text(&String::from_utf8_lossy(bytes))
    }

    /// Load a document from a file path
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let mut doc = Self::from_bytes(&bytes);
        doc.file_path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Create a new empty document with a target file path
    ///
    /// Used when the path given on the command line cannot be opened; the
    /// file will be created when the user saves.
    pub fn new_with_path(path: PathBuf) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new()
        }
    }

    /// Set the tab width and re-render every line (builder pattern)
    pub fn with_tab_stop(mut self, tab_stop: usize) -> Self {
        self.tab_stop = tab_stop.max(1);
        for line in &mut self.lines {
            line.update_render(self.tab_stop);
        }
        self
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Get the display name for this document.
    /// Returns the filename if a path is set, or "No Name" as fallback.
    pub fn display_name(&self) -> String {
        if let Some(path) = &self.file_path {
            if let Some(name) = path.file_name() {
                return name.to_string_lossy().to_string();
            }
            return path.display().to_string();
        }
        "No Name".to_string()
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get a line by index
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Length of a line in characters; 0 for the virtual trailing line
    pub fn line_len(&self, index: usize) -> usize {
        self.lines.get(index).map_or(0, Line::len)
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert a character at `cursor` and advance the cursor by one.
    ///
    /// On the virtual trailing line an empty line is appended first. Any
    /// position outside the document leaves everything untouched.
    pub fn insert_char(&mut self, cursor: &mut Position, ch: char) {
        if cursor.line > self.lines.len() || cursor.column > self.line_len(cursor.line) {
            return;
        }
        if cursor.line == self.lines.len() {
            self.insert_line(self.lines.len(), "");
        }

        let tab_stop = self.tab_stop;
        if self.lines[cursor.line].insert_char(cursor.column, ch, tab_stop) {
            cursor.column += 1;
            self.is_modified = true;
        }
    }

    /// Insert a new line holding `text` at `index`.
    ///
    /// `index == line_count()` appends; anything larger is ignored.
    pub fn insert_line(&mut self, index: usize, text: &str) {
        if index > self.lines.len() {
            return;
        }
        self.lines.insert(index, Line::new(text, self.tab_stop));
        self.is_modified = true;
    }

    /// Break the line at `cursor`, moving the cursor to the start of the new
    /// line.
    ///
    /// At column 0 an empty line is inserted above; otherwise the tail of
    /// the line after the cursor moves to a new line below.
    pub fn insert_newline(&mut self, cursor: &mut Position) {
        if cursor.line > self.lines.len() || cursor.column > self.line_len(cursor.line) {
            return;
        }

        if cursor.column == 0 {
            self.insert_line(cursor.line, "");
        } else {
            let tab_stop = self.tab_stop;
            let tail = self.lines[cursor.line].split_off(cursor.column, tab_stop);
            self.lines
                .insert(cursor.line + 1, Line::from_chars(tail, tab_stop));
            self.is_modified = true;
        }

        cursor.line += 1;
        cursor.column = 0;
    }

    /// Delete the character before `cursor` (backspace).
    ///
    /// At column 0 the current line is joined onto the end of the previous
    /// one and the cursor moves to the join point. No-op at the start of the
    /// document and on the virtual trailing line.
    pub fn delete_char(&mut self, cursor: &mut Position) {
        if cursor.line >= self.lines.len() {
            return;
        }
        if cursor.line == 0 && cursor.column == 0 {
            return;
        }

        let tab_stop = self.tab_stop;
        if cursor.column > 0 {
            if self.lines[cursor.line].delete_char(cursor.column - 1, tab_stop) {
                cursor.column -= 1;
                self.is_modified = true;
            }
        } else {
            let current = self.lines.remove(cursor.line);
            let previous = &mut self.lines[cursor.line - 1];
            let join_column = previous.len();
            previous.append(current.chars(), tab_stop);

            cursor.line -= 1;
            cursor.column = join_column;
            self.is_modified = true;
        }
    }

    /// Remove the line at `index`, shifting later lines up.
    pub fn delete_line(&mut self, index: usize) {
        if index >= self.lines.len() {
            return;
        }
        self.lines.remove(index);
        self.is_modified = true;
    }

    /// Replace all lines (used when another file is opened)
    pub fn replace_with(&mut self, other: Document) {
        let tab_stop = self.tab_stop;
        *self = other.with_tab_stop(tab_stop);
    }

    // =========================================================================
    // Saving
    // =========================================================================

    /// Serialize as each line's characters followed by `\n`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = String::new();
        for line in &self.lines {
            out.extend(line.chars());
            out.push('\n');
        }
        out.into_bytes()
    }
}

/// Split text into lines on `\n`, dropping a trailing `\r` from each line.
/// A trailing newline does not produce an extra empty line.
fn split_lines(text: &str, tab_stop: usize) -> Vec<Line> {
    text.lines().map(|line| Line::new(line, tab_stop)).collect()
}
