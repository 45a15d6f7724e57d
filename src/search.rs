//! Incremental search: match collection and cyclic navigation

use crate::model::{Document, Position};

/// Find all non-overlapping occurrences of `needle`, in document order.
///
/// Columns are character indices into each line's logical text. After a
/// match the scan resumes just past the matched text. An empty needle
/// matches nothing.
pub fn find_matches(document: &Document, needle: &str) -> Vec<Position> {
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for (line_idx, line) in document.lines().iter().enumerate() {
        let text = line.text();
        let mut last_byte = 0;
        let mut last_char = 0;
        for (byte_idx, _) in text.match_indices(needle) {
            last_char += text[last_byte..byte_idx].chars().count();
            last_byte = byte_idx;
            matches.push(Position::new(line_idx, last_char));
        }
    }
    matches
}

/// State of a running search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    matches: Vec<Position>,
    index: usize,
    saved_cursor: Position,
}

impl SearchState {
    /// Start a search at the first match; `None` if there are no matches
    pub fn new(matches: Vec<Position>, saved_cursor: Position) -> Option<Self> {
        if matches.is_empty() {
            return None;
        }
        Some(Self {
            matches,
            index: 0,
            saved_cursor,
        })
    }

    /// Search `document` for `needle`, remembering `cursor` for cancel
    pub fn search(document: &Document, needle: &str, cursor: Position) -> Option<Self> {
        Self::new(find_matches(document, needle), cursor)
    }

    pub fn current(&self) -> Position {
        self.matches[self.index]
    }

    /// Advance to the next match, wrapping to the first
    pub fn next(&mut self) -> Position {
        self.index = (self.index + 1) % self.matches.len();
        self.current()
    }

    /// Step back to the previous match, wrapping to the last
    pub fn prev(&mut self) -> Position {
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or(self.matches.len() - 1);
        self.current()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn matches(&self) -> &[Position] {
        &self.matches
    }

    /// Cursor position from before the search started
    pub fn saved_cursor(&self) -> Position {
        self.saved_cursor
    }
}
