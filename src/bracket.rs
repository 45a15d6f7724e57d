//! Bracket matching
//!
//! Scans backward from just before the cursor, counting nesting depth, to
//! find the opening bracket partnered with a closing one.

use crate::model::{Document, Position};

/// The opening bracket for a closing one
pub fn opening_bracket(close: char) -> Option<char> {
    match close {
        ')' => Some('('),
        '}' => Some('{'),
        ']' => Some('['),
        _ => None,
    }
}

/// Find the `open` bracket matching a `close` bracket before `cursor`.
///
/// Every `close` seen increments the depth and every `open` decrements it;
/// the match is the `open` that brings the depth back to zero. The scan
/// covers the current line left of the cursor, then earlier lines from
/// their end.
pub fn find_matching_bracket(
    document: &Document,
    cursor: Position,
    open: char,
    close: char,
) -> Option<Position> {
    let lines = document.lines();
    if lines.is_empty() {
        return None;
    }

    let (start_line, start_column) = if cursor.line < lines.len() {
        (cursor.line, Some(cursor.column))
    } else {
        (lines.len() - 1, None)
    };

    let mut depth: usize = 0;
    for line_idx in (0..=start_line).rev() {
        let chars = lines[line_idx].chars();
        let end = match start_column {
            Some(column) if line_idx == start_line => column.min(chars.len()),
            _ => chars.len(),
        };

        for (column, &ch) in chars[..end].iter().enumerate().rev() {
            if ch == close {
                depth += 1;
            } else if ch == open && depth > 0 {
                depth -= 1;
                if depth == 0 {
                    return Some(Position::new(line_idx, column));
                }
            }
        }
    }

    None
}
