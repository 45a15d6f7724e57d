//! Utility functions for tab expansion and column mapping
//!
//! A line is stored as logical characters (`Line::chars`) and drawn from its
//! tab-expanded form (`Line::render`). Both directions of the mapping go
//! through [`tab_advance`] so cursor placement and drawn text never diverge.

/// Default tab width for visual column calculations
pub const TABULATOR_WIDTH: usize = 4;

/// Number of display cells a tab occupies when it starts at `visual_col`.
///
/// A tab always moves to the next tab stop, so this is in `1..=tab_stop`.
#[inline]
pub fn tab_advance(visual_col: usize, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    tab_stop - (visual_col % tab_stop)
}

/// Expand every tab in `chars` to spaces up to the next tab stop.
pub fn expand_tabs(chars: &[char], tab_stop: usize) -> Vec<char> {
    let mut rendered = Vec::with_capacity(chars.len());

    for &ch in chars {
        if ch == '\t' {
            let spaces = tab_advance(rendered.len(), tab_stop);
            rendered.extend(std::iter::repeat(' ').take(spaces));
        } else {
            rendered.push(ch);
        }
    }

    rendered
}

/// Convert a character column to visual column (screen position).
///
/// Walks `chars[..char_col]`; columns past the end of the line are clamped to
/// the line length.
pub fn display_column(chars: &[char], char_col: usize, tab_stop: usize) -> usize {
    let mut visual_col = 0;

    for &ch in chars.iter().take(char_col) {
        if ch == '\t' {
            visual_col += tab_advance(visual_col, tab_stop);
        } else {
            visual_col += 1;
        }
    }

    visual_col
}

/// Whether a decoded character is something the user means to type.
///
/// Tabs are control characters and are handled by their own key.
#[inline]
pub fn is_printable(ch: char) -> bool {
    !ch.is_control()
}
