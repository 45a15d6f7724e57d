//! Status bar model - segments, layout, and transient messages
//!
//! The bar has two segments: document info on the left and the cursor
//! position on the right. Layout works in characters, not bytes, so a
//! multi-byte filename still fills the bar exactly.

use std::time::{Duration, Instant};

use super::document::Document;
use super::editor::Position;

/// Longest filename shown in the left segment
pub const MAX_NAME_CHARS: usize = 20;

/// Longest a status message may stay on screen
pub const MAX_MESSAGE_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Left segment: `[<*><name>] - <n> lines`
pub fn left_segment(document: &Document) -> String {
    let marker = if document.is_modified { "*" } else { "" };
    let name: String = document.display_name().chars().take(MAX_NAME_CHARS).collect();
    format!("[{}{}] - {} lines", marker, name, document.line_count())
}

/// Right segment: `L<line>,C<column>`, both 1-based
pub fn right_segment(cursor: Position) -> String {
    format!("L{},C{}", cursor.line + 1, cursor.column + 1)
}

/// Fit both segments into exactly `width` characters.
///
/// The gap between them is padded with spaces. When they don't fit together
/// the concatenation is truncated to `width`.
pub fn layout_status_bar(left: &str, right: &str, width: usize) -> String {
    let left_width = left.chars().count();
    let right_width = right.chars().count();

    if left_width + right_width > width {
        return left.chars().chain(right.chars()).take(width).collect();
    }

    let gap = width - left_width - right_width;
    let mut bar = String::with_capacity(left.len() + gap + right.len());
    bar.push_str(left);
    bar.extend(std::iter::repeat(' ').take(gap));
    bar.push_str(right);
    bar
}

/// The status bar line for a document and cursor
pub fn status_bar_text(document: &Document, cursor: Position, width: usize) -> String {
    layout_status_bar(&left_segment(document), &right_segment(cursor), width)
}

// =============================================================================
// Transient Message
// =============================================================================

/// A transient status message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self::new_at(text, Instant::now(), duration)
    }

    /// Create a message shown from `now` for `duration`
    pub fn new_at(text: impl Into<String>, now: Instant, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: now
                .checked_add(duration.min(MAX_MESSAGE_TIMEOUT))
                .unwrap_or(now),
        }
    }

    /// Whether the message should still be drawn at `now`
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}
