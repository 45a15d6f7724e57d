//! Debug tracing infrastructure
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug` - every message passed to `update`
//! - `RUST_LOG=cursor=trace` - cursor and viewport changes
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tedit/logs/tedit.log` with daily rotation.
//! There is no console layer: the terminal belongs to the editor while it
//! runs in raw mode.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::EditorState;

/// Initialize file logging
///
/// Returns the guard that flushes the non-blocking writer; keep it alive for
/// the whole session.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let logs_dir = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            return None;
        }
    };

    let file_appender = tracing_appender::rolling::daily(logs_dir, "tedit.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    if tracing_subscriber::registry().with(file_layer).try_init().is_err() {
        eprintln!("Warning: a tracing subscriber is already installed");
    }

    Some(guard)
}

/// Lightweight snapshot of cursor and viewport state for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub line: usize,
    pub column: usize,
    pub top_line: usize,
    pub left_column: usize,
}

impl CursorSnapshot {
    pub fn from_editor(editor: &EditorState) -> Self {
        Self {
            line: editor.cursor.line,
            column: editor.cursor.column,
            top_line: editor.viewport.top_line,
            left_column: editor.viewport.left_column,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if (self.line, self.column) != (other.line, other.column) {
            changes.push(format!(
                "cursor: ({},{}) → ({},{})",
                self.line, self.column, other.line, other.column
            ));
        }
        if (self.top_line, self.left_column) != (other.top_line, other.left_column) {
            changes.push(format!(
                "scroll: ({},{}) → ({},{})",
                self.top_line, self.left_column, other.top_line, other.left_column
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;

    #[test]
    fn test_snapshot_diff() {
        let mut editor = EditorState::new();
        let before = CursorSnapshot::from_editor(&editor);
        assert_eq!(before.diff(&before), None);

        editor.cursor = Position::new(2, 3);
        let after = CursorSnapshot::from_editor(&editor);
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("cursor: (0,0) → (2,3)")
        );
    }
}
