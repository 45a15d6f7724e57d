//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod editor;
pub mod status_bar;
pub mod ui;

pub use document::{Document, Line};
pub use editor::{EditorState, Position, Viewport};
pub use status_bar::{
    layout_status_bar, left_segment, right_segment, status_bar_text, TransientMessage,
    MAX_MESSAGE_TIMEOUT,
};
pub use ui::UiState;

use crate::config::EditorConfig;

/// Rows reserved below the text area: status bar and message line
pub const RESERVED_ROWS: usize = 2;

/// Key names used in status messages that tell the user what to press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHints {
    pub quit: String,
    pub save: String,
}

impl Default for KeyHints {
    fn default() -> Self {
        Self {
            quit: "ctrl-q".to_string(),
            save: "ctrl-s".to_string(),
        }
    }
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The open document
    pub document: Document,
    /// Cursor and viewport
    pub editor: EditorState,
    /// Status message line
    pub ui: UiState,
    /// Editor configuration
    pub config: EditorConfig,
    /// Suppress every action that would change the document or write a file
    pub readonly: bool,
    /// Set after a quit was refused because of unsaved changes
    pub quit_confirm: bool,
    /// Key names for status messages
    pub key_hints: KeyHints,
    /// Terminal size in columns and rows
    pub window_size: (u16, u16),
}

impl AppModel {
    /// Create a model for a terminal of `cols` x `rows`
    pub fn new(document: Document, config: EditorConfig, cols: u16, rows: u16) -> Self {
        let document = document.with_tab_stop(config.tab_stop);
        let ui = UiState::with_message_timeout(config.message_timeout());

        let mut model = Self {
            document,
            editor: EditorState::new(),
            ui,
            config,
            readonly: false,
            quit_confirm: false,
            key_hints: KeyHints::default(),
            window_size: (cols, rows),
        };
        model.resize(cols, rows);
        model
    }

    /// Builder for read-only sessions
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Update viewport dimensions after a terminal resize
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.window_size = (cols, rows);
        let viewport = &mut self.editor.viewport;
        viewport.visible_lines = (rows as usize).saturating_sub(RESERVED_ROWS).max(1);
        viewport.visible_columns = (cols as usize).max(1);
        self.editor.scroll(&self.document);
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(target: "status", %message);
        self.ui.set_status(message);
    }

    /// Replace the document with a newly opened one
    pub fn open_document(&mut self, document: Document) {
        self.document.replace_with(document);
        self.editor.reset();
        self.quit_confirm = false;
    }

    /// The message shown at startup
    pub fn startup_message(&self) -> String {
        if self.readonly {
            format!("Press {} to exit.", self.key_hints.quit)
        } else {
            format!(
                "Press {} to exit. Press {} to save.",
                self.key_hints.quit, self.key_hints.save
            )
        }
    }

    /// The message shown when a quit is refused
    pub fn unsaved_changes_message(&self) -> String {
        format!(
            "There are unsaved changes. Press {} to quit or {} to save.",
            self.key_hints.quit, self.key_hints.save
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_reserves_status_rows() {
        let mut model = AppModel::new(Document::new(), EditorConfig::default(), 80, 24);
        assert_eq!(model.editor.viewport.visible_lines, 22);
        assert_eq!(model.editor.viewport.visible_columns, 80);

        model.resize(10, 2);
        assert_eq!(model.editor.viewport.visible_lines, 1);
    }

    #[test]
    fn test_open_document_resets_cursor() {
        let mut model = AppModel::new(
            Document::with_text("a\nb\nc"),
            EditorConfig::default(),
            80,
            24,
        );
        model.editor.cursor = Position::new(2, 1);
        model.quit_confirm = true;

        model.open_document(Document::with_text("x"));
        assert_eq!(model.editor.cursor, Position::new(0, 0));
        assert_eq!(model.document.line_count(), 1);
        assert!(!model.quit_confirm);
    }

    #[test]
    fn test_startup_message_readonly() {
        let model = AppModel::new(Document::new(), EditorConfig::default(), 80, 24)
            .with_readonly(true);
        assert_eq!(model.startup_message(), "Press ctrl-q to exit.");
    }
}
