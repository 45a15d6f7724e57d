//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tedit::config::EditorConfig;
use tedit::input::ScriptedSource;
use tedit::keymap::{load_default_keymap, Keymap};
use tedit::model::{AppModel, Document, Position};
use tedit::App;

/// Create a test model with given text and cursor position
///
/// The terminal is 80x27, which leaves 25 text rows.
pub fn test_model(text: &str, line: usize, column: usize) -> AppModel {
    test_model_sized(text, line, column, 80, 27)
}

/// Create a test model for a terminal of `cols` x `rows`
pub fn test_model_sized(text: &str, line: usize, column: usize, cols: u16, rows: u16) -> AppModel {
    let mut model = AppModel::new(Document::with_text(text), EditorConfig::default(), cols, rows);
    model.editor.cursor = Position::new(line, column);
    model.editor.scroll(&model.document);
    model
}

/// Helper to get buffer content as string, lines joined with `\n`
pub fn buffer_to_string(model: &AppModel) -> String {
    model
        .document
        .lines()
        .iter()
        .map(|line| line.text())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cursor as `(line, column)`
pub fn cursor(model: &AppModel) -> (usize, usize) {
    (model.editor.cursor.line, model.editor.cursor.column)
}

/// Current status message text, ignoring its timeout
pub fn status(model: &AppModel) -> Option<String> {
    model
        .ui
        .transient_message
        .as_ref()
        .map(|message| message.text.clone())
}

pub fn default_keymap() -> Keymap {
    Keymap::with_bindings(load_default_keymap())
}

/// A headless app that will read `input`, then see end of input
pub fn headless_app(model: AppModel, input: ScriptedSource) -> App<ScriptedSource, Vec<u8>> {
    App::new(model, default_keymap(), input, Vec::new())
}

/// Run `model` headless on `input` and return the finished app
pub fn run_headless(model: AppModel, input: ScriptedSource) -> App<ScriptedSource, Vec<u8>> {
    let mut app = headless_app(model, input);
    app.run().expect("headless run should end cleanly");
    app
}

/// Byte for ctrl+`letter`
pub fn ctrl(letter: u8) -> u8 {
    letter & 0x1f
}

pub const ENTER: u8 = b'\r';
pub const ESC: u8 = 0x1b;
pub const ARROW_UP: &[u8] = b"\x1b[A";
pub const ARROW_DOWN: &[u8] = b"\x1b[B";
pub const ARROW_RIGHT: &[u8] = b"\x1b[C";
pub const ARROW_LEFT: &[u8] = b"\x1b[D";

/// Queue a bare Escape press: the byte followed by a read timeout
pub fn push_escape(source: &mut ScriptedSource) -> &mut ScriptedSource {
    source.push_byte(ESC).push_timeout()
}
