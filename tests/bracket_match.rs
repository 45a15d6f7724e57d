//! Bracket matching tests

mod common;

use common::{buffer_to_string, cursor, run_headless, status, test_model};
use tedit::bracket::find_matching_bracket;
use tedit::config::EditorConfig;
use tedit::input::ScriptedSource;
use tedit::model::{AppModel, Document, Position};

fn no_flash_model(text: &str, line: usize, column: usize) -> AppModel {
    let config = EditorConfig {
        bracket_flash_ms: 0,
        ..EditorConfig::default()
    };
    let mut model = AppModel::new(Document::with_text(text), config, 80, 24);
    model.editor.cursor = Position::new(line, column);
    model.editor.scroll(&model.document);
    model
}

#[test]
fn test_outermost_paren() {
    let doc = Document::with_text("(a(b)c)");
    assert_eq!(
        find_matching_bracket(&doc, Position::new(0, 7), '(', ')'),
        Some(Position::new(0, 0))
    );
}

#[test]
fn test_unmatched_close_fails() {
    let doc = Document::with_text(")");
    assert_eq!(find_matching_bracket(&doc, Position::new(0, 1), '(', ')'), None);
}

#[test]
fn test_other_bracket_kinds_are_ignored() {
    let doc = Document::with_text("[ ( ]");
    assert_eq!(
        find_matching_bracket(&doc, Position::new(0, 5), '[', ']'),
        Some(Position::new(0, 0))
    );
}

#[test]
fn test_braces_across_lines() {
    let doc = Document::with_text("if x {\n\n  y();\n}");
    assert_eq!(
        find_matching_bracket(&doc, Position::new(3, 1), '{', '}'),
        Some(Position::new(0, 5))
    );
}

#[test]
fn test_scan_from_virtual_line_uses_last_line() {
    let doc = Document::with_text("(x)");
    assert_eq!(
        find_matching_bracket(&doc, Position::new(1, 0), '(', ')'),
        Some(Position::new(0, 0))
    );
}

#[test]
fn test_empty_document_has_no_match() {
    let doc = Document::new();
    assert_eq!(find_matching_bracket(&doc, Position::new(0, 0), '(', ')'), None);
}

// ========================================================================
// Typing a closing bracket
// ========================================================================

#[test]
fn test_typing_close_flashes_and_restores_cursor() {
    let model = no_flash_model("(a", 0, 2);
    let app = run_headless(model, ScriptedSource::from_bytes(b")"));

    assert_eq!(buffer_to_string(app.model()), "(a)");
    assert_eq!(cursor(app.model()), (0, 3));
}

#[test]
fn test_flash_moves_cursor_to_partner_while_shown() {
    let model = no_flash_model("{x", 0, 2);
    let app = run_headless(model, ScriptedSource::from_bytes(b"}"));

    // The flash frame puts the terminal cursor on the opening brace
    let output = String::from_utf8_lossy(app.output());
    assert!(output.contains("\x1b[1;1H\x1b[?25h"));
    assert_eq!(cursor(app.model()), (0, 3));
}

#[test]
fn test_typing_unmatched_close_reports() {
    let model = no_flash_model("abc", 0, 3);
    let app = run_headless(model, ScriptedSource::from_bytes(b"]"));

    assert_eq!(buffer_to_string(app.model()), "abc]");
    assert_eq!(
        status(app.model()).as_deref(),
        Some("No matching parenthesis found")
    );
}

#[test]
fn test_closing_bracket_in_readonly_mode_does_nothing() {
    let model = test_model("(a", 0, 2).with_readonly(true);
    let app = run_headless(model, ScriptedSource::from_bytes(b")"));

    assert_eq!(buffer_to_string(app.model()), "(a");
    assert_ne!(
        status(app.model()).as_deref(),
        Some("No matching parenthesis found")
    );
}
