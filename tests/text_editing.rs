//! Text editing tests - insert, delete, newline, kill line

mod common;

use common::{buffer_to_string, cursor, test_model};
use tedit::messages::{DocumentMsg, Msg};
use tedit::model::{Document, Position};
use tedit::update::update;

// ========================================================================
// InsertChar tests
// ========================================================================

#[test]
fn test_insert_char_at_start() {
    let mut model = test_model("hello", 0, 0);
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('X')));

    assert_eq!(buffer_to_string(&model), "Xhello");
    assert_eq!(cursor(&model), (0, 1));
    assert!(model.document.is_modified);
}

#[test]
fn test_insert_char_at_end() {
    let mut model = test_model("hello", 0, 5);
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('X')));

    assert_eq!(buffer_to_string(&model), "helloX");
    assert_eq!(cursor(&model), (0, 6));
}

#[test]
fn test_insert_on_virtual_line_appends_line() {
    let mut model = test_model("one", 1, 0);
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('z')));

    assert_eq!(buffer_to_string(&model), "one\nz");
    assert_eq!(cursor(&model), (1, 1));
}

#[test]
fn test_insert_into_empty_document() {
    let mut model = test_model("", 0, 0);
    assert_eq!(model.document.line_count(), 0);

    update(&mut model, Msg::Document(DocumentMsg::InsertChar('a')));
    assert_eq!(model.document.line_count(), 1);
    assert_eq!(buffer_to_string(&model), "a");
}

#[test]
fn test_insert_tab_renders_to_next_stop() {
    let mut model = test_model("ab", 0, 2);
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('\t')));
    update(&mut model, Msg::Document(DocumentMsg::InsertChar('c')));

    let line = model.document.line(0).unwrap();
    let render: String = line.render().iter().collect();
    assert_eq!(render, "ab  c");
    assert_eq!(model.editor.render_column, 5);
}

// ========================================================================
// Newline tests
// ========================================================================

#[test]
fn test_newline_splits_line() {
    let mut model = test_model("hello world", 0, 5);
    update(&mut model, Msg::Document(DocumentMsg::InsertNewline));

    assert_eq!(buffer_to_string(&model), "hello\n world");
    assert_eq!(cursor(&model), (1, 0));
}

#[test]
fn test_newline_at_column_zero_inserts_above() {
    let mut model = test_model("abc\ndef", 1, 0);
    update(&mut model, Msg::Document(DocumentMsg::InsertNewline));

    assert_eq!(buffer_to_string(&model), "abc\n\ndef");
    assert_eq!(cursor(&model), (2, 0));
}

#[test]
fn test_newline_then_backspace_restores_line() {
    let mut model = test_model("hello world", 0, 5);
    update(&mut model, Msg::Document(DocumentMsg::InsertNewline));
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(buffer_to_string(&model), "hello world");
    assert_eq!(cursor(&model), (0, 5));
}

// ========================================================================
// Delete tests
// ========================================================================

#[test]
fn test_backspace_in_line() {
    let mut model = test_model("hello", 0, 3);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(buffer_to_string(&model), "helo");
    assert_eq!(cursor(&model), (0, 2));
}

#[test]
fn test_backspace_at_document_start_is_noop() {
    let mut model = test_model("hello", 0, 0);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(buffer_to_string(&model), "hello");
    assert!(!model.document.is_modified);
}

#[test]
fn test_backspace_on_virtual_line_is_noop() {
    let mut model = test_model("hello", 1, 0);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(buffer_to_string(&model), "hello");
    assert_eq!(cursor(&model), (1, 0));
}

#[test]
fn test_backspace_joins_lines() {
    let mut model = test_model("abc\ndef", 1, 0);
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));

    assert_eq!(buffer_to_string(&model), "abcdef");
    assert_eq!(cursor(&model), (0, 3));
}

#[test]
fn test_delete_forward_in_line() {
    let mut model = test_model("hello", 0, 1);
    update(&mut model, Msg::Document(DocumentMsg::DeleteForward));

    assert_eq!(buffer_to_string(&model), "hllo");
    assert_eq!(cursor(&model), (0, 1));
}

#[test]
fn test_delete_forward_at_line_end_joins_next() {
    let mut model = test_model("abc\ndef", 0, 3);
    update(&mut model, Msg::Document(DocumentMsg::DeleteForward));

    assert_eq!(buffer_to_string(&model), "abcdef");
    assert_eq!(cursor(&model), (0, 3));
}

#[test]
fn test_delete_forward_at_end_of_last_line_steps_onto_virtual_line() {
    let mut model = test_model("abc", 0, 3);
    update(&mut model, Msg::Document(DocumentMsg::DeleteForward));

    assert_eq!(buffer_to_string(&model), "abc");
    assert_eq!(cursor(&model), (1, 0));
    assert!(!model.document.is_modified);

    // On the virtual line nothing moves
    update(&mut model, Msg::Document(DocumentMsg::DeleteForward));
    assert_eq!(cursor(&model), (1, 0));
    assert_eq!(buffer_to_string(&model), "abc");
}

#[test]
fn test_kill_line_removes_rest_of_line() {
    let mut model = test_model("hello world\nnext", 0, 5);
    update(&mut model, Msg::Document(DocumentMsg::KillLine));

    assert_eq!(buffer_to_string(&model), "hello\nnext");
    assert_eq!(cursor(&model), (0, 5));
}

#[test]
fn test_kill_line_at_end_of_line_keeps_next_line() {
    let mut model = test_model("abc\ndef", 0, 3);
    update(&mut model, Msg::Document(DocumentMsg::KillLine));

    assert_eq!(buffer_to_string(&model), "abc\ndef");
}

#[test]
fn test_kill_line_on_virtual_line_is_noop() {
    let mut model = test_model("abc", 1, 0);
    update(&mut model, Msg::Document(DocumentMsg::KillLine));

    assert_eq!(buffer_to_string(&model), "abc");
    assert!(!model.document.is_modified);
}

// ========================================================================
// Document primitives
// ========================================================================

#[test]
fn test_insert_then_delete_line_restores_document() {
    let mut doc = Document::with_text("a\nb");
    doc.insert_line(1, "middle");
    assert_eq!(doc.line(1).unwrap().text(), "middle");

    doc.delete_line(1);
    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.line(1).unwrap().text(), "b");
}

#[test]
fn test_out_of_range_primitives_are_noops() {
    let mut doc = Document::with_text("abc");

    doc.insert_line(5, "x");
    doc.delete_line(5);
    let mut past_end = Position::new(0, 10);
    doc.insert_char(&mut past_end, 'x');
    let mut past_doc = Position::new(4, 0);
    doc.delete_char(&mut past_doc);

    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.line(0).unwrap().text(), "abc");
    assert_eq!(past_end, Position::new(0, 10));
    assert!(!doc.is_modified);
}

#[test]
fn test_render_tracks_chars_after_every_edit() {
    let mut model = test_model("\tx", 0, 1);
    let msgs = [
        DocumentMsg::InsertChar('\t'),
        DocumentMsg::InsertChar('y'),
        DocumentMsg::DeleteBackward,
        DocumentMsg::InsertNewline,
        DocumentMsg::DeleteBackward,
    ];

    for msg in msgs {
        update(&mut model, Msg::Document(msg));
        for line in model.document.lines() {
            let expected = tedit::util::expand_tabs(line.chars(), model.document.tab_stop());
            assert_eq!(line.render(), expected.as_slice());
        }
    }
}

#[test]
fn test_save_bytes() {
    let doc = Document::with_text("a\nb");
    assert_eq!(doc.to_bytes(), b"a\nb\n");
}
