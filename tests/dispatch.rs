//! Key dispatch and app-level flows: quit, save, open, resize

mod common;

use std::path::PathBuf;
use std::sync::mpsc;

use common::{
    buffer_to_string, ctrl, cursor, default_keymap, headless_app, push_escape, run_headless,
    status, test_model, ENTER,
};
use tedit::input::ScriptedSource;
use tedit::keymap::{
    load_default_keymap, merge_bindings, parse_keymap_yaml, Command, KeyCode, Keymap, Keystroke,
};
use tedit::runtime::{dispatch_command, handle_keystroke};
use tedit::App;

// ========================================================================
// Keymap and fallback rules
// ========================================================================

#[test]
fn test_fallback_enter_backspace_tab() {
    let mut model = test_model("ab", 0, 1);
    let keymap = default_keymap();

    handle_keystroke(&mut model, &keymap, Keystroke::key(KeyCode::Enter));
    assert_eq!(buffer_to_string(&model), "a\nb");

    handle_keystroke(&mut model, &keymap, Keystroke::key(KeyCode::Tab));
    assert_eq!(buffer_to_string(&model), "a\n\tb");

    handle_keystroke(&mut model, &keymap, Keystroke::key(KeyCode::Backspace));
    handle_keystroke(&mut model, &keymap, Keystroke::key(KeyCode::Backspace));
    assert_eq!(buffer_to_string(&model), "ab");
    assert_eq!(cursor(&model), (0, 1));
}

#[test]
fn test_bound_keys_run_their_commands() {
    let mut model = test_model("hello world", 0, 3);
    let keymap = default_keymap();

    handle_keystroke(&mut model, &keymap, Keystroke::ctrl('e'));
    assert_eq!(cursor(&model), (0, 11));
    handle_keystroke(&mut model, &keymap, Keystroke::key(KeyCode::Home));
    assert_eq!(cursor(&model), (0, 0));

    // ctrl-h deletes forward rather than backward
    handle_keystroke(&mut model, &keymap, Keystroke::ctrl('h'));
    assert_eq!(buffer_to_string(&model), "ello world");

    handle_keystroke(&mut model, &keymap, Keystroke::ctrl('k'));
    assert_eq!(buffer_to_string(&model), "");
}

#[test]
fn test_help_is_a_no_op() {
    let mut model = test_model("abc", 0, 1);
    assert_eq!(dispatch_command(&mut model, Command::Help), None);
    assert_eq!(buffer_to_string(&model), "abc");
    assert_eq!(cursor(&model), (0, 1));
}

#[test]
fn test_readonly_blocks_mutating_commands() {
    let mut model = test_model("abc", 0, 0).with_readonly(true);

    assert_eq!(dispatch_command(&mut model, Command::DeleteForward), None);
    assert_eq!(dispatch_command(&mut model, Command::KillLine), None);
    assert_eq!(dispatch_command(&mut model, Command::Save), None);
    assert_eq!(buffer_to_string(&model), "abc");

    // Movement still works
    dispatch_command(&mut model, Command::CursorRight);
    assert_eq!(cursor(&model), (0, 1));
}

// ========================================================================
// Quit
// ========================================================================

#[test]
fn test_quit_clean_document_stops_reading() {
    let model = test_model("abc", 0, 0);
    let mut input = ScriptedSource::new();
    input.push_byte(ctrl(b'q')).push_str("x");

    let app = run_headless(model, input);
    assert_eq!(buffer_to_string(app.model()), "abc");
}

#[test]
fn test_quit_dirty_document_asks_first() {
    let model = test_model("abc", 0, 0);
    let mut input = ScriptedSource::new();
    input.push_str("x").push_byte(ctrl(b'q'));

    let app = run_headless(model, input);
    assert!(app.model().quit_confirm);
    assert_eq!(
        status(app.model()).as_deref(),
        Some("There are unsaved changes. Press ctrl-q to quit or ctrl-s to save.")
    );
}

#[test]
fn test_second_quit_exits_with_unsaved_changes() {
    let model = test_model("abc", 0, 0);
    let mut input = ScriptedSource::new();
    input
        .push_str("x")
        .push_byte(ctrl(b'q'))
        .push_byte(ctrl(b'q'))
        .push_str("y");

    let app = run_headless(model, input);
    assert_eq!(buffer_to_string(app.model()), "xabc");
    assert!(app.model().document.is_modified);
}

#[test]
fn test_exit_clears_screen() {
    let model = test_model("abc", 0, 0);
    let app = run_headless(model, ScriptedSource::from_bytes(&[ctrl(b'q')]));
    let output = String::from_utf8_lossy(app.output());
    assert!(output.ends_with("\x1b[2J\x1b[H"));
}

#[test]
fn test_rebound_quit_key_is_named_in_messages() {
    let user = parse_keymap_yaml("ctrl+x: quit\nctrl+q: unbound\n").unwrap();
    let keymap = Keymap::with_bindings(merge_bindings(load_default_keymap(), user));
    let model = test_model("abc", 0, 0);

    let mut input = ScriptedSource::new();
    input.push_byte(ctrl(b'q')).push_byte(ctrl(b'x')).push_str("z");
    let mut app = App::new(model, keymap, input, Vec::new());

    assert_eq!(
        status(app.model()).as_deref(),
        Some("Press ctrl-x to exit. Press ctrl-s to save.")
    );
    app.run().unwrap();
    assert_eq!(buffer_to_string(app.model()), "abc");
}

// ========================================================================
// Save
// ========================================================================

#[test]
fn test_save_to_known_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let mut model = test_model("abc", 0, 3);
    model.document.file_path = Some(path.clone());

    let mut input = ScriptedSource::new();
    input.push_str("d").push_byte(ctrl(b's'));
    let app = run_headless(model, input);

    assert_eq!(std::fs::read(&path).unwrap(), b"abcd\n");
    assert!(!app.model().document.is_modified);
    assert_eq!(
        status(app.model()).as_deref(),
        Some("5 bytes written to disk")
    );
}

#[test]
fn test_save_as_prompts_for_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.txt");
    let model = test_model("abc", 0, 0);

    let mut input = ScriptedSource::new();
    input
        .push_byte(ctrl(b's'))
        .push_str(path.to_str().unwrap())
        .push_byte(ENTER);
    let app = run_headless(model, input);

    assert_eq!(std::fs::read(&path).unwrap(), b"abc\n");
    assert_eq!(app.model().document.file_path.as_ref(), Some(&path));
    assert!(!app.model().document.is_modified);
    assert_eq!(
        status(app.model()).as_deref(),
        Some("4 bytes written to disk")
    );
}

#[test]
fn test_save_as_escape_cancels() {
    let model = test_model("abc", 0, 0);
    let mut input = ScriptedSource::new();
    input.push_byte(ctrl(b's')).push_str("ignored.txt");
    push_escape(&mut input);

    let app = run_headless(model, input);
    assert_eq!(app.model().document.file_path, None);
    assert_eq!(status(app.model()).as_deref(), Some("Save cancelled"));
}

#[test]
fn test_save_failure_keeps_dirty_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");
    let mut model = test_model("abc", 0, 0);
    model.document.file_path = Some(path);

    let mut input = ScriptedSource::new();
    input.push_str("x").push_byte(ctrl(b's'));
    let app = run_headless(model, input);

    assert!(app.model().document.is_modified);
    assert!(status(app.model())
        .unwrap()
        .starts_with("error creating file: "));
}

#[test]
fn test_save_clears_quit_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut model = test_model("abc", 0, 0);
    model.document.file_path = Some(path);

    let mut input = ScriptedSource::new();
    input
        .push_str("x")
        .push_byte(ctrl(b'q'))
        .push_byte(ctrl(b's'));
    let app = run_headless(model, input);

    assert!(!app.model().quit_confirm);
}

#[test]
fn test_readonly_save_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut model = test_model("abc", 0, 0).with_readonly(true);
    model.document.file_path = Some(path.clone());

    let app = run_headless(model, ScriptedSource::from_bytes(&[ctrl(b's')]));
    assert!(!path.exists());
    assert_eq!(
        status(app.model()).as_deref(),
        Some("Press ctrl-q to exit.")
    );
}

// ========================================================================
// Open
// ========================================================================

#[test]
fn test_open_replaces_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("other.txt");
    std::fs::write(&path, "one\ntwo\n").unwrap();
    let model = test_model("abc", 0, 2);

    let mut input = ScriptedSource::new();
    input
        .push_byte(ctrl(b'o'))
        .push_str(path.to_str().unwrap())
        .push_byte(ENTER);
    let app = run_headless(model, input);

    assert_eq!(buffer_to_string(app.model()), "one\ntwo");
    assert_eq!(cursor(app.model()), (0, 0));
    assert_eq!(app.model().document.file_path.as_ref(), Some(&path));
    assert!(!app.model().document.is_modified);
}

#[test]
fn test_open_missing_file_reports() {
    let model = test_model("abc", 0, 0);
    let mut input = ScriptedSource::new();
    input
        .push_byte(ctrl(b'o'))
        .push_str("/nonexistent/dir/file.txt")
        .push_byte(ENTER);
    let app = run_headless(model, input);

    assert_eq!(buffer_to_string(app.model()), "abc");
    assert_eq!(
        status(app.model()).as_deref(),
        Some("Failed to open file /nonexistent/dir/file.txt")
    );
}

#[test]
fn test_open_empty_name_cancels() {
    let model = test_model("abc", 0, 0);
    let mut input = ScriptedSource::new();
    input.push_byte(ctrl(b'o')).push_byte(ENTER);
    let app = run_headless(model, input);

    assert_eq!(buffer_to_string(app.model()), "abc");
    assert_eq!(status(app.model()).as_deref(), Some("Open cancelled"));
}

// ========================================================================
// Terminal events
// ========================================================================

#[test]
fn test_resize_events_are_applied() {
    let (tx, rx) = mpsc::channel();
    tx.send((40, 10)).unwrap();

    let model = test_model("abc", 0, 0);
    let mut app = headless_app(model, ScriptedSource::new()).with_resize_events(rx);
    app.run().unwrap();

    assert_eq!(app.model().window_size, (40, 10));
    assert_eq!(app.model().editor.viewport.visible_lines, 8);
    assert_eq!(app.model().editor.viewport.visible_columns, 40);
}

#[test]
fn test_open_error_message_survives_startup() {
    let mut model = test_model("", 0, 0);
    model.document.file_path = Some(PathBuf::from("missing.txt"));
    model.set_status("Failed to open file missing.txt");

    let app = headless_app(model, ScriptedSource::new());
    assert_eq!(
        status(app.model()).as_deref(),
        Some("Failed to open file missing.txt")
    );
}
