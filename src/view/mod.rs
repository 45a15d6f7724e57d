//! View module - frame composition
//!
//! Every frame is a full redraw built from the model alone: text rows,
//! status bar, message line and finally the cursor. The result is one
//! buffer the runtime writes to the terminal in a single call.

pub mod frame;

pub use frame::Frame;

use std::time::Instant;

use crate::model::{status_bar_text, AppModel};

/// Welcome banner shown on an empty document
pub fn welcome_message() -> String {
    format!("tedit editor -- version {}", env!("CARGO_PKG_VERSION"))
}

/// Compose a complete frame for `model` into `out`.
///
/// Call after [`EditorState::scroll`] so the viewport already contains the
/// cursor; `update()` does this after every message.
///
/// [`EditorState::scroll`]: crate::model::EditorState::scroll
pub fn render_frame(model: &AppModel, now: Instant, out: &mut Vec<u8>) {
    let mut frame = Frame::new(out);
    let width = model.editor.viewport.visible_columns;

    frame.hide_cursor();
    frame.home();

    draw_rows(&mut frame, model);
    draw_status_bar(&mut frame, model, width);
    draw_message_line(&mut frame, model, now, width);

    let (row, column) = model.editor.screen_position();
    frame.move_to(row, column);
    frame.show_cursor();
}

/// Clear the whole screen and home the cursor
pub fn clear_screen(out: &mut Vec<u8>) {
    let mut frame = Frame::new(out);
    frame.clear_screen();
    frame.home();
}

fn draw_rows(frame: &mut Frame, model: &AppModel) {
    let document = &model.document;
    let viewport = &model.editor.viewport;
    let width = viewport.visible_columns;

    for screen_row in 0..viewport.visible_lines {
        let line_idx = screen_row + viewport.top_line;

        match document.line(line_idx) {
            Some(line) => {
                let render = line.render();
                let start = viewport.left_column.min(render.len());
                let end = (start + width).min(render.len());
                frame.chars(&render[start..end]);
            }
            None if document.is_empty() && screen_row == viewport.visible_lines / 3 => {
                draw_banner(frame, width);
            }
            None => frame.text("~"),
        }

        frame.clear_to_end_of_line();
        frame.newline();
    }
}

fn draw_banner(frame: &mut Frame, width: usize) {
    let banner: String = welcome_message().chars().take(width).collect();
    let mut padding = (width - banner.chars().count()) / 2;
    if padding > 0 {
        frame.text("~");
        padding -= 1;
    }
    frame.spaces(padding);
    frame.text(&banner);
}

fn draw_status_bar(frame: &mut Frame, model: &AppModel, width: usize) {
    frame.invert();
    frame.text(&status_bar_text(
        &model.document,
        model.editor.cursor,
        width,
    ));
    frame.reset_attributes();
    frame.newline();
}

fn draw_message_line(frame: &mut Frame, model: &AppModel, now: Instant, width: usize) {
    frame.clear_to_end_of_line();
    if let Some(message) = model.ui.status_text(now) {
        let visible: String = message.chars().take(width).collect();
        frame.text(&visible);
    }
}
