//! Editor update functions for cursor movement and paging.

use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::model::{AppModel, Position};

/// Handle editor messages (cursor movement)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    let document = &model.document;
    let editor = &mut model.editor;

    match msg {
        EditorMsg::MoveCursor(direction) => editor.move_cursor(document, direction),
        EditorMsg::MoveCursorLineStart => editor.move_line_start(),
        EditorMsg::MoveCursorLineEnd => editor.move_line_end(document),
        EditorMsg::PageUp => editor.page_up(document),
        EditorMsg::PageDown => editor.page_down(document),
        EditorMsg::SetCursorPosition { line, column } => {
            editor.set_cursor(document, Position::new(line, column))
        }
    }

    Some(Cmd::Redraw)
}
