//! Document update functions for text editing

use crate::commands::Cmd;
use crate::messages::{Direction, DocumentMsg};
use crate::model::AppModel;

/// Handle document messages (text editing)
///
/// Read-only sessions never get here; `update` filters mutating messages.
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertChar(ch) => {
            model.document.insert_char(&mut model.editor.cursor, ch);
        }

        DocumentMsg::InsertNewline => {
            model.document.insert_newline(&mut model.editor.cursor);
        }

        DocumentMsg::DeleteBackward => {
            model.document.delete_char(&mut model.editor.cursor);
        }

        DocumentMsg::DeleteForward => delete_forward(model),

        DocumentMsg::KillLine => {
            // The line break itself survives; only characters are removed.
            let line = model.editor.cursor.line;
            while model.editor.cursor.column < model.document.line_len(line) {
                delete_forward(model);
            }
        }
    }

    Some(Cmd::Redraw)
}

/// Delete the character under the cursor: one step right, then backspace.
///
/// At the end of a line this joins the next line on. At the end of the
/// last line the cursor steps onto the virtual line below, where the
/// backspace deletes nothing. On the virtual line nothing moves.
fn delete_forward(model: &mut AppModel) {
    let before = model.editor.cursor;
    model.editor.move_cursor(&model.document, Direction::Right);
    if model.editor.cursor == before {
        return;
    }
    model.document.delete_char(&mut model.editor.cursor);
}
