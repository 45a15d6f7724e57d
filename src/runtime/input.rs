//! Keyboard input handling
//!
//! Keys go through the keymap first. Anything the keymap doesn't bind falls
//! back to the built-in rules: closing brackets insert and flash their
//! partner, Enter/Backspace/Tab edit, and printable characters type
//! themselves.

use crate::bracket::opening_bracket;
use crate::commands::Cmd;
use crate::keymap::{Command, KeyCode, Keymap, Keystroke};
use crate::messages::{DocumentMsg, Msg};
use crate::model::AppModel;
use crate::update::update;
use crate::util::is_printable;

/// Handle one decoded keystroke
pub fn handle_keystroke(model: &mut AppModel, keymap: &Keymap, keystroke: Keystroke) -> Option<Cmd> {
    match keymap.lookup(&keystroke) {
        Some(command) => dispatch_command(model, command),
        None => handle_unbound_key(model, keystroke),
    }
}

/// Run a keymap command through `update`
pub fn dispatch_command(model: &mut AppModel, command: Command) -> Option<Cmd> {
    if model.readonly && command.is_mutating() {
        tracing::debug!(%command, "ignored in read-only mode");
        return None;
    }

    let cmds: Vec<Cmd> = command
        .to_msgs()
        .into_iter()
        .filter_map(|msg| update(model, msg))
        .collect();

    match cmds.len() {
        0 => None,
        1 => cmds.into_iter().next(),
        _ => Some(Cmd::batch(cmds)),
    }
}

fn handle_unbound_key(model: &mut AppModel, keystroke: Keystroke) -> Option<Cmd> {
    match keystroke.key {
        KeyCode::Char(ch) if keystroke.mods.is_empty() => {
            if let Some(open) = opening_bracket(ch) {
                if model.readonly {
                    return None;
                }
                update(model, Msg::insert_char(ch));
                return Some(Cmd::MatchBracket { open, close: ch });
            }
            if is_printable(ch) {
                update(model, Msg::insert_char(ch))
            } else {
                None
            }
        }
        KeyCode::Enter => update(model, Msg::Document(DocumentMsg::InsertNewline)),
        KeyCode::Backspace => update(model, Msg::Document(DocumentMsg::DeleteBackward)),
        KeyCode::Tab => update(model, Msg::insert_char('\t')),
        _ => None,
    }
}
