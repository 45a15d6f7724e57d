//! Command enum representing all bindable editor actions
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to zero or more `Msg` values for the Elm-style update loop.

use std::fmt;
use std::str::FromStr;

use crate::messages::{AppMsg, Direction, DocumentMsg, EditorMsg, Msg};

/// All editor commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Application
    // ========================================================================
    /// Quit, confirming first when there are unsaved changes
    Quit,
    /// Save the document
    Save,
    /// Prompt for a file and open it
    OpenFile,
    /// Incremental search
    Find,
    /// Help placeholder
    Help,

    // ========================================================================
    // Editing
    // ========================================================================
    /// Delete the character under the cursor
    DeleteForward,
    /// Delete to the end of the line
    KillLine,

    // ========================================================================
    // Cursor Movement
    // ========================================================================
    LineStart,
    LineEnd,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    PageUp,
    PageDown,

    /// Removes a binding when merged over another layer
    Unbound,
}

/// Every command with its config-file name
const NAMES: &[(Command, &str)] = &[
    (Command::Quit, "quit"),
    (Command::Save, "save"),
    (Command::OpenFile, "open_file"),
    (Command::Find, "find"),
    (Command::Help, "help"),
    (Command::DeleteForward, "delete_forward"),
    (Command::KillLine, "kill_line"),
    (Command::LineStart, "line_start"),
    (Command::LineEnd, "line_end"),
    (Command::CursorUp, "cursor_up"),
    (Command::CursorDown, "cursor_down"),
    (Command::CursorLeft, "cursor_left"),
    (Command::CursorRight, "cursor_right"),
    (Command::PageUp, "page_up"),
    (Command::PageDown, "page_down"),
    (Command::Unbound, "unbound"),
];

impl Command {
    /// Convert this command to the messages it dispatches
    pub fn to_msgs(self) -> Vec<Msg> {
        use Command::*;

        match self {
            Quit => vec![Msg::App(AppMsg::Quit)],
            Save => vec![Msg::App(AppMsg::SaveFile)],
            OpenFile => vec![Msg::App(AppMsg::OpenFile)],
            Find => vec![Msg::App(AppMsg::Find)],
            Help => vec![Msg::App(AppMsg::Help)],

            DeleteForward => vec![Msg::Document(DocumentMsg::DeleteForward)],
            KillLine => vec![Msg::Document(DocumentMsg::KillLine)],

            LineStart => vec![Msg::Editor(EditorMsg::MoveCursorLineStart)],
            LineEnd => vec![Msg::Editor(EditorMsg::MoveCursorLineEnd)],
            CursorUp => vec![Msg::move_cursor(Direction::Up)],
            CursorDown => vec![Msg::move_cursor(Direction::Down)],
            CursorLeft => vec![Msg::move_cursor(Direction::Left)],
            CursorRight => vec![Msg::move_cursor(Direction::Right)],
            PageUp => vec![Msg::Editor(EditorMsg::PageUp)],
            PageDown => vec![Msg::Editor(EditorMsg::PageDown)],

            Unbound => vec![], // Explicitly does nothing
        }
    }

    /// Whether the command changes the document or writes a file
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Command::Save | Command::DeleteForward | Command::KillLine
        )
    }

    /// The name used in keymap files
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(command, _)| *command == self)
            .map_or("unbound", |(_, name)| name)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(command, _)| *command)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names_round_trip() {
        for (command, name) in NAMES {
            assert_eq!(command.name(), *name);
            assert_eq!(Command::from_str(name), Ok(*command));
        }
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(Command::from_str("frobnicate"), Err(()));
    }

    #[test]
    fn test_command_unbound_empty() {
        assert!(Command::Unbound.to_msgs().is_empty());
    }

    #[test]
    fn test_command_to_msgs_movement() {
        let msgs = Command::CursorUp.to_msgs();
        assert_eq!(msgs.len(), 1);
        assert!(matches!(
            msgs[0],
            Msg::Editor(EditorMsg::MoveCursor(Direction::Up))
        ));
    }

    #[test]
    fn test_is_mutating() {
        assert!(Command::Save.is_mutating());
        assert!(Command::KillLine.is_mutating());
        assert!(!Command::Find.is_mutating());
        assert!(!Command::OpenFile.is_mutating());
    }
}
