//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them and feeds any result back in as a message.

use std::path::PathBuf;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw
    Redraw,
    /// Write `content` to `path`; answers with `AppMsg::SaveCompleted`
    SaveFile { path: PathBuf, content: Vec<u8> },
    /// Read `path`; answers with `AppMsg::FileLoaded`
    LoadFile { path: PathBuf },
    /// Ask for a file name to save under
    PromptSaveAs,
    /// Ask for a file name to open
    PromptOpenFile,
    /// Run the incremental search prompt
    Find,
    /// Briefly move the cursor to the bracket that `close` closes
    MatchBracket { open: char, close: char },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }
}

