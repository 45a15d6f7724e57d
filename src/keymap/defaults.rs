//! Default keybindings for the editor
//!
//! The shipped bindings live in `keymap.yaml` at the crate root and are
//! compiled into the binary. [`default_bindings`] is the same table in code,
//! used if the embedded file ever fails to parse.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml, KeymapError};
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Get the embedded default keymap YAML
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults, then user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. `user_path`, normally `~/.config/tedit/keymap.yaml`, if it exists
/// 3. `extra`, the file given with `--keymap`
///
/// A layer that exists but fails to load is an error. Bindings to `unbound`
/// remove the key from the layers below.
pub fn load_keymap(
    user_path: Option<&Path>,
    extra: Option<&Path>,
) -> Result<Vec<Keybinding>, KeymapError> {
    let mut bindings = load_default_keymap();

    if let Some(user_path) = user_path.filter(|p| p.exists()) {
        let user_bindings = load_keymap_file(user_path)?;
        tracing::info!(
            "Merging user keymap from {} ({} bindings)",
            user_path.display(),
            user_bindings.len()
        );
        bindings = merge_bindings(bindings, user_bindings);
    }

    if let Some(extra) = extra {
        let extra_bindings = load_keymap_file(extra)?;
        tracing::info!(
            "Merging keymap from {} ({} bindings)",
            extra.display(),
            extra_bindings.len()
        );
        bindings = merge_bindings(bindings, extra_bindings);
    }

    Ok(bindings)
}

/// The embedded defaults, or the hardcoded table if they fail to parse
pub fn load_default_keymap() -> Vec<Keybinding> {
    match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    }
}

/// Merge user bindings into base bindings
///
/// - A user binding for a keystroke replaces the base binding for it
/// - A user binding to `Unbound` removes the base binding
/// - Anything else is appended
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded default keybindings
pub fn default_bindings() -> Vec<Keybinding> {
    let ctrl = Modifiers::CTRL;
    let none = Modifiers::NONE;

    vec![
        // Application
        bind(KeyCode::Char('q'), ctrl, Command::Quit),
        bind(KeyCode::Char('s'), ctrl, Command::Save),
        bind(KeyCode::Char('o'), ctrl, Command::OpenFile),
        bind(KeyCode::Char('f'), ctrl, Command::Find),
        bind(KeyCode::Char('g'), ctrl, Command::Help),
        // Line navigation
        bind(KeyCode::Char('a'), ctrl, Command::LineStart),
        bind(KeyCode::Home, none, Command::LineStart),
        bind(KeyCode::Char('e'), ctrl, Command::LineEnd),
        bind(KeyCode::End, none, Command::LineEnd),
        // Deletion
        bind(KeyCode::Delete, none, Command::DeleteForward),
        bind(KeyCode::Char('h'), ctrl, Command::DeleteForward),
        bind(KeyCode::Char('k'), ctrl, Command::KillLine),
        // Cursor movement
        bind(KeyCode::Up, none, Command::CursorUp),
        bind(KeyCode::Down, none, Command::CursorDown),
        bind(KeyCode::Left, none, Command::CursorLeft),
        bind(KeyCode::Right, none, Command::CursorRight),
        bind(KeyCode::PageUp, none, Command::PageUp),
        bind(KeyCode::PageDown, none, Command::PageDown),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
