//! YAML configuration parsing for keymaps
//!
//! A keymap file is a flat mapping from key combination to action name:
//!
//! ```yaml
//! ctrl+q: quit
//! ctrl+s: save
//! home: line_start
//! ctrl+g: unbound
//! ```
//!
//! JSON parses as YAML, so `{"ctrl+q": "quit"}` works too.

use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Errors that can occur when loading keymaps
#[derive(Debug, Error)]
pub enum KeymapError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|source| KeymapError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from a YAML string, keeping file order
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::Parse(e.to_string()))?;

    let mapping = match value {
        serde_yaml::Value::Null => return Ok(Vec::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => {
            return Err(KeymapError::Parse(
                "expected a mapping of key to action".to_string(),
            ))
        }
    };

    let mut bindings = Vec::with_capacity(mapping.len());
    for (key, value) in &mapping {
        let key = scalar_string(key)
            .ok_or_else(|| KeymapError::Parse(format!("key must be a string: {:?}", key)))?;
        let command = scalar_string(value).ok_or_else(|| {
            KeymapError::Parse(format!("action for '{}' must be a string", key))
        })?;

        let keystroke = parse_key_string(&key)?;
        let command = parse_command(&command)?;
        bindings.push(Keybinding::new(keystroke, command));
    }

    Ok(bindings)
}

/// YAML reads `1: quit` with an integer key; accept any scalar
fn scalar_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a key string like "ctrl+shift+up" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in split_key_tokens(key_str) {
        let part_lower = part.to_lowercase();
        match part_lower.as_str() {
            "ctrl" | "control" => {
                mods = mods | Modifiers::CTRL;
            }
            "shift" => {
                mods = mods | Modifiers::SHIFT;
            }
            "alt" | "option" | "opt" => {
                mods = mods | Modifiers::ALT;
            }
            "meta" | "super" | "win" => {
                mods = mods | Modifiers::META;
            }
            _ => {
                if key_part.is_some() {
                    return Err(KeymapError::InvalidKey(format!(
                        "Multiple keys in binding: {}",
                        key_str
                    )));
                }
                key_part = Some(parse_key_code(part)?);
            }
        }
    }

    let key = key_part
        .ok_or_else(|| KeymapError::InvalidKey(format!("No key found in binding: {}", key_str)))?;

    Ok(terminal_alias(letter_case(Keystroke::new(key, mods))))
}

/// The terminal sends ctrl letters in lower case and shifted letters as
/// the upper-case byte
fn letter_case(stroke: Keystroke) -> Keystroke {
    match stroke.key {
        KeyCode::Char(c) if c.is_ascii_alphabetic() && stroke.mods.ctrl() => {
            Keystroke::new(KeyCode::Char(c.to_ascii_lowercase()), stroke.mods)
        }
        KeyCode::Char(c) if c.is_ascii_alphabetic() && stroke.mods.shift() => Keystroke::new(
            KeyCode::Char(c.to_ascii_uppercase()),
            stroke.mods.without(Modifiers::SHIFT),
        ),
        _ => stroke,
    }
}

/// Split on `+`, treating a trailing `+` (as in `ctrl++`) as the key itself
fn split_key_tokens(key_str: &str) -> Vec<&str> {
    let key_str = key_str.trim();
    if let Some(prefix) = key_str.strip_suffix("++") {
        let mut parts: Vec<&str> = prefix.split('+').collect();
        parts.push("+");
        return parts;
    }
    if key_str == "+" {
        return vec!["+"];
    }
    key_str.split('+').map(str::trim).collect()
}

/// Parse a key code from string. Single characters keep their case; named
/// keys match in any case.
pub fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    match key.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Char(' ')),

        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),

        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdn" => Ok(KeyCode::PageDown),

        _ => Err(KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

/// Rewrite combinations a terminal sends as the same byte as a named key
fn terminal_alias(stroke: Keystroke) -> Keystroke {
    if stroke.mods != Modifiers::CTRL {
        return stroke;
    }
    match stroke.key {
        KeyCode::Char('i') => Keystroke::key(KeyCode::Tab),
        KeyCode::Char('m') => Keystroke::key(KeyCode::Enter),
        KeyCode::Char('[') => Keystroke::key(KeyCode::Escape),
        _ => stroke,
    }
}

/// Parse a command name string into a Command enum
fn parse_command(cmd: &str) -> Result<Command, KeymapError> {
    Command::from_str(cmd).map_err(|_| KeymapError::InvalidCommand(cmd.to_string()))
}
