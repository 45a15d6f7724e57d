//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    /// All registered bindings
    bindings: Vec<Keybinding>,
    /// Fast lookup by keystroke (index into bindings); a later binding for
    /// the same keystroke replaces an earlier one
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding to the keymap
    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.command == Command::Unbound {
            self.lookup.remove(&binding.keystroke);
            return;
        }
        self.lookup.insert(binding.keystroke, self.bindings.len());
        self.bindings.push(binding);
    }

    /// Look up the command for a keystroke
    ///
    /// A shifted keystroke with no binding of its own falls back to the
    /// unshifted binding, so shift+arrow moves like an arrow.
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup_exact(keystroke).or_else(|| {
            keystroke
                .without_shift()
                .and_then(|plain| self.lookup_exact(&plain))
        })
    }

    fn lookup_exact(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup
            .get(keystroke)
            .map(|&idx| self.bindings[idx].command)
    }

    /// Get all active bindings, in the order they were added
    pub fn bindings(&self) -> impl Iterator<Item = &Keybinding> {
        self.bindings
            .iter()
            .enumerate()
            .filter(|(idx, b)| self.lookup.get(&b.keystroke) == Some(idx))
            .map(|(_, b)| b)
    }

    /// Get the keybinding for a command (first active match)
    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings().find(|b| b.command == command)
    }

    /// Get display string for a command's keybinding
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.binding_for(command).map(|b| b.display_string())
    }

    /// Number of active bindings
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
