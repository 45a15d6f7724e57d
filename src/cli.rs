//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening a file, or starting on an empty buffer
//! - Read-only sessions
//! - An extra keymap file layered over the defaults

use clap::Parser;
use std::path::PathBuf;

use crate::model::Document;

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "tedit", version, about = "A small terminal text editor")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Open read-only: navigation and search work, editing and saving don't
    #[arg(short = 'r', long)]
    pub readonly: bool,

    /// Keymap file layered over the default and user keymaps
    #[arg(short = 'k', long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// File to open, if any
    pub path: Option<PathBuf>,
    pub readonly: bool,
    /// Extra keymap layer
    pub keymap: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> StartupConfig {
        StartupConfig {
            path: self.path,
            readonly: self.readonly,
            keymap: self.keymap,
        }
    }
}

impl StartupConfig {
    /// Load the document to start with.
    ///
    /// A path that can't be read gives an empty document that will be saved
    /// to that path, along with a status message saying what went wrong.
    pub fn open_document(&self) -> (Document, Option<String>) {
        let Some(path) = &self.path else {
            return (Document::new(), None);
        };

        match Document::from_file(path) {
            Ok(document) => {
                tracing::info!(
                    "Opened {} ({} lines)",
                    path.display(),
                    document.line_count()
                );
                (document, None)
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", path.display(), e);
                (
                    Document::new_with_path(path.clone()),
                    Some(format!("Failed to open file {}", path.display())),
                )
            }
        }
    }
}
