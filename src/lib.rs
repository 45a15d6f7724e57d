//! tedit - a small terminal text editor
//!
//! This crate provides the core types and logic for a raw-mode terminal
//! editor implementing the Elm Architecture pattern: keys become messages,
//! `update` changes the model and returns commands, and the view redraws
//! the whole screen from the model.

pub mod bracket;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod search;
pub mod terminal;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::App;
