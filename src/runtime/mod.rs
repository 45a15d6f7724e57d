//! Runtime module - terminal integration
//!
//! - `app` - main loop, prompts, search and bracket flash
//! - `input` - keystroke to message mapping

pub mod app;
pub mod input;

pub use app::App;
pub use input::{dispatch_command, handle_keystroke};
