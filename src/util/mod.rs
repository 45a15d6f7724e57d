//! Utility modules

pub mod text;

pub use text::{display_column, expand_tabs, is_printable, tab_advance, TABULATOR_WIDTH};
