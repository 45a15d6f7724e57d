//! Terminal input: byte sources and the key decoder

mod decoder;
mod source;

pub use decoder::{keystroke_from_byte, KeyDecoder};
pub use source::{ByteSource, ReadOutcome, ScriptedSource, StdinSource};
