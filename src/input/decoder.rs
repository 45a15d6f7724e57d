//! Key decoder: raw terminal bytes to keystrokes
//!
//! The reverse of what a terminal emulator's input encoder does. Control
//! bytes become ctrl+letter, escape sequences become named keys, and the
//! two-byte UTF-8 forms of `å ä ö Å Ä Ö` become those letters. Any other
//! byte stands for itself. A read timeout part way through a sequence yields
//! a bare Escape, so a lone ESC press is never held back for long.

use std::io;

use super::source::{ByteSource, ReadOutcome};
use crate::keymap::{KeyCode, Keystroke, Modifiers};

const ESC: u8 = 0x1b;

/// Lead byte of the accented letters the decoder understands
const ACCENT_LEAD: u8 = 0xC3;

/// Decodes keystrokes from a byte source
#[derive(Debug)]
pub struct KeyDecoder<S> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Make one attempt to decode a key.
    ///
    /// `Ok(None)` means the read timed out, or the bytes formed a sequence
    /// with no key meaning. Device errors are returned as is.
    pub fn poll_key(&mut self) -> io::Result<Option<Keystroke>> {
        let Some(byte) = self.next_byte()? else {
            return Ok(None);
        };

        match byte {
            ESC => self.decode_escape(),
            ACCENT_LEAD => self.decode_accented(),
            _ => Ok(Some(keystroke_from_byte(byte))),
        }
    }

    /// Block until a key arrives
    pub fn read_key(&mut self) -> io::Result<Keystroke> {
        loop {
            if let Some(key) = self.poll_key()? {
                return Ok(key);
            }
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        match self.source.read_byte() {
            ReadOutcome::Byte(byte) => Ok(Some(byte)),
            ReadOutcome::Timeout => Ok(None),
            ReadOutcome::Error(e) => Err(e),
        }
    }

    fn decode_escape(&mut self) -> io::Result<Option<Keystroke>> {
        let escape = Some(Keystroke::key(KeyCode::Escape));

        let Some(first) = self.next_byte()? else {
            return Ok(escape);
        };
        let Some(second) = self.next_byte()? else {
            return Ok(escape);
        };

        let key = match (first, second) {
            (b'[', digit @ b'0'..=b'9') => {
                let Some(third) = self.next_byte()? else {
                    return Ok(escape);
                };
                match third {
                    b'~' => tilde_key(digit).map(Keystroke::key),
                    b';' => {
                        let Some(modifier) = self.next_byte()? else {
                            return Ok(escape);
                        };
                        let Some(last) = self.next_byte()? else {
                            return Ok(escape);
                        };
                        if modifier == b'2' {
                            arrow_key(last).map(|key| Keystroke::new(key, Modifiers::SHIFT))
                        } else {
                            None
                        }
                    }
                    _ => None,
                }
            }
            (b'[', letter) => arrow_key(letter)
                .or(match letter {
                    b'H' => Some(KeyCode::Home),
                    b'F' => Some(KeyCode::End),
                    _ => None,
                })
                .map(Keystroke::key),
            (b'O', b'H') => Some(Keystroke::key(KeyCode::Home)),
            (b'O', b'F') => Some(Keystroke::key(KeyCode::End)),
            _ => None,
        };

        if key.is_none() {
            tracing::trace!(target: "input", first, second, "unrecognised escape sequence");
        }
        Ok(key)
    }

    /// The byte after `0xC3`. Pairs outside the six letters give no key.
    fn decode_accented(&mut self) -> io::Result<Option<Keystroke>> {
        let Some(byte) = self.next_byte()? else {
            return Ok(Some(Keystroke::key(KeyCode::Escape)));
        };

        let letter = match byte {
            0xA5 => Some('å'),
            0xA4 => Some('ä'),
            0xB6 => Some('ö'),
            0x85 => Some('Å'),
            0x84 => Some('Ä'),
            0x96 => Some('Ö'),
            _ => None,
        };
        if letter.is_none() {
            tracing::trace!(target: "input", byte, "unsupported accented letter");
        }
        Ok(letter.map(Keystroke::char))
    }
}

/// Decode a single byte that doesn't start a sequence
pub fn keystroke_from_byte(byte: u8) -> Keystroke {
    match byte {
        13 => Keystroke::key(KeyCode::Enter),
        9 => Keystroke::key(KeyCode::Tab),
        127 => Keystroke::key(KeyCode::Backspace),
        ESC => Keystroke::key(KeyCode::Escape),
        1..=26 => Keystroke::ctrl((b'a' + byte - 1) as char),
        _ => Keystroke::char(byte as char),
    }
}

fn arrow_key(byte: u8) -> Option<KeyCode> {
    match byte {
        b'A' => Some(KeyCode::Up),
        b'B' => Some(KeyCode::Down),
        b'C' => Some(KeyCode::Right),
        b'D' => Some(KeyCode::Left),
        _ => None,
    }
}

/// `ESC [ <digit> ~` keys
fn tilde_key(digit: u8) -> Option<KeyCode> {
    match digit {
        b'1' | b'7' => Some(KeyCode::Home),
        b'4' | b'8' => Some(KeyCode::End),
        b'3' => Some(KeyCode::Delete),
        b'5' => Some(KeyCode::PageUp),
        b'6' => Some(KeyCode::PageDown),
        _ => None,
    }
}
