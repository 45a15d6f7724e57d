//! Frame abstraction for drawing primitives
//!
//! Wraps the byte buffer a frame is composed into, so rendering code writes
//! named operations instead of raw escape sequences. Nothing reaches the
//! terminal until the caller writes the finished buffer in one go.

/// A frame buffer of terminal output
pub struct Frame<'a> {
    buffer: &'a mut Vec<u8>,
}

impl<'a> Frame<'a> {
    pub fn new(buffer: &'a mut Vec<u8>) -> Self {
        Self { buffer }
    }

    pub fn hide_cursor(&mut self) {
        self.buffer.extend_from_slice(b"\x1b[?25l");
    }

    pub fn show_cursor(&mut self) {
        self.buffer.extend_from_slice(b"\x1b[?25h");
    }

    /// Cursor to the top-left corner
    pub fn home(&mut self) {
        self.buffer.extend_from_slice(b"\x1b[H");
    }

    /// Cursor to a 1-based row and column
    pub fn move_to(&mut self, row: usize, column: usize) {
        self.buffer
            .extend_from_slice(format!("\x1b[{};{}H", row, column).as_bytes());
    }

    pub fn clear_to_end_of_line(&mut self) {
        self.buffer.extend_from_slice(b"\x1b[K");
    }

    pub fn clear_screen(&mut self) {
        self.buffer.extend_from_slice(b"\x1b[2J");
    }

    pub fn newline(&mut self) {
        self.buffer.extend_from_slice(b"\r\n");
    }

    pub fn invert(&mut self) {
        self.buffer.extend_from_slice(b"\x1b[7m");
    }

    pub fn reset_attributes(&mut self) {
        self.buffer.extend_from_slice(b"\x1b[m");
    }

    pub fn text(&mut self, text: &str) {
        self.buffer.extend_from_slice(text.as_bytes());
    }

    pub fn chars(&mut self, chars: &[char]) {
        let mut utf8 = [0u8; 4];
        for ch in chars {
            self.buffer
                .extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }
    }

    pub fn spaces(&mut self, count: usize) {
        self.buffer.extend(std::iter::repeat(b' ').take(count));
    }
}
