//! Byte sources for the key decoder
//!
//! In raw mode a read returns after at most one timeout tick even when no key
//! was pressed, so "no data yet" is an ordinary outcome rather than an error.

use std::collections::VecDeque;
use std::io::{self, Read};

/// Result of one attempt to read a byte
#[derive(Debug)]
pub enum ReadOutcome {
    /// A byte arrived
    Byte(u8),
    /// The read timed out with no data
    Timeout,
    /// The device failed
    Error(io::Error),
}

/// Anything the decoder can pull bytes from
pub trait ByteSource {
    /// Make one read attempt
    fn read_byte(&mut self) -> ReadOutcome;
}

/// Standard input in raw mode
#[derive(Debug)]
pub struct StdinSource {
    stdin: io::Stdin,
}

impl StdinSource {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> ReadOutcome {
        let mut buf = [0u8; 1];
        match self.stdin.lock().read(&mut buf) {
            Ok(0) => ReadOutcome::Timeout,
            Ok(_) => ReadOutcome::Byte(buf[0]),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
                ) =>
            {
                ReadOutcome::Timeout
            }
            Err(e) => ReadOutcome::Error(e),
        }
    }
}

/// Scripted input for headless runs and tests
///
/// Replays queued bytes and timeouts in order. Once empty every read fails
/// with `UnexpectedEof`, which ends an editor session driven by it.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    queue: VecDeque<Option<u8>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that yields `bytes` and then runs dry
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut source = Self::new();
        source.push_bytes(bytes);
        source
    }

    pub fn push_byte(&mut self, byte: u8) -> &mut Self {
        self.queue.push_back(Some(byte));
        self
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.queue.extend(bytes.iter().copied().map(Some));
        self
    }

    /// Queue text as its UTF-8 bytes
    pub fn push_str(&mut self, text: &str) -> &mut Self {
        self.push_bytes(text.as_bytes())
    }

    /// Queue one read that times out
    pub fn push_timeout(&mut self) -> &mut Self {
        self.queue.push_back(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl ByteSource for ScriptedSource {
    fn read_byte(&mut self) -> ReadOutcome {
        match self.queue.pop_front() {
            Some(Some(byte)) => ReadOutcome::Byte(byte),
            Some(None) => ReadOutcome::Timeout,
            None => ReadOutcome::Error(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted input exhausted",
            )),
        }
    }
}
