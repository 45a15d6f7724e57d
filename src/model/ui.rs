//! UI state - the status message line

use super::status_bar::TransientMessage;
use std::time::{Duration, Instant};

/// Default time a status message stays on screen
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(3);

/// UI state - status messages
#[derive(Debug, Clone)]
pub struct UiState {
    /// Transient message with auto-expiry
    pub transient_message: Option<TransientMessage>,
    /// How long new messages stay visible
    pub message_timeout: Duration,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self {
            transient_message: None,
            message_timeout: DEFAULT_MESSAGE_TIMEOUT,
        }
    }

    /// Create a UI state with a custom message timeout
    pub fn with_message_timeout(message_timeout: Duration) -> Self {
        Self {
            transient_message: None,
            message_timeout,
        }
    }

    /// Set the status message, restarting its timeout
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.transient_message = Some(TransientMessage::new(message, self.message_timeout));
    }

    pub fn clear_status(&mut self) {
        self.transient_message = None;
    }

    /// Text of the current message if it is still visible at `now`
    pub fn status_text(&self, now: Instant) -> Option<&str> {
        self.transient_message
            .as_ref()
            .filter(|msg| msg.is_visible_at(now))
            .map(|msg| msg.text.as_str())
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
