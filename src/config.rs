//! Editor configuration
//!
//! Reads user preferences from `~/.config/tedit/config.yaml`. A missing or
//! malformed file never stops the editor; the defaults are used instead.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::MAX_MESSAGE_TIMEOUT;

/// Editor configuration loaded at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Width of a tab stop in display cells
    #[serde(default = "default_tab_stop")]
    pub tab_stop: usize,
    /// How long status messages stay on screen, in seconds
    #[serde(default = "default_message_timeout_secs")]
    pub message_timeout_secs: f64,
    /// How long the cursor rests on a matching bracket, in milliseconds
    #[serde(default = "default_bracket_flash_ms")]
    pub bracket_flash_ms: u64,
}

fn default_tab_stop() -> usize {
    crate::util::text::TABULATOR_WIDTH
}

fn default_message_timeout_secs() -> f64 {
    3.0
}

fn default_bracket_flash_ms() -> u64 {
    300
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: default_tab_stop(),
            message_timeout_secs: default_message_timeout_secs(),
            bracket_flash_ms: default_bracket_flash_ms(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<EditorConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would break rendering
    fn sanitized(mut self) -> Self {
        self.tab_stop = self.tab_stop.max(1);
        let timeout = self.message_timeout_secs;
        if !(0.0..=MAX_MESSAGE_TIMEOUT.as_secs_f64()).contains(&timeout) {
            tracing::warn!(
                "message_timeout_secs {} out of range, using {}",
                timeout,
                default_message_timeout_secs()
            );
            self.message_timeout_secs = default_message_timeout_secs();
        }
        self
    }

    /// Status message lifetime, capped at [`MAX_MESSAGE_TIMEOUT`]
    pub fn message_timeout(&self) -> Duration {
        let secs = self.message_timeout_secs;
        if secs.is_nan() || secs < 0.0 {
            return Duration::from_secs_f64(default_message_timeout_secs());
        }
        Duration::from_secs_f64(secs.min(MAX_MESSAGE_TIMEOUT.as_secs_f64()))
    }

    pub fn bracket_flash(&self) -> Duration {
        Duration::from_millis(self.bracket_flash_ms)
    }
}
