//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

mod schema_channels;

pub use schema_channels::*;

/// Shared default helper used by submodules.
pub(crate) fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub popup: PopupConfig,

    #[serde(default)]
    pub dispatch: DispatchConfig,

    #[serde(default)]
    pub channels: ChannelsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Alert popup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupConfig {
    /// Countdown length in ticks. `0` means manual dismiss only.
    #[serde(default = "default_duration_ticks")]
    pub duration_ticks: u32,

    /// Length of one tick.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Exit animation length before the popup is removed.
    #[serde(default = "default_closing_delay_ms")]
    pub closing_delay_ms: u64,

    #[serde(default = "default_true")]
    pub sound_enabled: bool,

    #[serde(default = "default_sound_path")]
    pub sound_path: String,

    /// Playback volume in `0.0..=1.0`.
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            duration_ticks: default_duration_ticks(),
            tick_interval_ms: default_tick_interval_ms(),
            closing_delay_ms: default_closing_delay_ms(),
            sound_enabled: default_true(),
            sound_path: default_sound_path(),
            volume: default_volume(),
        }
    }
}

fn default_duration_ticks() -> u32 {
    5
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_closing_delay_ms() -> u64 {
    400
}

fn default_sound_path() -> String {
    "assets/new-notification.mp3".to_string()
}

fn default_volume() -> f32 {
    0.5
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for rolling log files.
    #[serde(default = "default_log_directory")]
    pub directory: String,

    #[serde(default = "default_true")]
    pub file_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_log_directory(),
            file_enabled: default_true(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "~/.watchpost/logs".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
