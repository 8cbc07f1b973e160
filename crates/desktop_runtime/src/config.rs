//! Shell configuration embedded at build time from `shell.config.toml`.

use leptos::logging;
use serde::{Deserialize, Serialize};

include!(concat!(env!("OUT_DIR"), "/shell_config_generated.rs"));

/// Sizing rules for windows that do not declare a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDefaults {
    /// Share of the desktop surface a window covers, per axis.
    pub viewport_percent: i32,
    pub max_width: i32,
    pub max_height: i32,
}

impl Default for WindowDefaults {
    fn default() -> Self {
        Self {
            viewport_percent: 80,
            max_width: 800,
            max_height: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    pub lock_password: String,
    pub taskbar_height_px: i32,
    pub restart_delay_ms: u32,
    pub clock_tick_ms: u32,
    pub battery_drift_interval_ms: u32,
    pub window_defaults: WindowDefaults,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            lock_password: "aryan".to_string(),
            taskbar_height_px: 48,
            restart_delay_ms: 5_000,
            clock_tick_ms: 1_000,
            battery_drift_interval_ms: 60_000,
            window_defaults: WindowDefaults::default(),
        }
    }
}

impl ShellConfig {
    /// Parses the embedded configuration, falling back to defaults when it is unreadable.
    pub fn load() -> Self {
        Self::from_json(SHELL_CONFIG_JSON).unwrap_or_else(|err| {
            logging::warn!("embedded shell config rejected, using defaults: {err}");
            Self::default()
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
