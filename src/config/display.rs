use serde::Deserialize;

/// How timestamps are rendered by the menu and the TUI.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono strftime pattern (default: "%Y-%m-%d %H:%M:%S")
    pub date_format: String,

    /// Convert timestamps to the local time zone (default: true)
    pub local_time: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d %H:%M:%S".to_string(),
            local_time: true,
        }
    }
}
