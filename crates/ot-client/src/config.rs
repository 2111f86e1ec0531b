//! Client Configuration
//!
//! `Config` is injected once when the page is built and never changes.
//! `Settings` is the runtime copy of the values scripts may tweak
//! through the accessor pairs on `Session`.

use serde::Deserialize;

/// Injected page configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session id sent with every request
    pub session_id: String,

    /// Maximum option text width in selection lists (0 = unlimited)
    pub max_select_width: usize,

    /// Automatically clear selection lists before filling them
    pub auto_clear: bool,

    /// Status bar text when a request goes out
    pub fetch_start: String,
    /// Status bar text while a reply is being applied
    pub fetch_display: String,
    /// Status bar text once a reply has been applied
    pub fetch_finish: String,

    /// Alert shown when a reply carries no content (empty = no alert)
    pub null_reply: String,
    /// Alert shown when the browser cannot be classified (empty = no alert)
    pub wrong_browser: String,

    /// Name of the field or expression that carries the run mode
    pub run_mode_param: String,

    /// Reported for a checked checkbox left at the default `on` value
    pub checked_true_value: String,
    /// Reported for an unchecked checkbox or a radio group with no selection
    pub checked_false_value: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_id: String::new(),
            max_select_width: 0,
            auto_clear: true,
            fetch_start: "Fetching...".to_string(),
            fetch_display: "Displaying...".to_string(),
            fetch_finish: "Done.".to_string(),
            null_reply: String::new(),
            wrong_browser: String::new(),
            run_mode_param: "run_mode".to_string(),
            checked_true_value: "1".to_string(),
            checked_false_value: "0".to_string(),
        }
    }
}

impl Config {
    /// Parse configuration injected as a JSON object. Missing keys keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Mutable runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_select_width: usize,
    pub auto_clear: bool,
    pub fetch_start: String,
    pub fetch_display: String,
    pub fetch_finish: String,
    pub null_reply: String,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            max_select_width: config.max_select_width,
            auto_clear: config.auto_clear,
            fetch_start: config.fetch_start.clone(),
            fetch_display: config.fetch_display.clone(),
            fetch_finish: config.fetch_finish.clone(),
            null_reply: config.null_reply.clone(),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
