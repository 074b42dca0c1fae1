use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the "Ctrl-K for commands" hint in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex overrides for theme slots, e.g. `highlight = "#FF0088"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Hex overrides keyed by category id
    #[serde(default)]
    pub category_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            category_colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// env_logger filter, e.g. "debug" or "mailpilot=trace"
    #[serde(default)]
    pub level: Option<String>,
    /// Log file for TUI sessions. Without one the TUI does not log.
    #[serde(default)]
    pub file: Option<PathBuf>,
}
