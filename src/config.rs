//! Startup configuration read from the page URL.

use std::str::FromStr;

pub const CANVAS_ID: &str = "glCanvas";
pub const SHADER_PARAM: &str = "shader";
pub const LOG_PARAM: &str = "log";

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Requested fragment shader path, `None` for the built-in default.
    pub shader: Option<String>,
    pub log_level: log::Level,
    pub canvas_id: String,
    /// Passed as the `powerPreference` context attribute.
    pub power_preference: &'static str,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            shader: None,
            log_level: log::Level::Info,
            canvas_id: CANVAS_ID.to_string(),
            power_preference: "low-power",
        }
    }
}

impl ViewerConfig {
    /// Builds the config from raw query parameter values. An empty `shader`
    /// value counts as absent; an unknown `log` value keeps the default level.
    pub fn from_params(shader: Option<String>, log: Option<String>) -> Self {
        let mut config = Self::default();
        config.shader = shader.filter(|s| !s.is_empty());
        if let Some(level) = log.as_deref().and_then(|l| log::Level::from_str(l).ok()) {
            config.log_level = level;
        }
        config
    }
}
