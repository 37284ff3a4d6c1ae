use serde::{Deserialize, Serialize};

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed sidebar config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Route configuration for active-path matching.
///
/// Both fields default to empty, which makes the corresponding strip step a
/// no-op: a site without locales or a base path needs no config at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Locale route prefix (e.g. `/zh`), stripped from both the current
    /// location and candidate links before comparison
    #[serde(default)]
    pub lang_route_prefix: String,
    /// Application base path (e.g. `/docs`), stripped from the current
    /// location only
    #[serde(default)]
    pub base: String,
}

impl SidebarConfig {
    /// Parse config from TOML text
    pub fn from_toml_str(text: &str) -> Result<SidebarConfig, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
