use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Caption behaviour configuration
///
/// This module holds the caller-supplied options that steer default
/// track selection. The host decides where the values come from (user
/// agent settings, persisted preferences); the library only reads them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CaptionConfig {
    /// Default language (BCP-47) used to pick tracks to show initially
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Whether subtitle/caption tracks matching the default language
    /// start out showing
    #[serde(default)]
    pub enable_captions_by_default: bool,

    /// Whether description tracks matching the default language start
    /// out showing
    #[serde(default)]
    pub enable_descriptions_by_default: bool,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for CaptionConfig {
    fn default() -> Self {
        CaptionConfig {
            default_language: default_language(),
            enable_captions_by_default: false,
            enable_descriptions_by_default: false,
        }
    }
}

impl CaptionConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse caption configuration")
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize caption configuration")
    }
}
