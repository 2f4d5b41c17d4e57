//! Configuration settings for Spana.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub trends: TrendsSettings,
    pub search: SearchSettings,
    pub youtube: YoutubeSettings,
    pub llm: LlmSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Google Trends provider settings.
///
/// Locale and timezone are fixed per client; individual lookups only carry
/// a keyword and timeframe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendsSettings {
    /// Host language sent to the provider (e.g. "en-US").
    pub locale: String,
    /// UTC offset in minutes sent to the provider.
    pub utc_offset_minutes: i32,
}

impl Default for TrendsSettings {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            utc_offset_minutes: 360,
        }
    }
}

/// Web search (Serper) settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchSettings {
    /// Serper API key. Falls back to the SERPER_API_KEY environment variable.
    pub api_key: Option<String>,
}

impl SearchSettings {
    /// Resolve the API key from config or environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("SERPER_API_KEY").ok())
    }
}

/// YouTube Data API settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct YoutubeSettings {
    /// YouTube Data API key. Falls back to the YOUTUBE_API_KEY environment variable.
    pub api_key: Option<String>,
}

impl YoutubeSettings {
    /// Resolve the API key from config or environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var("YOUTUBE_API_KEY").ok())
    }
}

/// LLM backend settings for agent definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Model name bound into agent definitions.
    pub model: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4-turbo-preview".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::SpanaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spana")
            .join("config.toml")
    }
}
