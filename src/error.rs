//! Error types for Spana.

use thiserror::Error;

/// Library-level error type for Spana operations.
#[derive(Error, Debug)]
pub enum SpanaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Trends provider error: {0}")]
    Trends(String),

    #[error("Web search error: {0}")]
    Search(String),

    #[error("YouTube search error: {0}")]
    Youtube(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Missing API key: {0}. Set it in the config file or environment.")]
    MissingApiKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Spana operations.
pub type Result<T> = std::result::Result<T, SpanaError>;
