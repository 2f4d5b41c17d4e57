//! Configuration module for Spana.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    GeneralSettings, LlmSettings, SearchSettings, Settings, TrendsSettings, YoutubeSettings,
};
