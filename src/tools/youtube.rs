//! YouTube video search tool backed by the YouTube Data API v3.

use super::{names, Tool};
use crate::error::{Result, SpanaError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RESULTS: u32 = 5;

#[derive(Debug, Deserialize)]
struct YoutubeSearchArgs {
    /// The search query.
    query: String,
    /// Maximum number of videos to return.
    #[serde(default = "default_max_results")]
    max_results: u32,
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: VideoId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct VideoId {
    #[serde(rename = "videoId", default)]
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(rename = "channelTitle", default)]
    channel_title: String,
}

/// Video search via the YouTube Data API.
pub struct YoutubeSearchTool {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl YoutubeSearchTool {
    /// Create the tool. The key may be absent; execution then fails with a
    /// configuration error rather than at construction.
    pub fn new(api_key: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Override the API base URL. Used for tests against a local stub.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Search for videos and format titles and URLs for the agent.
    pub async fn search(&self, query: &str, max_results: u32) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SpanaError::MissingApiKey("YOUTUBE_API_KEY".to_string()))?;

        debug!("Searching YouTube for: {}", query);

        let response = self
            .http
            .get(format!("{}/youtube/v3/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("q", query),
                ("maxResults", &max_results.to_string()),
                ("key", api_key),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpanaError::Youtube(format!(
                "video search failed with status {}",
                response.status()
            )));
        }

        let body: SearchListResponse = response.json().await?;
        Ok(format_results(query, &body.items))
    }
}

fn format_results(query: &str, items: &[SearchItem]) -> String {
    if items.is_empty() {
        return format!("No videos found for {}", query);
    }

    let formatted = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "{}. {} ({})\n   https://www.youtube.com/watch?v={}",
                i + 1,
                item.snippet.title,
                item.snippet.channel_title,
                item.id.video_id
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Videos for \"{}\":\n\n{}", query, formatted)
}

#[async_trait]
impl Tool for YoutubeSearchTool {
    fn name(&self) -> &str {
        names::YOUTUBE_VIDEO_SEARCH
    }

    fn description(&self) -> &str {
        "Search YouTube for videos and interviews, returning titles and URLs."
    }

    fn parameters(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of videos to return (default: 5)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<String> {
        let args: YoutubeSearchArgs = serde_json::from_value(args)?;
        self.search(&args.query, args.max_results).await
    }
}
