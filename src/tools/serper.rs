//! Web search tool backed by the Serper.dev API.

use super::{names, Tool};
use crate::error::{Result, SpanaError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://google.serper.dev";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_RESULTS: usize = 10;

#[derive(Debug, Deserialize)]
struct SearchArgs {
    /// The search query.
    query: String,
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

/// Internet search via Serper.
pub struct SerperSearchTool {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SerperSearchTool {
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

    /// Run a search and format the organic results for the agent.
    pub async fn search(&self, query: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SpanaError::MissingApiKey("SERPER_API_KEY".to_string()))?;

        debug!("Searching internet for: {}", query);

        let response = self
            .http
            .post(format!("{}/search", self.base_url))
            .header("X-API-KEY", api_key)
            .json(&serde_json::json!({"q": query}))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpanaError::Search(format!(
                "search request failed with status {}",
                response.status()
            )));
        }

        let body: SerperResponse = response.json().await?;
        Ok(format_results(query, &body.organic))
    }
}

fn format_results(query: &str, results: &[OrganicResult]) -> String {
    if results.is_empty() {
        return format!("No search results found for {}", query);
    }

    let formatted = results
        .iter()
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(i, r)| format!("{}. {}\n   {}\n   {}", i + 1, r.title, r.link, r.snippet))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Search results for \"{}\":\n\n{}", query, formatted)
}

#[async_trait]
impl Tool for SerperSearchTool {
    fn name(&self) -> &str {
        names::SEARCH_INTERNET
    }

    fn description(&self) -> &str {
        "Search the internet for recent articles, blog posts, and general information."
    }

    fn parameters(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<String> {
        let args: SearchArgs = serde_json::from_value(args)?;
        self.search(&args.query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_formats_organic_results() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/search")
            .match_header("x-api-key", "test-key")
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "organic": [
                        {"title": "Rust Blog", "link": "https://blog.rust-lang.org",
                         "snippet": "News from Rust."},
                        {"title": "Crates", "link": "https://crates.io", "snippet": "Registry."},
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let tool =
            SerperSearchTool::new(Some("test-key".to_string())).with_base_url(&server.url());
        let output = tool.search("rust").await.unwrap();

        assert!(output.contains("1. Rust Blog"));
        assert!(output.contains("https://crates.io"));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_error() {
        let tool = SerperSearchTool::new(None);
        let err = tool.search("rust").await.unwrap_err();
        assert!(matches!(err, SpanaError::MissingApiKey(_)));
    }

    #[tokio::test]
    async fn test_empty_results_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/search")
            .with_status(200)
            .with_body(r#"{"organic": []}"#)
            .create_async()
            .await;

        let tool = SerperSearchTool::new(Some("k".to_string())).with_base_url(&server.url());
        let output = tool.search("nothing").await.unwrap();
        assert_eq!(output, "No search results found for nothing");
    }
}
