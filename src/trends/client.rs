//! Google Trends HTTP client.

use super::related::{
    parse_prefixed_json, ExploreResponse, RelatedSearchesResponse, TrendQuery, TrendResult,
};
use crate::config::TrendsSettings;
use crate::error::{Result, SpanaError};
use std::time::Duration;
use tracing::{debug, instrument};

/// Production endpoint for the trends provider.
pub const DEFAULT_BASE_URL: &str = "https://trends.google.com";

/// Widget id carrying the related-queries token in the explore response.
const RELATED_QUERIES_WIDGET: &str = "RELATED_QUERIES";

/// Request timeout for provider calls.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the trends provider's related-queries lookup.
///
/// Locale and UTC offset are fixed at construction and apply to every
/// lookup; individual calls only vary the keyword and timeframe. The client
/// holds no state between calls.
pub struct TrendsClient {
    http: reqwest::Client,
    base_url: String,
    locale: String,
    utc_offset_minutes: i32,
}

impl TrendsClient {
    /// Create a client with the default locale (`en-US`, UTC offset 360).
    pub fn new() -> Self {
        Self::with_locale("en-US", 360)
    }

    /// Create a client with an explicit locale and UTC offset in minutes.
    pub fn with_locale(locale: &str, utc_offset_minutes: i32) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: locale.to_string(),
            utc_offset_minutes,
        }
    }

    /// Create a client from configuration.
    pub fn from_settings(settings: &TrendsSettings) -> Self {
        Self::with_locale(&settings.locale, settings.utc_offset_minutes)
    }

    /// Override the provider base URL. Used for tests against a local stub.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Look up the top related queries for a keyword.
    ///
    /// Issues one `explore` call to resolve the related-queries widget token
    /// and one `relatedsearches` call to fetch the ranked entries. Returns at
    /// most five entries in the provider's own rank order, or
    /// [`TrendResult::NoData`] when the provider has nothing for the keyword.
    /// No retry or caching; provider failures become [`SpanaError::Trends`].
    #[instrument(skip(self), fields(keyword = %query.keyword, timeframe = %query.timeframe))]
    pub async fn related_queries(&self, query: &TrendQuery) -> Result<TrendResult> {
        let explore = self.explore(query).await?;

        let widget = explore.widgets.into_iter().find(|w| {
            w.id.as_deref() == Some(RELATED_QUERIES_WIDGET)
                && w.token.is_some()
                && w.request.is_some()
        });

        let Some(widget) = widget else {
            debug!("no related-queries widget for keyword");
            return Ok(TrendResult::NoData {
                keyword: query.keyword.clone(),
            });
        };

        // find() above guarantees both fields are present
        let token = widget.token.unwrap_or_default();
        let widget_request = widget.request.unwrap_or_default();

        let related = self.related_searches(&widget_request, &token).await?;

        // rankedList[0] is the "top" ranking; [1] would be "rising"
        let top_entries = related
            .default
            .ranked_list
            .into_iter()
            .next()
            .map(|list| {
                list.ranked_keyword
                    .into_iter()
                    .filter_map(|e| e.into_related_query())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Ok(TrendResult::from_top_entries(&query.keyword, top_entries))
    }

    /// Blocking form of [`related_queries`](Self::related_queries).
    ///
    /// Drives the async path on a private current-thread runtime and is
    /// observably equivalent to it: no concurrency is added and the caller
    /// blocks for the full round trip. Must not be called from within an
    /// async runtime.
    pub fn related_queries_blocking(&self, query: &TrendQuery) -> Result<TrendResult> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SpanaError::Trends(format!("failed to start runtime: {}", e)))?;
        runtime.block_on(self.related_queries(query))
    }

    /// Resolve the widget list for a keyword and timeframe.
    async fn explore(&self, query: &TrendQuery) -> Result<ExploreResponse> {
        let url = format!("{}/trends/api/explore", self.base_url);
        let req = build_explore_req(query);

        debug!("explore request for keyword");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("hl", self.locale.as_str()),
                ("tz", &self.utc_offset_minutes.to_string()),
                ("req", &req),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpanaError::Trends(format!(
                "explore request failed with status {}",
                response.status()
            )));
        }

        parse_prefixed_json(&response.text().await?)
    }

    /// Fetch ranked related searches behind a widget token.
    async fn related_searches(
        &self,
        widget_request: &serde_json::Value,
        token: &str,
    ) -> Result<RelatedSearchesResponse> {
        let url = format!("{}/trends/api/widgetdata/relatedsearches", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("hl", self.locale.as_str()),
                ("tz", &self.utc_offset_minutes.to_string()),
                ("req", &widget_request.to_string()),
                ("token", token),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpanaError::Trends(format!(
                "related searches request failed with status {}",
                response.status()
            )));
        }

        parse_prefixed_json(&response.text().await?)
    }
}

impl Default for TrendsClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the `req` payload for the explore endpoint: a single comparison
/// item scoped to one keyword and timeframe.
fn build_explore_req(query: &TrendQuery) -> String {
    serde_json::json!({
        "comparisonItem": [{
            "keyword": query.keyword,
            "time": query.timeframe,
            "geo": "",
        }],
        "category": 0,
        "property": "",
    })
    .to_string()
}
