//! Google Trends tool.

use super::{names, Tool};
use crate::config::TrendsSettings;
use crate::error::Result;
use crate::trends::{TrendQuery, TrendResult, TrendsClient, DEFAULT_TIMEFRAME};
use async_trait::async_trait;
use serde::Deserialize;

/// Arguments for a trend lookup, as supplied by the hosting framework.
#[derive(Debug, Deserialize)]
struct GoogleTrendsArgs {
    /// The keyword or topic to get trends for.
    keyword: String,
    /// Timeframe for the trend data. Defaults to the last 3 months.
    #[serde(default = "default_timeframe")]
    timeframe: String,
}

fn default_timeframe() -> String {
    DEFAULT_TIMEFRAME.to_string()
}

/// Tool exposing trending topics and their popularity from Google Trends.
pub struct GoogleTrendsTool {
    settings: TrendsSettings,
}

impl GoogleTrendsTool {
    /// Create the tool. Locale settings apply to every lookup; a fresh
    /// provider client is constructed per invocation.
    pub fn new(settings: TrendsSettings) -> Self {
        Self { settings }
    }

    fn client(&self) -> TrendsClient {
        TrendsClient::from_settings(&self.settings)
    }

    /// Run a lookup and flatten the result for the orchestration channel:
    /// JSON entries on data, a descriptive sentinel string on no-data.
    pub async fn run(&self, keyword: &str, timeframe: &str) -> Result<String> {
        let query = TrendQuery::new(keyword).with_timeframe(timeframe);
        let result = self.client().related_queries(&query).await?;
        Ok(format_result(&result))
    }

    /// Blocking form of [`run`](Self::run), driving the provider client's
    /// blocking entry point. Observably equivalent to the async form.
    pub fn run_blocking(&self, keyword: &str, timeframe: &str) -> Result<String> {
        let query = TrendQuery::new(keyword).with_timeframe(timeframe);
        let result = self.client().related_queries_blocking(&query)?;
        Ok(format_result(&result))
    }
}

fn format_result(result: &TrendResult) -> String {
    match result {
        TrendResult::Top(entries) => {
            serde_json::to_string_pretty(entries).unwrap_or_else(|_| String::new())
        }
        TrendResult::NoData { keyword } => {
            format!("No trending data found for {}", keyword)
        }
    }
}

#[async_trait]
impl Tool for GoogleTrendsTool {
    fn name(&self) -> &str {
        names::GOOGLE_TRENDS
    }

    fn description(&self) -> &str {
        "Use this tool to get trending topics and their popularity from Google Trends."
    }

    fn parameters(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "keyword": {
                    "type": "string",
                    "description": "The keyword or topic to get trends for"
                },
                "timeframe": {
                    "type": "string",
                    "description": "Timeframe for the trend data. Default is 'today 3-m' (last 3 months)"
                }
            },
            "required": ["keyword"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<String> {
        let args: GoogleTrendsArgs = serde_json::from_value(args)?;
        self.run(&args.keyword, &args.timeframe).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trends::RelatedQuery;

    #[test]
    fn test_args_default_timeframe() {
        let args: GoogleTrendsArgs =
            serde_json::from_value(serde_json::json!({"keyword": "rust"})).unwrap();
        assert_eq!(args.keyword, "rust");
        assert_eq!(args.timeframe, "today 3-m");
    }

    #[test]
    fn test_args_explicit_timeframe() {
        let args: GoogleTrendsArgs = serde_json::from_value(
            serde_json::json!({"keyword": "rust", "timeframe": "now 7-d"}),
        )
        .unwrap();
        assert_eq!(args.timeframe, "now 7-d");
    }

    #[test]
    fn test_args_missing_keyword_is_error() {
        let parsed: std::result::Result<GoogleTrendsArgs, _> =
            serde_json::from_value(serde_json::json!({"timeframe": "now 7-d"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_format_no_data_sentinel() {
        let result = TrendResult::NoData {
            keyword: "zzzzznotopic".to_string(),
        };
        assert_eq!(
            format_result(&result),
            "No trending data found for zzzzznotopic"
        );
    }

    #[test]
    fn test_format_top_entries_as_json() {
        let result = TrendResult::Top(vec![RelatedQuery {
            query: "ev charging".to_string(),
            value: 100,
            formatted_value: "100".to_string(),
            link: "".to_string(),
        }]);
        let formatted = format_result(&result);
        let parsed: serde_json::Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(parsed[0]["query"], "ev charging");
        assert_eq!(parsed[0]["value"], 100);
    }

    #[test]
    fn test_schema_requires_keyword_only() {
        let tool = GoogleTrendsTool::new(TrendsSettings::default());
        let params = tool.parameters();
        assert_eq!(params["required"], serde_json::json!(["keyword"]));
        assert!(params["properties"]["timeframe"].is_object());
    }
}
