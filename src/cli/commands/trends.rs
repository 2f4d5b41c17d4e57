//! Trends command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::trends::{TrendQuery, TrendResult, TrendsClient};
use anyhow::Result;

/// Run the trends command.
pub async fn run_trends(
    keyword: &str,
    timeframe: Option<String>,
    settings: Settings,
) -> Result<()> {
    let client = TrendsClient::from_settings(&settings.trends);

    let mut query = TrendQuery::new(keyword);
    if let Some(timeframe) = timeframe {
        query = query.with_timeframe(timeframe);
    }

    Output::info(&format!(
        "Looking up related queries for \"{}\" ({})",
        query.keyword, query.timeframe
    ));

    match client.related_queries(&query).await {
        Ok(TrendResult::Top(entries)) => {
            Output::success(&format!("Found {} related queries", entries.len()));
            Output::header("Top related queries");
            for (i, entry) in entries.iter().enumerate() {
                Output::trend_entry(i + 1, &entry.query, &entry.formatted_value);
            }
        }
        Ok(TrendResult::NoData { keyword }) => {
            Output::warning(&format!("No trending data found for {}", keyword));
        }
        Err(e) => {
            Output::error(&format!("Trend lookup failed: {}", e));
            return Err(anyhow::anyhow!("{}", e));
        }
    }

    Ok(())
}
