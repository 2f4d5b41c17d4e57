//! Related-queries payload types and parsing.

use crate::error::{Result, SpanaError};
use serde::{Deserialize, Serialize};

/// Default lookup window: the last 3 months, in the provider's notation.
pub const DEFAULT_TIMEFRAME: &str = "today 3-m";

/// Maximum number of related queries returned by a lookup.
const MAX_RESULTS: usize = 5;

/// A single trend lookup request. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendQuery {
    /// The keyword or topic to look up.
    pub keyword: String,
    /// Provider-defined timeframe string, passed through unchanged.
    pub timeframe: String,
}

impl TrendQuery {
    /// Create a query for a keyword over the default 3-month window.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            timeframe: DEFAULT_TIMEFRAME.to_string(),
        }
    }

    /// Override the timeframe. The string is opaque to this crate; the
    /// provider decides whether it is valid.
    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = timeframe.into();
        self
    }
}

/// One related-query entry as ranked by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedQuery {
    /// The related search term.
    pub query: String,
    /// Relative interest score (0-100 for the "top" ranking).
    pub value: i64,
    /// The provider's display form of the score.
    pub formatted_value: String,
    /// Provider link fragment for this query.
    pub link: String,
}

/// Outcome of a related-queries lookup.
///
/// "No data" is a successful outcome, not an error; provider and network
/// failures surface as [`SpanaError`](crate::SpanaError) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrendResult {
    /// The top related queries, at most five, in the provider's rank order.
    /// Never empty.
    Top(Vec<RelatedQuery>),
    /// The provider had no "top" related queries for this keyword.
    NoData { keyword: String },
}

impl TrendResult {
    /// Build a result from the provider's ranked "top" entries, truncating
    /// to five and preserving the provider's order. Empty input becomes
    /// `NoData` so callers never see an empty mapping.
    pub fn from_top_entries(keyword: &str, mut entries: Vec<RelatedQuery>) -> Self {
        if entries.is_empty() {
            return TrendResult::NoData {
                keyword: keyword.to_string(),
            };
        }
        entries.truncate(MAX_RESULTS);
        TrendResult::Top(entries)
    }

    /// Whether this outcome carries entries.
    pub fn has_data(&self) -> bool {
        matches!(self, TrendResult::Top(_))
    }
}

/// `explore` response: a list of widgets, one of which carries the token
/// for the related-queries data endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ExploreResponse {
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Widget {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub request: Option<serde_json::Value>,
}

/// `relatedsearches` response: ranked lists where index 0 is the "top"
/// ranking and index 1 is "rising".
#[derive(Debug, Deserialize)]
pub(crate) struct RelatedSearchesResponse {
    pub default: RankedLists,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankedLists {
    #[serde(rename = "rankedList", default)]
    pub ranked_list: Vec<RankedList>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankedList {
    #[serde(rename = "rankedKeyword", default)]
    pub ranked_keyword: Vec<RankedEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankedEntry {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub value: i64,
    #[serde(rename = "formattedValue", default)]
    pub formatted_value: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl RankedEntry {
    /// Convert to the public entry type. Entries without a query text
    /// (topic-style payloads) are skipped by the caller.
    pub fn into_related_query(self) -> Option<RelatedQuery> {
        let query = self.query?;
        Some(RelatedQuery {
            query,
            value: self.value,
            formatted_value: self.formatted_value,
            link: self.link.unwrap_or_default(),
        })
    }
}

/// Strip the provider's anti-XSSI prefix (`)]}'` plus optional commas and
/// whitespace) and parse the remaining JSON body.
pub(crate) fn parse_prefixed_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T> {
    let start = body
        .find('{')
        .ok_or_else(|| SpanaError::Trends("response body contains no JSON object".to_string()))?;
    Ok(serde_json::from_str(&body[start..])?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(query: &str, value: i64) -> RelatedQuery {
        RelatedQuery {
            query: query.to_string(),
            value,
            formatted_value: value.to_string(),
            link: format!("/trends/explore?q={}", query),
        }
    }

    #[test]
    fn test_default_timeframe() {
        let query = TrendQuery::new("electric vehicles");
        assert_eq!(query.timeframe, "today 3-m");
        assert_eq!(query.keyword, "electric vehicles");
    }

    #[test]
    fn test_timeframe_override_passes_through() {
        let query = TrendQuery::new("rust").with_timeframe("now 7-d");
        assert_eq!(query.timeframe, "now 7-d");
    }

    #[test]
    fn test_from_top_entries_truncates_to_five() {
        let entries: Vec<_> = (0..8).map(|i| entry(&format!("q{}", i), 100 - i)).collect();
        let result = TrendResult::from_top_entries("electric vehicles", entries);
        match result {
            TrendResult::Top(top) => {
                assert_eq!(top.len(), 5);
                // Provider order preserved, not re-sorted
                let queries: Vec<_> = top.iter().map(|e| e.query.as_str()).collect();
                assert_eq!(queries, vec!["q0", "q1", "q2", "q3", "q4"]);
            }
            TrendResult::NoData { .. } => panic!("expected Top"),
        }
    }

    #[test]
    fn test_from_top_entries_empty_is_no_data() {
        let result = TrendResult::from_top_entries("zzzzznotopic", Vec::new());
        assert_eq!(
            result,
            TrendResult::NoData {
                keyword: "zzzzznotopic".to_string()
            }
        );
        assert!(!result.has_data());
    }

    #[test]
    fn test_from_top_entries_fewer_than_five() {
        let entries = vec![entry("a", 100), entry("b", 50)];
        let result = TrendResult::from_top_entries("kw", entries);
        match result {
            TrendResult::Top(top) => assert_eq!(top.len(), 2),
            TrendResult::NoData { .. } => panic!("expected Top"),
        }
    }

    #[test]
    fn test_parse_prefixed_json_strips_xssi_prefix() {
        let body = ")]}',\n{\"widgets\": []}";
        let parsed: ExploreResponse = parse_prefixed_json(body).unwrap();
        assert!(parsed.widgets.is_empty());
    }

    #[test]
    fn test_parse_prefixed_json_rejects_non_json() {
        let err = parse_prefixed_json::<ExploreResponse>(")]}'").unwrap_err();
        assert!(err.to_string().contains("no JSON object"));
    }

    #[test]
    fn test_ranked_entry_without_query_is_skipped() {
        let entry = RankedEntry {
            query: None,
            value: 10,
            formatted_value: "10".to_string(),
            link: None,
        };
        assert!(entry.into_related_query().is_none());
    }
}
