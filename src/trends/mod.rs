//! Google Trends client and related-queries lookup.
//!
//! Speaks the provider's two-step widget protocol: an `explore` request
//! resolves a token for the related-queries widget, and a `relatedsearches`
//! request fetches the ranked entries behind that token. The lookup returns
//! the top five related queries for a keyword, or a typed no-data outcome.

mod client;
mod related;

pub use client::{TrendsClient, DEFAULT_BASE_URL};
pub use related::{RelatedQuery, TrendQuery, TrendResult, DEFAULT_TIMEFRAME};
