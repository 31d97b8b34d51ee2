//! Price history abstractions

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::fmt::Display;

/// Inclusive date range. An open end means "up to the latest available".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}..{}", self.start, end),
            None => write!(f, "{}..", self.start),
        }
    }
}

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetches the daily price history for `symbol` as a provider payload
    /// (see [`crate::core::payload`]). `Ok(None)` means the provider has no
    /// data for the symbol.
    async fn fetch_history(&self, symbol: &str, range: Option<DateRange>)
    -> Result<Option<Value>>;
}
