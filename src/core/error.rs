//! Domain errors raised by the fund model and the tracker.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackerError {
    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("unexpected provider payload: {reason}")]
    UnexpectedPayload { reason: String },

    #[error("fund {symbol} cannot be compared with a value of type {type_name}")]
    InvalidComparison {
        symbol: String,
        type_name: &'static str,
    },

    #[error("price series for {symbol} is empty")]
    EmptySeries { symbol: String },

    #[error("no price available for {symbol} on {date} or the trading day before it")]
    MissingLatestPrice { symbol: String, date: NaiveDate },
}

impl TrackerError {
    /// Malformed input data. The tracker skips the symbol instead of failing.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            TrackerError::InvalidDate { .. } | TrackerError::UnexpectedPayload { .. }
        )
    }
}
