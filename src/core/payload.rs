//! The symbol-keyed price history record exchanged with providers.
//!
//! ```json
//! { "F": { "currency": "USD", "instrumentType": "STOCK",
//!          "prices": [ { "formatted_date": "2022-04-05", "close": 16.2 } ] } }
//! ```

use crate::core::error::TrackerError;
use crate::core::fund::Fund;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub formatted_date: String,
    pub close: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub currency: String,
    #[serde(rename = "instrumentType")]
    pub instrument_type: String,
    pub prices: Vec<PriceRecord>,
}

/// Flat fund attributes extracted from a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FundData {
    pub symbol: String,
    pub currency: String,
    pub instrument_type: String,
    pub dates_prices: Vec<(String, Option<f64>)>,
}

impl FundData {
    pub fn into_fund(self, display_name: Option<String>) -> Result<Fund, TrackerError> {
        Fund::new(
            &self.symbol,
            &self.currency,
            &self.instrument_type,
            self.dates_prices,
            display_name,
        )
    }
}

/// Wraps a record under its symbol key.
pub fn payload_for(symbol: &str, record: SymbolRecord) -> Result<Value, serde_json::Error> {
    let mut map = Map::new();
    map.insert(symbol.to_string(), serde_json::to_value(record)?);
    Ok(Value::Object(map))
}

/// Extracts the first symbol's attributes, or `None` when the payload does
/// not have the expected shape.
pub fn parse_provider_payload(payload: &Value) -> Option<FundData> {
    match try_parse(payload) {
        Ok(data) => Some(data),
        Err(e) => {
            debug!("Skipping provider payload: {}", e);
            None
        }
    }
}

fn try_parse(payload: &Value) -> Result<FundData, TrackerError> {
    let object = payload
        .as_object()
        .ok_or_else(|| TrackerError::UnexpectedPayload {
            reason: "payload is not an object".to_string(),
        })?;

    let (symbol, record) = object
        .iter()
        .next()
        .ok_or_else(|| TrackerError::UnexpectedPayload {
            reason: "payload has no symbol entry".to_string(),
        })?;

    let record = SymbolRecord::deserialize(record).map_err(|e| TrackerError::UnexpectedPayload {
        reason: format!("invalid record for {symbol}: {e}"),
    })?;

    Ok(FundData {
        symbol: symbol.clone(),
        currency: record.currency,
        instrument_type: record.instrument_type,
        dates_prices: record
            .prices
            .into_iter()
            .map(|p| (p.formatted_date, p.close))
            .collect(),
    })
}
