use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::core::config::{FetchConfig, YahooProviderConfig};
use crate::core::fund::DATE_FORMAT;
use crate::core::payload::{PriceRecord, SymbolRecord, payload_for};
use crate::core::price::{DateRange, PriceProvider};
use crate::providers::util::with_retry;

fn day_start_timestamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Converts bar timestamps to exchange-local dates, most recent first.
fn extract_prices(item: &ChartItem) -> Vec<PriceRecord> {
    let (Some(timestamps), Some(closes)) = (
        item.timestamp.as_ref(),
        item.indicators
            .as_ref()
            .and_then(|inds| inds.quote.first())
            .and_then(|q| q.close.as_ref()),
    ) else {
        return Vec::new();
    };

    let offset = item.meta.gmt_offset.unwrap_or(0);
    timestamps
        .iter()
        .zip(closes.iter())
        .rev()
        .filter_map(|(ts, close)| {
            DateTime::<Utc>::from_timestamp(ts + offset, 0).map(|dt| PriceRecord {
                formatted_date: dt.date_naive().format(DATE_FORMAT).to_string(),
                close: *close,
            })
        })
        .collect()
}

pub struct YahooFinanceProvider {
    base_url: String,
    history_range: String,
    client: reqwest::Client,
    retries: usize,
    retry_delay_ms: u64,
}

impl YahooFinanceProvider {
    pub fn new(config: &YahooProviderConfig, fetch: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("fundtrack/0.1")
            .timeout(fetch.timeout())
            .build()?;

        Ok(YahooFinanceProvider {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            history_range: config.history_range.clone(),
            client,
            retries: fetch.retries,
            retry_delay_ms: fetch.retry_delay_ms,
        })
    }

    fn chart_url(&self, symbol: &str, range: Option<DateRange>) -> String {
        let window = match range {
            Some(range) => {
                let period2 = match range.end {
                    Some(end) => day_start_timestamp(end + chrono::Duration::days(1)),
                    None => Utc::now().timestamp(),
                };
                format!(
                    "period1={}&period2={}",
                    day_start_timestamp(range.start),
                    period2
                )
            }
            None => format!("range={}", self.history_range),
        };
        format!(
            "{}/v8/finance/chart/{}?interval=1d&{}",
            self.base_url, symbol, window
        )
    }
}

#[derive(Deserialize, Debug)]
struct YahooChartResponse {
    chart: ChartResult,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    result: Option<Vec<ChartItem>>,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

#[derive(Deserialize, Debug)]
struct ChartItem {
    meta: ChartMeta,
    timestamp: Option<Vec<i64>>,
    indicators: Option<Indicators>,
}

#[derive(Deserialize, Debug)]
struct ChartMeta {
    symbol: Option<String>,
    currency: String,
    #[serde(alias = "instrumentType")]
    instrument_type: String,
    #[serde(alias = "gmtoffset")]
    gmt_offset: Option<i64>,
}

#[async_trait]
impl PriceProvider for YahooFinanceProvider {
    #[instrument(
        name = "YahooHistoryFetch",
        skip(self, symbol, range),
        fields(symbol = %symbol)
    )]
    async fn fetch_history(
        &self,
        symbol: &str,
        range: Option<DateRange>,
    ) -> Result<Option<Value>> {
        let url = self.chart_url(symbol, range);
        debug!("Requesting price history from {}", url);

        let response = with_retry(
            || async { self.client.get(&url).send().await },
            self.retries,
            self.retry_delay_ms,
        )
        .await
        .with_context(|| format!("Request error for symbol: {symbol} URL: {url}"))?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Symbol {} not found", symbol);
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for symbol: {}",
                response.status(),
                symbol
            ));
        }

        let text = response.text().await?;
        let data: YahooChartResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", symbol, e))?;

        let Some(item) = data.chart.result.and_then(|r| r.into_iter().next()) else {
            debug!("No chart result for {}", symbol);
            return Ok(None);
        };

        let prices = extract_prices(&item);
        if prices.is_empty() {
            debug!("No price bars for {}", symbol);
            return Ok(None);
        }

        let key = item
            .meta
            .symbol
            .clone()
            .unwrap_or_else(|| symbol.to_uppercase());
        let record = SymbolRecord {
            currency: item.meta.currency,
            instrument_type: item.meta.instrument_type,
            prices,
        };
        debug!(
            points = record.prices.len(),
            "Received price history for {}", key
        );

        Ok(Some(payload_for(&key, record)?))
    }
}
