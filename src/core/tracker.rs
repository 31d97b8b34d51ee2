//! Owns the working set of funds and composes performance summaries.

use crate::core::config::FetchConfig;
use crate::core::error::TrackerError;
use crate::core::fund::{Fund, FundRef};
use crate::core::payload::parse_provider_payload;
use crate::core::performance::{LookbackWindow, percentage_change, window_performance};
use crate::core::price::{DateRange, PriceProvider};
use crate::core::watchlist::{Repository, TrackedSymbol};
use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    pub concurrency: usize,
    pub timeout: Duration,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions::from(&FetchConfig::default())
    }
}

impl From<&FetchConfig> for BuildOptions {
    fn from(config: &FetchConfig) -> Self {
        BuildOptions {
            concurrency: config.concurrency.max(1),
            timeout: config.retry_budget(),
        }
    }
}

/// Which lookback lines to append to a fund summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    pub day: bool,
    pub week: bool,
    pub year: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            day: true,
            week: true,
            year: true,
        }
    }
}

impl SummaryOptions {
    fn windows(&self) -> impl Iterator<Item = LookbackWindow> + '_ {
        LookbackWindow::ALL.into_iter().filter(|window| match window {
            LookbackWindow::Day => self.day,
            LookbackWindow::Week => self.week,
            LookbackWindow::Year => self.year,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RangePerformance {
    /// `None` when a price is missing at either end of the range.
    pub change: Option<f64>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub fund: Fund,
}

/// Fund summary followed by the requested lookback lines.
pub fn summarize(fund: &Fund, options: SummaryOptions) -> Result<String, TrackerError> {
    let mut performance = fund.summary()?;
    for window in options.windows() {
        performance.push('\n');
        performance.push_str(&window_performance(fund, window).render());
    }
    Ok(performance)
}

/// Fetches and constructs a fund per entry, in entry order. Entries without
/// usable data are skipped.
pub async fn build_funds(
    provider: &dyn PriceProvider,
    entries: &[TrackedSymbol],
    options: BuildOptions,
    on_progress: &(dyn Fn()),
) -> Vec<Fund> {
    let built: Vec<Option<Fund>> = stream::iter(entries)
        .map(|entry| async move {
            let fund = build_fund(provider, entry, options.timeout).await;
            on_progress();
            fund
        })
        .buffered(options.concurrency.max(1))
        .collect()
        .await;

    built.into_iter().flatten().collect()
}

async fn build_fund(
    provider: &dyn PriceProvider,
    entry: &TrackedSymbol,
    timeout: Duration,
) -> Option<Fund> {
    let symbol = entry.symbol.as_str();
    let payload =
        match tokio::time::timeout(timeout, provider.fetch_history(symbol, None)).await {
            Ok(Ok(Some(payload))) => payload,
            Ok(Ok(None)) => {
                warn!(symbol = %symbol, "No price data found, skipping");
                return None;
            }
            Ok(Err(e)) => {
                warn!(symbol = %symbol, error = %e, "Price fetch failed, skipping");
                return None;
            }
            Err(_) => {
                warn!(symbol = %symbol, ?timeout, "Price fetch timed out, skipping");
                return None;
            }
        };

    let Some(data) = parse_provider_payload(&payload) else {
        warn!(symbol = %symbol, "Unexpected price data, skipping");
        return None;
    };

    match data.into_fund(entry.name.clone()) {
        Ok(fund) => Some(fund),
        Err(e) if e.is_parse_error() => {
            warn!(symbol = %symbol, error = %e, "Malformed price data, skipping");
            None
        }
        Err(e) => {
            warn!(symbol = %symbol, error = %e, "Invalid price series, skipping");
            None
        }
    }
}

fn range_from_series(
    fund: &Fund,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Option<RangePerformance> {
    if !fund.contains_date(start) {
        return None;
    }
    let latest = fund.latest();
    let end_point = match end {
        Some(end) if end < latest.date => fund.point_on(end)?,
        _ => latest,
    };
    let start_price = fund.point_on(start)?.price?;
    let end_price = end_point.price?;

    Some(RangePerformance {
        change: Some(percentage_change(start_price, end_price)),
        start,
        end: end_point.date,
        fund: fund.clone(),
    })
}

#[derive(Debug, Default)]
pub struct Tracker {
    entries: Vec<TrackedSymbol>,
    funds: Vec<Fund>,
}

impl Tracker {
    /// Symbols are uppercased and a repeated symbol is tracked once, taking
    /// the last name given for it.
    pub fn new(entries: Vec<TrackedSymbol>) -> Self {
        let mut tracker = Tracker::default();
        for entry in entries {
            tracker.track(entry);
        }
        tracker
    }

    pub fn from_repository(repo: &dyn Repository) -> Self {
        Self::new(repo.entries())
    }

    pub fn entries(&self) -> &[TrackedSymbol] {
        &self.entries
    }

    pub fn funds(&self) -> &[Fund] {
        &self.funds
    }

    /// Adds a symbol, or updates the name of an already tracked one.
    /// Returns `true` when the symbol was not tracked before.
    pub fn track(&mut self, entry: TrackedSymbol) -> bool {
        let entry = TrackedSymbol {
            symbol: entry.symbol.to_uppercase(),
            name: entry.name,
        };
        match self.entries.iter_mut().find(|e| e.symbol == entry.symbol) {
            Some(existing) => {
                existing.name = entry.name;
                false
            }
            None => {
                self.entries.push(entry);
                true
            }
        }
    }

    pub fn untrack(&mut self, symbol: &str) -> bool {
        let symbol = symbol.to_uppercase();
        let before = self.entries.len();
        self.entries.retain(|e| e.symbol.to_uppercase() != symbol);
        self.funds.retain(|f| f.symbol() != symbol);
        self.entries.len() != before
    }

    pub fn find(&self, fund: FundRef<'_>) -> Option<&Fund> {
        self.funds.iter().find(|f| f.matches(fund))
    }

    /// Builds a fund for every tracked entry and appends them to the
    /// working set.
    pub async fn build_all(
        &mut self,
        provider: &dyn PriceProvider,
        options: BuildOptions,
        on_progress: &(dyn Fn()),
    ) -> &[Fund] {
        let built = build_funds(provider, &self.entries, options, on_progress).await;
        info!(
            tracked = self.entries.len(),
            built = built.len(),
            "Built fund working set"
        );
        self.funds.extend(built);
        &self.funds
    }

    pub fn summaries(&self, options: SummaryOptions) -> Vec<Result<String, TrackerError>> {
        self.funds
            .iter()
            .map(|fund| summarize(fund, options))
            .collect()
    }

    /// Percentage change between `start` and `end` (or the latest price).
    ///
    /// Prices come from the held series when both dates match a point
    /// exactly; any miss fetches exactly that range from the provider.
    pub async fn custom_range_performance(
        &self,
        provider: &dyn PriceProvider,
        fund: FundRef<'_>,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<RangePerformance> {
        if let Some(end) = end
            && end < start
        {
            bail!("End date {end} is before start date {start}");
        }

        let held = self.find(fund);
        if let Some(held) = held {
            if let Some(result) = range_from_series(held, start, end) {
                debug!(symbol = %held, "Resolved range from held series");
                return Ok(result);
            }
            debug!(symbol = %held, "Range not covered by held series, fetching");
        }

        let symbol = fund.symbol();
        let range = DateRange { start, end };
        let payload = provider
            .fetch_history(symbol, Some(range))
            .await
            .with_context(|| format!("Failed to fetch prices for {symbol} in {range}"))?
            .ok_or_else(|| anyhow!("No price data found for {symbol} in {range}"))?;
        let data = parse_provider_payload(&payload)
            .ok_or_else(|| anyhow!("Unexpected price data for {symbol} in {range}"))?;

        let display_name = held
            .and_then(Fund::display_name)
            .or(match fund {
                FundRef::Fund(f) => f.display_name(),
                FundRef::Symbol(_) => None,
            })
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
                    .and_then(|e| e.name.as_deref())
            })
            .map(str::to_string);
        let fetched = data.into_fund(display_name)?;

        let first = fetched.points().iter().rev().find(|p| p.price.is_some());
        let last = fetched.points().iter().find(|p| p.price.is_some());
        let (change, start, end) = match (first, last) {
            (Some(first), Some(last)) => (
                first
                    .price
                    .zip(last.price)
                    .map(|(a, b)| percentage_change(a, b)),
                first.date,
                last.date,
            ),
            _ => (None, start, end.unwrap_or(fetched.latest().date)),
        };

        Ok(RangePerformance {
            change,
            start,
            end,
            fund: fetched,
        })
    }

    /// Saves `(symbol, name)` pairs for `funds`, or for the working set when
    /// no list is given.
    pub fn save(
        &self,
        repo: &dyn Repository,
        funds: Option<&[Fund]>,
        destination: Option<&Path>,
    ) -> Result<()> {
        let entries: Vec<TrackedSymbol> = funds
            .unwrap_or(&self.funds)
            .iter()
            .map(|f| TrackedSymbol::new(f.symbol(), f.display_name()))
            .collect();
        debug!(count = entries.len(), "Saving funds");
        repo.save(&entries, destination)
    }

    pub fn save_entries(&self, repo: &dyn Repository, destination: Option<&Path>) -> Result<()> {
        repo.save(&self.entries, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Duration as ChronoDuration;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn payload(symbol: &str, prices: &[(&str, Option<f64>)]) -> Value {
        let prices: Vec<Value> = prices
            .iter()
            .map(|(date, close)| json!({ "formatted_date": date, "close": close }))
            .collect();
        json!({ symbol: { "currency": "usd", "instrumentType": "mutualfund", "prices": prices } })
    }

    /// Daily closes going back `days` from 2022-04-05, rising one unit a day.
    fn daily_payload(symbol: &str, days: i64) -> Value {
        let latest = d("2022-04-05");
        let prices: Vec<(String, Option<f64>)> = (0..=days)
            .map(|i| {
                let date = latest - ChronoDuration::days(i);
                (date.to_string(), Some(100.0 - i as f64 * 0.1))
            })
            .collect();
        let prices: Vec<(&str, Option<f64>)> =
            prices.iter().map(|(d, p)| (d.as_str(), *p)).collect();
        payload(symbol, &prices)
    }

    #[derive(Default)]
    struct MockProvider {
        payloads: HashMap<String, Value>,
        ranged: HashMap<String, Value>,
        calls: AtomicUsize,
        ranges: Mutex<Vec<Option<DateRange>>>,
    }

    impl MockProvider {
        fn with(mut self, symbol: &str, payload: Value) -> Self {
            self.payloads.insert(symbol.to_string(), payload);
            self
        }

        fn with_range(mut self, symbol: &str, payload: Value) -> Self {
            self.ranged.insert(symbol.to_string(), payload);
            self
        }
    }

    #[async_trait]
    impl PriceProvider for MockProvider {
        async fn fetch_history(
            &self,
            symbol: &str,
            range: Option<DateRange>,
        ) -> Result<Option<Value>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.ranges.lock().unwrap().push(range);
            match symbol {
                "BROKEN" => Err(anyhow!("connection reset")),
                "SLOW" => {
                    tokio::time::sleep(Duration::from_millis(200)).await;
                    Ok(Some(daily_payload("SLOW", 3)))
                }
                _ if range.is_some() => Ok(self.ranged.get(symbol).cloned()),
                _ => Ok(self.payloads.get(symbol).cloned()),
            }
        }
    }

    #[derive(Default)]
    struct MemoryRepository {
        entries: Vec<TrackedSymbol>,
        saved: Mutex<Vec<(Vec<TrackedSymbol>, Option<PathBuf>)>>,
    }

    impl Repository for MemoryRepository {
        fn entries(&self) -> Vec<TrackedSymbol> {
            self.entries.clone()
        }

        fn save(&self, entries: &[TrackedSymbol], destination: Option<&Path>) -> Result<()> {
            self.saved
                .lock()
                .unwrap()
                .push((entries.to_vec(), destination.map(Path::to_path_buf)));
            Ok(())
        }
    }

    fn fund(prices: &[(&str, Option<f64>)]) -> Fund {
        parse_provider_payload(&payload("FXAIX", prices))
            .unwrap()
            .into_fund(None)
            .unwrap()
    }

    #[tokio::test]
    async fn test_build_all_skips_unusable_symbols() {
        let provider = MockProvider::default()
            .with("FXAIX", daily_payload("FXAIX", 10))
            .with("BAD", json!({ "BAD": { "currency": "USD" } }))
            .with("BADDATE", payload("BADDATE", &[("05/04/2022", Some(1.0))]))
            .with("F", daily_payload("F", 3));
        let mut tracker = Tracker::new(vec![
            TrackedSymbol::new("FXAIX", Some("Fidelity 500")),
            TrackedSymbol::new("MISSING", None),
            TrackedSymbol::new("BROKEN", None),
            TrackedSymbol::new("BAD", None),
            TrackedSymbol::new("BADDATE", None),
            TrackedSymbol::new("SLOW", None),
            TrackedSymbol::new("F", None),
        ]);
        let options = BuildOptions {
            concurrency: 3,
            timeout: Duration::from_millis(50),
        };
        let progress = AtomicUsize::new(0);

        let funds = tracker
            .build_all(&provider, options, &|| {
                progress.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        let symbols: Vec<&str> = funds.iter().map(|f| f.symbol()).collect();
        assert_eq!(symbols, vec!["FXAIX", "F"]);
        assert_eq!(funds[0].display_name(), Some("Fidelity 500"));
        assert_eq!(funds[1].display_name(), None);
        assert_eq!(progress.load(Ordering::SeqCst), 7);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 7);
        assert!(provider.ranges.lock().unwrap().iter().all(Option::is_none));
    }

    #[tokio::test]
    async fn test_build_all_appends_to_working_set() {
        let provider = MockProvider::default().with("F", daily_payload("F", 3));
        let mut tracker = Tracker::new(vec![TrackedSymbol::new("F", None)]);

        tracker
            .build_all(&provider, BuildOptions::default(), &|| {})
            .await;
        assert_eq!(tracker.funds().len(), 1);
        assert!(tracker.find(FundRef::Symbol("F")).is_some());
        assert!(tracker.find(FundRef::Symbol("f")).is_none());
    }

    #[test]
    fn test_summarize_all_windows() {
        let fund = fund(&[
            ("2022-04-05", Some(100.0)),
            ("2022-04-04", Some(80.0)),
            ("2022-03-29", Some(80.0)),
        ]);

        let summary = summarize(&fund, SummaryOptions::default()).unwrap();
        assert_eq!(
            summary,
            "FXAIX - \n\
             USD - MUTUALFUND\n\
             Latest price: 2022-04-05 - $100.00\n\
             Previous 24 hours: 20.00%\n\
             Previous week: 20.00%\n\
             Previous year: unavailable"
        );
    }

    #[test]
    fn test_summarize_selected_windows() {
        let fund = fund(&[("2022-04-05", Some(80.0)), ("2022-04-04", Some(100.0))]);

        let day_only = SummaryOptions {
            day: true,
            week: false,
            year: false,
        };
        let summary = summarize(&fund, day_only).unwrap();
        assert!(summary.ends_with("Latest price: 2022-04-05 - $80.00\nPrevious 24 hours: -20.00%"));

        let none = SummaryOptions {
            day: false,
            week: false,
            year: false,
        };
        assert_eq!(summarize(&fund, none).unwrap(), fund.summary().unwrap());
    }

    #[test]
    fn test_summarize_propagates_missing_price() {
        let fund = fund(&[("2022-04-05", None), ("2022-04-04", None)]);
        assert!(matches!(
            summarize(&fund, SummaryOptions::default()),
            Err(TrackerError::MissingLatestPrice { .. })
        ));
    }

    #[tokio::test]
    async fn test_custom_range_from_held_series() {
        let provider = MockProvider::default().with("FXAIX", daily_payload("FXAIX", 30));
        let mut tracker = Tracker::new(vec![TrackedSymbol::new("FXAIX", None)]);
        tracker
            .build_all(&provider, BuildOptions::default(), &|| {})
            .await;
        let calls = provider.calls.load(Ordering::SeqCst);

        // End past the latest date resolves to the latest price
        let result = tracker
            .custom_range_performance(
                &provider,
                FundRef::Symbol("FXAIX"),
                d("2022-03-26"),
                Some(d("2022-05-01")),
            )
            .await
            .unwrap();
        assert_eq!(result.start, d("2022-03-26"));
        assert_eq!(result.end, d("2022-04-05"));
        assert_eq!(result.change, Some(percentage_change(99.0, 100.0)));
        assert_eq!(result.fund, "FXAIX");

        let held = &tracker.funds()[0];
        let result = tracker
            .custom_range_performance(
                &provider,
                FundRef::Fund(held),
                d("2022-03-26"),
                Some(d("2022-03-31")),
            )
            .await
            .unwrap();
        assert_eq!(result.end, d("2022-03-31"));
        assert_eq!(result.change, Some(percentage_change(99.0, 99.5)));

        assert_eq!(provider.calls.load(Ordering::SeqCst), calls);
    }

    #[tokio::test]
    async fn test_custom_range_fetches_on_miss() {
        let ranged = payload(
            "FXAIX",
            &[
                ("2021-01-04", Some(50.0)),
                ("2021-01-05", Some(60.0)),
                ("2022-04-05", Some(100.0)),
                ("2022-04-06", None),
            ],
        );
        let provider = MockProvider::default()
            .with("FXAIX", daily_payload("FXAIX", 3))
            .with_range("FXAIX", ranged);
        let mut tracker = Tracker::new(vec![TrackedSymbol::new("FXAIX", None)]);
        tracker
            .build_all(&provider, BuildOptions::default(), &|| {})
            .await;

        let result = tracker
            .custom_range_performance(&provider, FundRef::Symbol("FXAIX"), d("2021-01-02"), None)
            .await
            .unwrap();

        assert_eq!(result.change, Some(percentage_change(50.0, 100.0)));
        assert_eq!(result.start, d("2021-01-04"));
        assert_eq!(result.end, d("2022-04-05"));
        let ranges = provider.ranges.lock().unwrap();
        assert_eq!(
            ranges.last().copied().flatten(),
            Some(DateRange {
                start: d("2021-01-02"),
                end: None
            })
        );
    }

    #[tokio::test]
    async fn test_custom_range_keeps_watchlist_name() {
        let ranged = payload("F", &[("2021-01-04", Some(50.0)), ("2021-01-05", Some(60.0))]);
        let provider = MockProvider::default()
            .with("F", daily_payload("F", 3))
            .with_range("F", ranged);
        let mut tracker = Tracker::new(vec![TrackedSymbol::new("F", Some("Ford"))]);
        tracker
            .build_all(&provider, BuildOptions::default(), &|| {})
            .await;

        let held = tracker
            .custom_range_performance(&provider, FundRef::Symbol("F"), d("2022-04-03"), None)
            .await
            .unwrap();
        let fetched = tracker
            .custom_range_performance(
                &provider,
                FundRef::Symbol("F"),
                d("2021-01-04"),
                Some(d("2021-01-05")),
            )
            .await
            .unwrap();

        assert_eq!(held.fund.display_name(), Some("Ford"));
        assert_eq!(fetched.fund.display_name(), Some("Ford"));
        assert_eq!(fetched.change, Some(percentage_change(50.0, 60.0)));
    }

    #[tokio::test]
    async fn test_custom_range_uses_entry_name_when_not_built() {
        let ranged = payload("F", &[("2021-01-04", Some(50.0)), ("2021-01-05", Some(60.0))]);
        let provider = MockProvider::default().with_range("F", ranged);
        let tracker = Tracker::new(vec![TrackedSymbol::new("f", Some("Ford"))]);

        let result = tracker
            .custom_range_performance(&provider, FundRef::Symbol("F"), d("2021-01-04"), None)
            .await
            .unwrap();
        assert_eq!(result.fund.display_name(), Some("Ford"));
    }

    #[tokio::test]
    async fn test_custom_range_for_untracked_symbol() {
        let provider = MockProvider::default();
        let tracker = Tracker::default();

        let err = tracker
            .custom_range_performance(&provider, FundRef::Symbol("NOPE"), d("2021-01-02"), None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No price data found for NOPE"));
    }

    #[tokio::test]
    async fn test_custom_range_rejects_inverted_dates() {
        let provider = MockProvider::default();
        let tracker = Tracker::default();

        let result = tracker
            .custom_range_performance(
                &provider,
                FundRef::Symbol("F"),
                d("2022-04-05"),
                Some(d("2022-04-01")),
            )
            .await;
        assert!(result.is_err());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_track_and_untrack() {
        let mut tracker = Tracker::from_repository(&MemoryRepository {
            entries: vec![TrackedSymbol::new("F", None)],
            ..Default::default()
        });

        assert!(tracker.track(TrackedSymbol::new("fxaix", None)));
        assert!(!tracker.track(TrackedSymbol::new("FXAIX", Some("S&P 500"))));
        assert_eq!(
            tracker.entries(),
            &[
                TrackedSymbol::new("F", None),
                TrackedSymbol::new("FXAIX", Some("S&P 500"))
            ]
        );

        assert!(tracker.untrack("f"));
        assert!(!tracker.untrack("F"));
        assert_eq!(tracker.entries().len(), 1);
    }

    #[test]
    fn test_loaded_symbols_are_normalized() {
        let mut tracker = Tracker::new(vec![
            TrackedSymbol::new("fxaix", None),
            TrackedSymbol::new("F", Some("Ford")),
            TrackedSymbol::new("f", Some("Ford Motor")),
        ]);
        assert_eq!(
            tracker.entries(),
            &[
                TrackedSymbol::new("FXAIX", None),
                TrackedSymbol::new("F", Some("Ford Motor"))
            ]
        );

        assert!(!tracker.track(TrackedSymbol::new("FXAIX", Some("S&P 500"))));
        assert_eq!(tracker.entries().len(), 2);
        assert_eq!(tracker.entries()[0], TrackedSymbol::new("FXAIX", Some("S&P 500")));
    }

    #[tokio::test]
    async fn test_save_defaults_to_working_set() {
        let provider = MockProvider::default()
            .with("FXAIX", daily_payload("FXAIX", 3))
            .with("F", daily_payload("F", 3));
        let repo = MemoryRepository {
            entries: vec![
                TrackedSymbol::new("FXAIX", Some("Fidelity 500")),
                TrackedSymbol::new("F", None),
                TrackedSymbol::new("MISSING", None),
            ],
            ..Default::default()
        };
        let mut tracker = Tracker::from_repository(&repo);
        tracker
            .build_all(&provider, BuildOptions::default(), &|| {})
            .await;

        tracker.save(&repo, None, None).unwrap();
        let explicit = vec![tracker.funds()[1].clone()];
        tracker
            .save(&repo, Some(explicit.as_slice()), Some(Path::new("/tmp/other.yaml")))
            .unwrap();

        let saved = repo.saved.lock().unwrap();
        assert_eq!(
            saved[0].0,
            vec![
                TrackedSymbol::new("FXAIX", Some("Fidelity 500")),
                TrackedSymbol::new("F", None)
            ]
        );
        assert_eq!(saved[0].1, None);
        assert_eq!(saved[1].0, vec![TrackedSymbol::new("F", None)]);
        assert_eq!(saved[1].1, Some(PathBuf::from("/tmp/other.yaml")));
    }
}
