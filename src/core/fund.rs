//! Price series for a single tracked instrument.

use crate::core::error::TrackerError;
use chrono::NaiveDate;
use std::any::Any;
use std::fmt::Display;
use tracing::debug;

/// Date format used by providers and on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| TrackerError::InvalidDate {
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: Option<f64>,
}

/// Reference to a fund either by raw symbol or by an existing series.
#[derive(Debug, Clone, Copy)]
pub enum FundRef<'a> {
    Symbol(&'a str),
    Fund(&'a Fund),
}

impl FundRef<'_> {
    pub fn symbol(&self) -> &str {
        match self {
            FundRef::Symbol(symbol) => symbol,
            FundRef::Fund(fund) => fund.symbol(),
        }
    }
}

/// A financial instrument such as a mutual fund or a stock, with its daily
/// closing prices.
///
/// Points are kept most recent first, one per date. The series is never
/// empty.
#[derive(Debug, Clone)]
pub struct Fund {
    symbol: String,
    currency: String,
    instrument_type: String,
    display_name: Option<String>,
    points: Vec<PricePoint>,
}

impl Fund {
    /// Builds a fund from `(YYYY-MM-DD, price)` pairs in any order.
    pub fn new<I, S>(
        symbol: &str,
        currency: &str,
        instrument_type: &str,
        dates_prices: I,
        display_name: Option<String>,
    ) -> Result<Self, TrackerError>
    where
        I: IntoIterator<Item = (S, Option<f64>)>,
        S: AsRef<str>,
    {
        let points = dates_prices
            .into_iter()
            .map(|(date, price)| {
                parse_date(date.as_ref()).map(|date| PricePoint { date, price })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_points(symbol, currency, instrument_type, points, display_name)
    }

    pub fn from_points(
        symbol: &str,
        currency: &str,
        instrument_type: &str,
        mut points: Vec<PricePoint>,
        display_name: Option<String>,
    ) -> Result<Self, TrackerError> {
        let symbol = symbol.to_uppercase();
        if points.is_empty() {
            return Err(TrackerError::EmptySeries { symbol });
        }

        // Stable sort keeps the provider's first record for a duplicated date.
        points.sort_by(|a, b| b.date.cmp(&a.date));
        points.dedup_by_key(|p| p.date);

        debug!(
            symbol = %symbol,
            points = points.len(),
            latest = %points[0].date,
            "Constructed fund"
        );

        Ok(Fund {
            symbol,
            currency: currency.to_uppercase(),
            instrument_type: instrument_type.to_uppercase(),
            display_name,
            points,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn instrument_type(&self) -> &str {
        &self.instrument_type
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, name: Option<String>) {
        self.display_name = name;
    }

    /// All points, most recent first.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn latest(&self) -> &PricePoint {
        &self.points[0]
    }

    pub fn oldest(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }

    /// Exact date lookup, no interpolation.
    pub fn point_on(&self, date: NaiveDate) -> Option<&PricePoint> {
        self.points
            .binary_search_by(|p| date.cmp(&p.date))
            .ok()
            .map(|index| &self.points[index])
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.oldest().date <= date && date <= self.latest().date
    }

    /// Most recent date with the latest available price. Falls back to the
    /// previous point once when the latest price is not reported yet.
    pub fn latest_price(&self) -> Result<(NaiveDate, f64), TrackerError> {
        let latest = self.latest();
        latest
            .price
            .or_else(|| self.points.get(1).and_then(|p| p.price))
            .map(|price| (latest.date, price))
            .ok_or_else(|| TrackerError::MissingLatestPrice {
                symbol: self.symbol.clone(),
                date: latest.date,
            })
    }

    /// Three line summary: identifier, currency and type, latest price.
    pub fn summary(&self) -> Result<String, TrackerError> {
        let (date, price) = self.latest_price()?;
        Ok(format!(
            "{} - {}\n{} - {}\nLatest price: {} - ${:.2}",
            self.symbol,
            self.display_name.as_deref().unwrap_or(""),
            self.currency,
            self.instrument_type,
            date.format(DATE_FORMAT),
            price
        ))
    }

    /// Compares by symbol. A raw symbol is compared as given, without case
    /// normalization.
    pub fn matches(&self, other: FundRef<'_>) -> bool {
        match other {
            FundRef::Fund(fund) => self.symbol == fund.symbol,
            FundRef::Symbol(symbol) => self.symbol == symbol,
        }
    }

    /// Dynamic comparison against a `Fund`, `String` or `&'static str`.
    /// Any other type is a programming error.
    pub fn try_eq<T: Any>(&self, other: &T) -> Result<bool, TrackerError> {
        let other: &dyn Any = other;
        if let Some(fund) = other.downcast_ref::<Fund>() {
            Ok(self.matches(FundRef::Fund(fund)))
        } else if let Some(symbol) = other.downcast_ref::<String>() {
            Ok(self.matches(FundRef::Symbol(symbol)))
        } else if let Some(symbol) = other.downcast_ref::<&str>() {
            Ok(self.matches(FundRef::Symbol(symbol)))
        } else {
            Err(TrackerError::InvalidComparison {
                symbol: self.symbol.clone(),
                type_name: std::any::type_name::<T>(),
            })
        }
    }
}

impl PartialEq for Fund {
    fn eq(&self, other: &Self) -> bool {
        self.matches(FundRef::Fund(other))
    }
}

impl Eq for Fund {}

impl PartialEq<str> for Fund {
    fn eq(&self, other: &str) -> bool {
        self.matches(FundRef::Symbol(other))
    }
}

impl PartialEq<&str> for Fund {
    fn eq(&self, other: &&str) -> bool {
        self.matches(FundRef::Symbol(other))
    }
}

impl PartialEq<String> for Fund {
    fn eq(&self, other: &String) -> bool {
        self.matches(FundRef::Symbol(other))
    }
}

impl Display for Fund {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
