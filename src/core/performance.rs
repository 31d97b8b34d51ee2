//! Percentage change over fixed lookback windows.

use crate::core::fund::Fund;
use chrono::Duration;

/// Percentage difference between two prices. Negative when `first` is
/// greater than `last`.
///
/// A decrease is measured against `first` and an increase against `last`.
pub fn percentage_change(first: f64, last: f64) -> f64 {
    if first == last {
        0.0
    } else if first > last {
        -((first - last) / first * 100.0)
    } else {
        (last - first) / last * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum LookbackWindow {
    Day,
    Week,
    Year,
}

impl LookbackWindow {
    pub const ALL: [LookbackWindow; 3] =
        [LookbackWindow::Day, LookbackWindow::Week, LookbackWindow::Year];

    /// The year window is 52 weeks, not a calendar year.
    pub fn to_duration(&self) -> Duration {
        match self {
            LookbackWindow::Day => Duration::days(1),
            LookbackWindow::Week => Duration::weeks(1),
            LookbackWindow::Year => Duration::weeks(52),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LookbackWindow::Day => "Previous 24 hours",
            LookbackWindow::Week => "Previous week",
            LookbackWindow::Year => "Previous year",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WindowPerformance<'a> {
    pub window: LookbackWindow,
    /// `None` when no price exists at the exact lookback date.
    pub change: Option<f64>,
    pub fund: &'a Fund,
}

impl WindowPerformance<'_> {
    pub fn render(&self) -> String {
        match self.change {
            Some(change) => format!("{}: {change:.2}%", self.window.label()),
            None => format!("{}: unavailable", self.window.label()),
        }
    }
}

pub fn window_performance(fund: &Fund, window: LookbackWindow) -> WindowPerformance<'_> {
    let current = fund.latest();
    let target_date = current.date - window.to_duration();

    let change = fund
        .point_on(target_date)
        .and_then(|before| before.price.zip(current.price))
        .map(|(before, now)| percentage_change(before, now));

    WindowPerformance {
        window,
        change,
        fund,
    }
}

pub fn day_performance(fund: &Fund) -> WindowPerformance<'_> {
    window_performance(fund, LookbackWindow::Day)
}

pub fn week_performance(fund: &Fund) -> WindowPerformance<'_> {
    window_performance(fund, LookbackWindow::Week)
}

pub fn year_performance(fund: &Fund) -> WindowPerformance<'_> {
    window_performance(fund, LookbackWindow::Year)
}
