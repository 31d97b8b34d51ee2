//! Core business logic abstractions

pub mod cache;
pub mod config;
pub mod error;
pub mod fund;
pub mod log;
pub mod payload;
pub mod performance;
pub mod price;
pub mod tracker;
pub mod watchlist;

// Re-export main types for cleaner imports
pub use error::TrackerError;
pub use fund::{Fund, FundRef, PricePoint};
pub use performance::{LookbackWindow, WindowPerformance, percentage_change};
pub use price::{DateRange, PriceProvider};
pub use tracker::{BuildOptions, RangePerformance, SummaryOptions, Tracker};
pub use watchlist::{Repository, TrackedSymbol};
