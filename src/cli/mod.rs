pub mod range;
pub mod setup;
pub mod show;
pub mod ui;
pub mod watchlist;
