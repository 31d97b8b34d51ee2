pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::{BuildOptions, PriceProvider, SummaryOptions, TrackedSymbol, Tracker};
use crate::providers::{CachingPriceProvider, YahooFinanceProvider};
use crate::store::KeyValueStore;
use crate::store::watchlist::YamlWatchlist;
use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

pub enum AppCommand {
    Show(SummaryOptions),
    Range {
        symbol: String,
        start: NaiveDate,
        end: Option<NaiveDate>,
    },
    Add {
        symbol: String,
        name: Option<String>,
    },
    Remove {
        symbol: String,
    },
    List,
}

const CACHE_DIR: &str = "cache";
const HISTORY_COLLECTION: &str = "history";

fn price_provider(config: &AppConfig, data_dir: &Path) -> Result<Box<dyn PriceProvider>> {
    let yahoo = YahooFinanceProvider::new(&config.yahoo(), &config.fetch)?;
    if !config.cache.enabled {
        debug!("Price cache disabled");
        return Ok(Box::new(yahoo));
    }

    let store = KeyValueStore::open(&data_dir.join(CACHE_DIR));
    Ok(Box::new(CachingPriceProvider::new(
        yahoo,
        store.collection(HISTORY_COLLECTION),
        Some(Duration::from_secs(config.cache.ttl_secs)),
    )))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Fund tracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let data_dir = config.data_dir()?;
    let watchlist = YamlWatchlist::in_dir(true, &data_dir)?;
    let mut tracker = Tracker::from_repository(&watchlist);
    let build = BuildOptions::from(&config.fetch);

    match command {
        AppCommand::Add { symbol, name } => cli::watchlist::add(
            &mut tracker,
            &watchlist,
            TrackedSymbol::new(&symbol, name.as_deref()),
        ),
        AppCommand::Remove { symbol } => cli::watchlist::remove(&mut tracker, &watchlist, &symbol),
        AppCommand::List => {
            cli::watchlist::list(&tracker);
            Ok(())
        }
        AppCommand::Show(options) => {
            let provider = price_provider(&config, &data_dir)?;
            cli::show::run(&mut tracker, provider.as_ref(), build, options).await
        }
        AppCommand::Range { symbol, start, end } => {
            let provider = price_provider(&config, &data_dir)?;
            // Keep the watchlist name when the symbol is tracked
            let entry = tracker
                .entries()
                .iter()
                .find(|e| e.symbol.eq_ignore_ascii_case(&symbol))
                .cloned()
                .unwrap_or_else(|| TrackedSymbol::new(&symbol, None));
            cli::range::run(provider.as_ref(), build, entry, start, end).await
        }
    }
}
