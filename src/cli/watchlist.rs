use super::ui;
use crate::core::{Repository, TrackedSymbol, Tracker};
use anyhow::{Result, bail};
use comfy_table::{Cell, Table};

pub fn add(tracker: &mut Tracker, repo: &dyn Repository, entry: TrackedSymbol) -> Result<()> {
    let symbol = entry.symbol.to_uppercase();
    let added = tracker.track(entry);
    tracker.save_entries(repo, None)?;

    if added {
        println!("Now tracking {symbol}");
    } else {
        println!("Updated {symbol}");
    }
    Ok(())
}

pub fn remove(tracker: &mut Tracker, repo: &dyn Repository, symbol: &str) -> Result<()> {
    if !tracker.untrack(symbol) {
        bail!("{} is not tracked", symbol.to_uppercase());
    }
    tracker.save_entries(repo, None)?;
    println!("Stopped tracking {}", symbol.to_uppercase());
    Ok(())
}

pub fn list(tracker: &Tracker) {
    if tracker.entries().is_empty() {
        println!(
            "{}",
            ui::style_text("No symbols tracked.", ui::StyleType::Subtle)
        );
        return;
    }
    println!("{}", watchlist_table(tracker.entries()));
}

fn watchlist_table(entries: &[TrackedSymbol]) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Symbol"), ui::header_cell("Name")]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.symbol),
            ui::optional_cell(entry.name.as_deref()),
        ]);
    }
    table
}
