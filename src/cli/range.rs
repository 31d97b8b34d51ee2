use super::ui;
use crate::core::{BuildOptions, FundRef, PriceProvider, RangePerformance, TrackedSymbol, Tracker};
use anyhow::Result;
use chrono::NaiveDate;

/// Prints the percentage change of `symbol` between `start` and `end`. The
/// default history is loaded first so that dates it covers need no extra
/// request.
pub async fn run(
    provider: &dyn PriceProvider,
    build: BuildOptions,
    entry: TrackedSymbol,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Result<()> {
    let symbol = entry.symbol.to_uppercase();
    let mut tracker = Tracker::new(vec![entry]);
    tracker.build_all(provider, build, &|| ()).await;

    let performance = tracker
        .custom_range_performance(provider, FundRef::Symbol(&symbol), start, end)
        .await?;
    println!("{}", render_range(&performance));
    Ok(())
}

fn render_range(performance: &RangePerformance) -> String {
    let fund = &performance.fund;
    let title = format!("{} - {}", fund.symbol(), fund.display_name().unwrap_or(""));
    format!(
        "{}\n{} {} to {}: {}",
        ui::style_text(title.trim_end_matches([' ', '-']), ui::StyleType::Title),
        ui::style_text("Change from", ui::StyleType::Label),
        performance.start,
        performance.end,
        ui::change_text(performance.change)
    )
}
