use super::ui;
use crate::core::{BuildOptions, PriceProvider, SummaryOptions, Tracker, TrackerError};
use anyhow::Result;

/// Fetches every tracked symbol and prints its summary.
pub async fn run(
    tracker: &mut Tracker,
    provider: &dyn PriceProvider,
    build: BuildOptions,
    options: SummaryOptions,
) -> Result<()> {
    if tracker.entries().is_empty() {
        println!(
            "{}",
            ui::style_text(
                "No symbols tracked. Add one with `fundtrack add <SYMBOL>`.",
                ui::StyleType::Subtle
            )
        );
        return Ok(());
    }

    let pb = ui::new_progress_bar(tracker.entries().len() as u64);
    tracker.build_all(provider, build, &|| pb.inc(1)).await;
    pb.finish_and_clear();

    let skipped = tracker.entries().len() - tracker.funds().len();
    let blocks = render_summaries(&tracker.summaries(options));
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            ui::print_separator();
        }
        println!("{block}");
    }

    if skipped > 0 {
        println!(
            "\n{}",
            ui::style_text(
                &format!("{skipped} symbol(s) skipped, run with --verbose for details"),
                ui::StyleType::Error
            )
        );
    }
    Ok(())
}

/// One printable block per fund. The first line of a summary, holding the
/// symbol, is styled as a title.
fn render_summaries(summaries: &[Result<String, TrackerError>]) -> Vec<String> {
    summaries
        .iter()
        .map(|summary| match summary {
            Ok(text) => match text.split_once('\n') {
                Some((title, rest)) => {
                    format!("{}\n{}", ui::style_text(title, ui::StyleType::Title), rest)
                }
                None => text.clone(),
            },
            Err(e) => ui::style_text(&e.to_string(), ui::StyleType::Error),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_summaries() {
        console::set_colors_enabled(false);
        let summaries = vec![
            Ok("F - Ford\nUSD - STOCK\nLatest price: 2022-04-05 - $16.20".to_string()),
            Err(TrackerError::MissingLatestPrice {
                symbol: "X".to_string(),
                date: chrono::NaiveDate::from_ymd_opt(2022, 4, 5).unwrap(),
            }),
        ];

        let blocks = render_summaries(&summaries);
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            "F - Ford\nUSD - STOCK\nLatest price: 2022-04-05 - $16.20"
        );
        assert!(blocks[1].contains("X"));
    }
}
