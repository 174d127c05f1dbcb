//! CLI `feed` command — display the ranked, filtered feed.

use anyhow::Result;

use crate::config::FloatchatConfig;
use crate::feed::{build_feed, FeedFilter};
use crate::prefs::store::PreferenceStore;

/// Print the personalized feed to the terminal.
pub fn feed(config: &FloatchatConfig, filter: &FeedFilter, limit: Option<usize>) -> Result<()> {
    let store = super::open_store(config);
    let prefs = store.load();
    let cards = super::load_cards(config)?;

    let mut entries = build_feed(&prefs, cards, filter);
    entries.truncate(limit.unwrap_or(config.feed.max_recommendations));

    if entries.is_empty() {
        println!("No cards match the current filters.");
        return Ok(());
    }

    println!("ARGO Ocean Data Feed");
    println!("{}", "=".repeat(50));
    for entry in &entries {
        let marker = if entry.is_personalized { "*" } else { " " };
        println!(
            "{} [{:>2}] {} ({})",
            marker, entry.personalized_score, entry.card.title, entry.card.id
        );
        println!(
            "      {} | {} | {} | {} likes",
            entry.card.domain, entry.card.region, entry.card.parameter, entry.card.likes
        );
        if let Some(ref level) = entry.card.discovery_level {
            println!("      Discovery level: {level}");
        }
    }

    if !prefs.has_signals() {
        println!();
        println!("No preferences learned yet — showing most-liked cards first.");
        println!("Use `floatchat swipe <id> --like` to start personalizing.");
    }

    Ok(())
}
