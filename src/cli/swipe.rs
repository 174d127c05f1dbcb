//! CLI `swipe` command — register one interest signal.

use anyhow::{bail, Result};

use crate::config::FloatchatConfig;
use crate::prefs::interest::register_interest;

/// Record a like (or pass) for a catalog card.
pub fn swipe(config: &FloatchatConfig, id: &str, interested: bool) -> Result<()> {
    let cards = super::load_cards(config)?;
    let Some(card) = crate::catalog::find_card(&cards, id) else {
        bail!("no card with id {id} in the catalog");
    };

    let store = super::open_store(config);
    register_interest(&store, id, interested, card);

    if interested {
        println!("Liked {} — {}", card.id, card.title);
    } else {
        println!("Passed on {} — {}", card.id, card.title);
    }
    Ok(())
}
