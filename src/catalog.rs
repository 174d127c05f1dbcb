//! The card catalog — the items the feed ranks and the user swipes on.
//!
//! Cards are plain data loaded from a JSON file; a sample catalog is
//! bundled into the binary for first runs. Feed cards carry popularity
//! counters but no discovery level; swipe-deck cards carry a discovery
//! level but start with zero likes. Both share one shape with optional
//! fields.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::prefs::types::Candidate;

/// One displayable ARGO data card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub region: String,
    pub parameter: String,
    pub domain: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Curated significance label (e.g. "Alert", "Breakthrough"). Absent on
    /// regular feed cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_level: Option<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub saves: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float_id: Option<String>,
}

impl Candidate for FloatCard {
    fn id(&self) -> &str {
        &self.id
    }

    fn domain(&self) -> Option<&str> {
        Some(&self.domain)
    }

    fn region(&self) -> Option<&str> {
        Some(&self.region)
    }

    fn parameter(&self) -> Option<&str> {
        Some(&self.parameter)
    }

    fn discovery_level(&self) -> Option<&str> {
        self.discovery_level.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Load a catalog from a JSON file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<FloatCard>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog at {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse catalog at {}", path.display()))
}

/// The catalog bundled into the binary, used when none is configured.
pub fn builtin_catalog() -> Vec<FloatCard> {
    serde_json::from_str(BUILTIN_CATALOG).expect("bundled catalog is valid JSON")
}

/// Find a card by id.
pub fn find_card<'a>(cards: &'a [FloatCard], id: &str) -> Option<&'a FloatCard> {
    cards.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let cards = builtin_catalog();
        assert!(cards.len() >= 12);

        let feed_card = find_card(&cards, "argo_002").unwrap();
        assert_eq!(feed_card.domain, "Biogeochemical");
        assert_eq!(feed_card.likes, 31);
        assert!(feed_card.discovery_level.is_none());

        let swipe_card = find_card(&cards, "explore_004").unwrap();
        assert_eq!(swipe_card.discovery_level.as_deref(), Some("Alert"));
        assert_eq!(swipe_card.likes, 0);
    }

    #[test]
    fn card_exposes_candidate_view() {
        let cards = builtin_catalog();
        let card = find_card(&cards, "explore_004").unwrap();

        let candidate: &dyn Candidate = card;
        assert_eq!(candidate.id(), "explore_004");
        assert_eq!(candidate.domain(), Some("Biogeochemical"));
        assert_eq!(candidate.region(), Some("Arabian Sea"));
        assert_eq!(candidate.parameter(), Some("Oxygen"));
        assert_eq!(candidate.discovery_level(), Some("Alert"));
        assert!(candidate.tags().contains(&"dead-zone".to_string()));
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let err = load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(err.to_string().contains("failed to read catalog"));
    }
}
