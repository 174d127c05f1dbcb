//! Feed assembly — filter the catalog, attach personalized scores, order.
//!
//! The feed sorts by personalized score first and breaks ties by likes; a
//! user with no learned signals yet gets a purely popularity-ordered feed.

use crate::catalog::FloatCard;
use crate::prefs::score::personalized_score;
use crate::prefs::types::UserPreferences;

/// Optional narrowing applied before scoring.
#[derive(Debug, Default, Clone)]
pub struct FeedFilter {
    /// Free-text match against title, description, and tags.
    pub search: Option<String>,
    /// Substring match against the card's domain.
    pub domain: Option<String>,
    /// Exact match against the card's region, slug-style ("arabian-sea").
    pub region: Option<String>,
    /// Exact match against the card's parameter.
    pub parameter: Option<String>,
}

impl FeedFilter {
    fn matches(&self, card: &FloatCard) -> bool {
        self.matches_search(card)
            && self.matches_domain(card)
            && self.matches_region(card)
            && self.matches_parameter(card)
    }

    fn matches_search(&self, card: &FloatCard) -> bool {
        let Some(ref query) = self.search else {
            return true;
        };
        let query = query.to_lowercase();
        card.title.to_lowercase().contains(&query)
            || card.description.to_lowercase().contains(&query)
            || card.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }

    fn matches_domain(&self, card: &FloatCard) -> bool {
        let Some(ref domain) = self.domain else {
            return true;
        };
        card.domain.to_lowercase().contains(&domain.to_lowercase())
    }

    fn matches_region(&self, card: &FloatCard) -> bool {
        let Some(ref region) = self.region else {
            return true;
        };
        region_slug(&card.region) == region.to_lowercase()
    }

    fn matches_parameter(&self, card: &FloatCard) -> bool {
        let Some(ref parameter) = self.parameter else {
            return true;
        };
        card.parameter.to_lowercase() == parameter.to_lowercase()
    }
}

fn region_slug(region: &str) -> String {
    region.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// A catalog card with its score for the current user.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub card: FloatCard,
    pub personalized_score: u32,
    /// True when the card ranked above baseline because of learned signals.
    pub is_personalized: bool,
}

/// Filter, score, and order the catalog for display.
pub fn build_feed(
    prefs: &UserPreferences,
    cards: Vec<FloatCard>,
    filter: &FeedFilter,
) -> Vec<FeedEntry> {
    let has_signals = prefs.has_signals();

    let mut entries: Vec<FeedEntry> = cards
        .into_iter()
        .filter(|card| filter.matches(card))
        .map(|card| {
            let score = if has_signals {
                personalized_score(prefs, &card)
            } else {
                0
            };
            FeedEntry {
                is_personalized: has_signals && score > 0,
                personalized_score: score,
                card,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.personalized_score
            .cmp(&a.personalized_score)
            .then(b.card.likes.cmp(&a.card.likes))
    });

    entries
}
