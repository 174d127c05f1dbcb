//! Personalized scoring and ranking.
//!
//! The score is a plain additive sum over attribute matches — no decay, no
//! recency, no normalization. Two items with the same matching attributes
//! always score the same against the same preferences.

use crate::prefs::types::{Candidate, UserPreferences};

/// Weight for a domain match — the strongest single signal.
pub const DOMAIN_WEIGHT: u32 = 3;
/// Weight for a region match.
pub const REGION_WEIGHT: u32 = 2;
/// Weight for a measured-parameter match.
pub const PARAMETER_WEIGHT: u32 = 2;
/// Weight for a discovery-level match.
pub const DISCOVERY_LEVEL_WEIGHT: u32 = 1;
/// Weight per tag found in the learned interests.
pub const TAG_WEIGHT: u32 = 1;

/// Compute `item`'s relevance against the given preferences.
///
/// Attributes the item lacks contribute zero. The result is unbounded
/// above: every matching tag adds [`TAG_WEIGHT`].
pub fn personalized_score(prefs: &UserPreferences, item: &dyn Candidate) -> u32 {
    let mut score = 0;

    if matches_set(&prefs.domains, item.domain()) {
        score += DOMAIN_WEIGHT;
    }
    if matches_set(&prefs.regions, item.region()) {
        score += REGION_WEIGHT;
    }
    if matches_set(&prefs.parameters, item.parameter()) {
        score += PARAMETER_WEIGHT;
    }
    if matches_set(&prefs.discovery_levels, item.discovery_level()) {
        score += DISCOVERY_LEVEL_WEIGHT;
    }
    for tag in item.tags() {
        if prefs.interests.contains(tag) {
            score += TAG_WEIGHT;
        }
    }

    score
}

fn matches_set(set: &std::collections::BTreeSet<String>, value: Option<&str>) -> bool {
    value.is_some_and(|v| set.contains(v))
}

/// Rank `items` by descending score and keep the top `limit`.
///
/// The sort is stable: items with equal scores keep their input order.
/// Callers wanting a secondary ordering (the feed breaks ties by likes)
/// apply it themselves.
pub fn recommend<'a, C: Candidate>(
    prefs: &UserPreferences,
    items: &'a [C],
    limit: usize,
) -> Vec<&'a C> {
    let mut scored: Vec<(&C, u32)> = items
        .iter()
        .map(|item| (item, personalized_score(prefs, item)))
        .collect();
    scored.sort_by_key(|(_, score)| std::cmp::Reverse(*score));
    scored.truncate(limit);
    scored.into_iter().map(|(item, _)| item).collect()
}
