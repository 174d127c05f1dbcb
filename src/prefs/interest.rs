//! Interest updater — translates one swipe into a preference mutation.
//!
//! A positive signal teaches the record everything the item exposes: the
//! item id and its tags land in `interests`, and each categorical attribute
//! joins its set. A negative signal retracts only the item id. Categorical
//! sets are accumulate-only: disliking an item never unlearns the domain or
//! region affinity a previous like established.

use crate::prefs::store::PreferenceStore;
use crate::prefs::types::Candidate;

/// Record one interest signal for `item` and persist the result.
pub fn register_interest(
    store: &dyn PreferenceStore,
    item_id: &str,
    interested: bool,
    item: &dyn Candidate,
) {
    let mut prefs = store.load();

    if interested {
        prefs.interests.insert(item_id.to_string());
        if let Some(domain) = item.domain() {
            prefs.domains.insert(domain.to_string());
        }
        if let Some(region) = item.region() {
            prefs.regions.insert(region.to_string());
        }
        if let Some(parameter) = item.parameter() {
            prefs.parameters.insert(parameter.to_string());
        }
        if let Some(level) = item.discovery_level() {
            prefs.discovery_levels.insert(level.to_string());
        }
        for tag in item.tags() {
            prefs.interests.insert(tag.clone());
        }
    } else {
        prefs.interests.remove(item_id);
    }

    store.save(&prefs);
}
