#![allow(dead_code)]

use floatchat::catalog::FloatCard;
use floatchat::prefs::store::JsonFileStore;

/// A file-backed store in a fresh temp directory. Keep the TempDir alive
/// for the duration of the test.
pub fn temp_store() -> (tempfile::TempDir, JsonFileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("preferences.json"));
    (dir, store)
}

/// Build a minimal card with the attributes scoring cares about.
pub fn card(id: &str, domain: &str, region: &str, parameter: &str, tags: &[&str]) -> FloatCard {
    FloatCard {
        id: id.to_string(),
        title: format!("{id} title"),
        description: String::new(),
        region: region.to_string(),
        parameter: parameter.to_string(),
        domain: domain.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        discovery_level: None,
        likes: 0,
        saves: 0,
        last_update: None,
        depth: None,
        float_id: None,
    }
}

/// Same as [`card`], with a discovery level and like count.
pub fn swipe_card(
    id: &str,
    domain: &str,
    region: &str,
    parameter: &str,
    level: &str,
    tags: &[&str],
) -> FloatCard {
    let mut c = card(id, domain, region, parameter, tags);
    c.discovery_level = Some(level.to_string());
    c
}
