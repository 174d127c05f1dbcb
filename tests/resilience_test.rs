mod helpers;

use helpers::{card, temp_store};
use floatchat::prefs::interest::register_interest;
use floatchat::prefs::store::{JsonFileStore, PreferenceStore};
use floatchat::prefs::types::UserPreferences;

#[test]
fn fresh_store_loads_defaults() {
    let (_dir, store) = temp_store();
    let prefs = store.load();
    assert!(prefs.interests.is_empty());
    assert!(prefs.domains.is_empty());
    assert!(!prefs.has_signals());
}

#[test]
fn corrupt_record_degrades_to_defaults() {
    let (_dir, store) = temp_store();
    std::fs::write(store.path(), "not json at all {{{").unwrap();

    let prefs = store.load();
    assert!(prefs.interests.is_empty());

    // The store stays usable: a signal after corruption persists cleanly
    let liked = card("argo_001", "Physical Oceanography", "North Atlantic", "Temperature", &[]);
    register_interest(&store, "argo_001", true, &liked);
    assert!(store.load().interests.contains("argo_001"));
}

#[test]
fn partial_record_merges_with_defaults() {
    let (_dir, store) = temp_store();
    std::fs::write(
        store.path(),
        r#"{"interests": ["monsoon"], "domains": ["Biogeochemical"]}"#,
    )
    .unwrap();

    let prefs = store.load();
    assert!(prefs.interests.contains("monsoon"));
    assert!(prefs.domains.contains("Biogeochemical"));
    assert!(prefs.regions.is_empty());
    assert!(prefs.parameters.is_empty());
    assert!(prefs.discovery_levels.is_empty());
}

#[test]
fn browser_written_record_parses_unchanged() {
    // Shape produced by the web app's local storage writer
    let (_dir, store) = temp_store();
    std::fs::write(
        store.path(),
        r#"{
            "interests": ["argo_002", "monsoon", "anomaly"],
            "domains": ["Biogeochemical"],
            "regions": ["Arabian Sea"],
            "parameters": ["Salinity"],
            "discoveryLevels": ["Alert"],
            "lastUpdated": "2024-03-15T10:30:00.000Z"
        }"#,
    )
    .unwrap();

    let prefs = store.load();
    assert!(prefs.interests.contains("argo_002"));
    assert!(prefs.discovery_levels.contains("Alert"));
    assert_eq!(prefs.last_updated, "2024-03-15T10:30:00.000Z");
}

#[test]
fn save_load_round_trip_refreshes_timestamp_only() {
    let (_dir, store) = temp_store();

    let mut prefs = UserPreferences::default();
    prefs.interests.insert("argo_002".to_string());
    prefs.domains.insert("Biogeochemical".to_string());
    prefs.last_updated = "2000-01-01T00:00:00+00:00".to_string();

    store.save(&prefs);
    let loaded = store.load();

    assert_eq!(loaded.interests, prefs.interests);
    assert_eq!(loaded.domains, prefs.domains);
    assert!(loaded.last_updated > prefs.last_updated);
}

#[test]
fn clear_returns_store_to_first_load_state() {
    let (_dir, store) = temp_store();
    let first = store.load();

    let liked = card("argo_003", "Biogeochemical", "Equatorial Pacific", "Oxygen", &["climate"]);
    register_interest(&store, "argo_003", true, &liked);
    assert!(store.load().has_signals());

    store.clear();
    let after_clear = store.load();
    assert_eq!(after_clear.interests, first.interests);
    assert_eq!(after_clear.domains, first.domains);
    assert_eq!(after_clear.regions, first.regions);
    assert_eq!(after_clear.parameters, first.parameters);
    assert_eq!(after_clear.discovery_levels, first.discovery_levels);
}

#[test]
fn unwritable_path_does_not_panic() {
    // A directory where the file should be makes every write fail; the
    // store swallows the failure and keeps serving defaults.
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let mut prefs = UserPreferences::default();
    prefs.interests.insert("argo_001".to_string());
    store.save(&prefs);

    let loaded = store.load();
    assert!(loaded.interests.is_empty());
}
