pub mod feed;
pub mod inspect;
pub mod reset;
pub mod swipe;

use crate::catalog::FloatCard;
use crate::config::FloatchatConfig;
use crate::prefs::store::JsonFileStore;
use anyhow::Result;

/// Open the configured preference store.
pub fn open_store(config: &FloatchatConfig) -> JsonFileStore {
    JsonFileStore::new(config.resolved_prefs_path())
}

/// Load the configured catalog, falling back to the bundled one.
pub fn load_cards(config: &FloatchatConfig) -> Result<Vec<FloatCard>> {
    match config.resolved_catalog_path() {
        Some(path) => crate::catalog::load_catalog(path),
        None => Ok(crate::catalog::builtin_catalog()),
    }
}
