//! Durable storage for the preference record.
//!
//! [`PreferenceStore`] is deliberately infallible: personalization is
//! best-effort, so a missing, corrupt, or unwritable record degrades to
//! defaults instead of surfacing an error. Failures are reported through
//! `tracing::warn!` only. [`JsonFileStore`] is the production backend (one
//! JSON file, one record); [`MemoryStore`] is the injectable test double.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::warn;

use crate::prefs::types::UserPreferences;
use crate::prefs::PREFERENCES_KEY;

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load/save/clear for the single [`UserPreferences`] record.
///
/// Contract: `save` followed by `load` returns a value equal to the one
/// saved, except `last_updated`, which `save` refreshes. `load` after
/// `clear` (or on a fresh store) returns defaults. No method ever fails
/// visibly to the caller.
pub trait PreferenceStore {
    fn load(&self) -> UserPreferences;
    fn save(&self, prefs: &UserPreferences);
    fn clear(&self);
}

/// File-backed store: the whole record as one JSON document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<UserPreferences, StoreError> {
        let contents = std::fs::read_to_string(&self.path)?;
        // serde(default) on the record merges partial content with defaults.
        Ok(serde_json::from_str(&contents)?)
    }

    fn try_save(&self, prefs: &UserPreferences) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Atomic write: temp file in the same directory, then rename.
        let tmp_path = self.path.with_extension("tmp");
        let json = serde_json::to_string(prefs)?;
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> UserPreferences {
        match self.try_load() {
            Ok(prefs) => prefs,
            Err(StoreError::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound => {
                UserPreferences::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), "failed to load preferences: {e}");
                UserPreferences::default()
            }
        }
    }

    fn save(&self, prefs: &UserPreferences) {
        let mut updated = prefs.clone();
        updated.last_updated = chrono::Utc::now().to_rfc3339();

        if let Err(e) = self.try_save(&updated) {
            warn!(path = %self.path.display(), "failed to save preferences: {e}");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(ref e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %self.path.display(), "failed to clear preferences: {e}");
            }
        }
    }
}

/// In-memory key-value area mirroring the browser's local storage. Serializes
/// through the same JSON path as [`JsonFileStore`] so round-trip tests cover
/// the real wire format.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Overwrite the raw slot content, bypassing serialization. Lets tests
    /// plant malformed or partial records.
    pub fn set_raw(&self, contents: &str) {
        self.slots()
            .insert(PREFERENCES_KEY.to_string(), contents.to_string());
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> UserPreferences {
        let slots = self.slots();
        let Some(contents) = slots.get(PREFERENCES_KEY) else {
            return UserPreferences::default();
        };
        match serde_json::from_str(contents) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("failed to parse stored preferences: {e}");
                UserPreferences::default()
            }
        }
    }

    fn save(&self, prefs: &UserPreferences) {
        let mut updated = prefs.clone();
        updated.last_updated = chrono::Utc::now().to_rfc3339();

        match serde_json::to_string(&updated) {
            Ok(json) => {
                self.slots().insert(PREFERENCES_KEY.to_string(), json);
            }
            Err(e) => {
                warn!("failed to serialize preferences: {e}");
            }
        }
    }

    fn clear(&self) {
        self.slots().remove(PREFERENCES_KEY);
    }
}
