//! Core preference type definitions.
//!
//! Defines [`UserPreferences`] (the single persisted record of accumulated
//! interest signals) and [`Candidate`] (the narrow read-only view of a
//! scoreable item).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The user's accumulated interest signals. Exactly one record exists per
/// device, stored under a fixed key.
///
/// All five collections are sets — deduplicated at every write, insertion
/// order irrelevant. The JSON layout (camelCase field names, arrays of
/// strings) matches the record the browser app writes to local storage, so
/// either side can read the other's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    /// Liked item ids plus every tag learned from liked items.
    pub interests: BTreeSet<String>,
    /// Domains the user has implicitly endorsed (e.g. "Biogeochemical").
    pub domains: BTreeSet<String>,
    /// Regions the user has implicitly endorsed (e.g. "Arabian Sea").
    pub regions: BTreeSet<String>,
    /// Measured parameters the user has implicitly endorsed (e.g. "Salinity").
    pub parameters: BTreeSet<String>,
    /// Discovery levels the user has implicitly endorsed (e.g. "Alert").
    pub discovery_levels: BTreeSet<String>,
    /// RFC 3339 timestamp of the last write.
    pub last_updated: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            interests: BTreeSet::new(),
            domains: BTreeSet::new(),
            regions: BTreeSet::new(),
            parameters: BTreeSet::new(),
            discovery_levels: BTreeSet::new(),
            last_updated: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl UserPreferences {
    /// True once any signal has been learned. The feed treats a user with
    /// neither interests nor domains as unpersonalized.
    pub fn has_signals(&self) -> bool {
        !self.interests.is_empty() || !self.domains.is_empty()
    }
}

/// Read-only view of an item eligible for personalized scoring.
///
/// Any attribute a candidate lacks is reported as `None` (or an empty tag
/// slice) and contributes zero to its score. The scorer never needs more
/// than these six accessors, so richer item shapes stay out of its way.
pub trait Candidate {
    fn id(&self) -> &str;
    fn domain(&self) -> Option<&str>;
    fn region(&self) -> Option<&str>;
    fn parameter(&self) -> Option<&str>;
    fn discovery_level(&self) -> Option<&str>;
    fn tags(&self) -> &[String];
}
