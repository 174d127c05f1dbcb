//! Personalized discovery feed for ARGO float data.
//!
//! FloatChat learns a user's interests from swipe and like signals and uses
//! them to rank a catalog of oceanographic data cards. Learning is local:
//! the only state is a single JSON preference record on disk, and scoring
//! is a plain additive sum over attribute matches — no network, no model,
//! no background work.
//!
//! # Architecture
//!
//! - **Preference store**: one [`prefs::types::UserPreferences`] record
//!   behind the injectable [`prefs::store::PreferenceStore`] trait, with a
//!   JSON-file backend and an in-memory test double
//! - **Interest updater**: [`prefs::interest::register_interest`] folds one
//!   swipe into the record (positive signals accumulate, negative signals
//!   only retract the item id)
//! - **Scorer**: [`prefs::score::personalized_score`] and
//!   [`prefs::score::recommend`] rank candidates by weighted attribute
//!   matches
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`catalog`] — Card types and the JSON catalog loader
//! - [`prefs`] — Preference record, storage, interest signals, and scoring
//! - [`feed`] — Feed assembly: filters, score attachment, popularity tie-break

pub mod catalog;
pub mod config;
pub mod feed;
pub mod prefs;
