pub mod interest;
pub mod score;
pub mod store;
pub mod types;

/// Storage key for the single preference record. Matches the key the
/// browser app uses in local storage, so both sides address the same slot.
pub const PREFERENCES_KEY: &str = "floatchat_user_preferences";
