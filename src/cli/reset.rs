//! CLI `reset` command — delete learned preferences after user confirmation.

use anyhow::{bail, Result};
use std::io::Write;

use crate::config::FloatchatConfig;
use crate::prefs::store::PreferenceStore;

/// Clear the preference record after user confirmation.
pub fn reset(config: &FloatchatConfig) -> Result<()> {
    let prefs_path = config.resolved_prefs_path();

    println!("WARNING: This will permanently delete all learned preferences.");
    println!("Preferences file: {}", prefs_path.display());
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim() != "YES" {
        bail!("reset cancelled");
    }

    let store = super::open_store(config);
    store.clear();

    println!("Preferences cleared. The feed will start fresh.");
    Ok(())
}
