//! CLI `inspect` command — display the current preference record.

use anyhow::Result;

use crate::config::FloatchatConfig;
use crate::prefs::store::PreferenceStore;

/// Print the learned preference record.
pub fn inspect(config: &FloatchatConfig) -> Result<()> {
    let store = super::open_store(config);
    let prefs = store.load();

    println!("User Preferences");
    println!("{}", "=".repeat(40));
    println!("  Last updated:  {}", prefs.last_updated);
    println!();

    print_set("Interests", &prefs.interests);
    print_set("Domains", &prefs.domains);
    print_set("Regions", &prefs.regions);
    print_set("Parameters", &prefs.parameters);
    print_set("Discovery levels", &prefs.discovery_levels);

    if !prefs.has_signals() {
        println!();
        println!("No signals learned yet.");
    }

    Ok(())
}

fn print_set(label: &str, set: &std::collections::BTreeSet<String>) {
    println!("{label} ({}):", set.len());
    for entry in set {
        println!("  {entry}");
    }
}
