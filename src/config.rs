use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FloatchatConfig {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub prefs_path: String,
    pub catalog_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FeedConfig {
    pub max_recommendations: usize,
}

impl Default for FloatchatConfig {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            storage: StorageConfig::default(),
            feed: FeedConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let prefs_path = default_floatchat_dir()
            .join("preferences.json")
            .to_string_lossy()
            .into_owned();
        Self {
            prefs_path,
            catalog_path: None,
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_recommendations: 5,
        }
    }
}

/// Returns `~/.floatchat/`
pub fn default_floatchat_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".floatchat")
}

/// Returns the default config file path: `~/.floatchat/config.toml`
pub fn default_config_path() -> PathBuf {
    default_floatchat_dir().join("config.toml")
}

impl FloatchatConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            FloatchatConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (FLOATCHAT_PREFS, FLOATCHAT_CATALOG,
    /// FLOATCHAT_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FLOATCHAT_PREFS") {
            self.storage.prefs_path = val;
        }
        if let Ok(val) = std::env::var("FLOATCHAT_CATALOG") {
            self.storage.catalog_path = Some(val);
        }
        if let Ok(val) = std::env::var("FLOATCHAT_LOG_LEVEL") {
            self.app.log_level = val;
        }
    }

    /// Resolve the preferences file path, expanding `~` if needed.
    pub fn resolved_prefs_path(&self) -> PathBuf {
        expand_tilde(&self.storage.prefs_path)
    }

    /// Resolve the catalog path, if one is configured.
    pub fn resolved_catalog_path(&self) -> Option<PathBuf> {
        self.storage.catalog_path.as_deref().map(expand_tilde)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
