//! Configuration management

use crate::domain::DedupKey;
use crate::error::{QuotebookError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Placeholder endpoint quotes are synced against
pub const DEFAULT_REMOTE_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Seconds between sync ticks in watch mode
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote endpoint; empty disables all remote traffic
    #[serde(default = "default_remote_url")]
    pub remote_url: String,
    #[serde(default = "default_sync_interval_secs")]
    pub sync_interval_secs: u64,
    #[serde(default)]
    pub dedup: DedupKey,
    pub created: DateTime<Utc>,
}

fn default_remote_url() -> String {
    DEFAULT_REMOTE_URL.to_string()
}

fn default_sync_interval_secs() -> u64 {
    DEFAULT_SYNC_INTERVAL_SECS
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            remote_url: default_remote_url(),
            sync_interval_secs: default_sync_interval_secs(),
            dedup: DedupKey::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .quotebook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".quotebook").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuotebookError::NotQuotebookDirectory(path.to_path_buf())
            } else {
                QuotebookError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .quotebook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let book_dir = path.join(".quotebook");
        let config_path = book_dir.join("config.toml");

        if !book_dir.exists() {
            fs::create_dir(&book_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.sync_interval_secs == 0 {
            return Err(QuotebookError::Config(
                "sync_interval_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Remote URL, or None when remote traffic is disabled
    pub fn remote_url(&self) -> Option<&str> {
        let url = self.remote_url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }

    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_secs)
    }
}
