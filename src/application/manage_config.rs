//! Config management use case

use crate::domain::DedupKey;
use crate::error::{QuotebookError, Result};
use crate::infrastructure::{Config, FileSystemRepository, QuotebookRepository};

/// Service for managing quote book configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "remote_url" => Ok(config.remote_url.clone()),
            "sync_interval_secs" => Ok(config.sync_interval_secs.to_string()),
            "dedup" => Ok(config.dedup.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(QuotebookError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: remote_url, sync_interval_secs, dedup, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "remote_url" => {
                config.remote_url = value.trim().to_string();
            }
            "sync_interval_secs" => {
                config.sync_interval_secs = value.trim().parse().map_err(|_| {
                    QuotebookError::Config(format!(
                        "Invalid sync_interval_secs: '{}'. Expected a positive number of seconds",
                        value
                    ))
                })?;
            }
            "dedup" => {
                config.dedup = value.parse::<DedupKey>().map_err(QuotebookError::Config)?;
            }
            "created" => {
                return Err(QuotebookError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(QuotebookError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: remote_url, sync_interval_secs, dedup",
                    key
                )));
            }
        }

        config.validate()?;
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
