use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BLACKLIST_FILENAME, DEFAULT_RECORDS_FILENAME,
};

use std::path::Path;

use serde::Deserialize;

/// Snapshot file locations, relative to the config dir
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub records_path: String,
    pub blacklist_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            records_path: String::from(DEFAULT_RECORDS_FILENAME),
            blacklist_path: String::from(DEFAULT_BLACKLIST_FILENAME),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_path("storage.records_path", &self.records_path)?;
        Self::validate_path("storage.blacklist_path", &self.blacklist_path)?;

        if self.records_path == self.blacklist_path {
            return Err(ConfigError::storage(
                "storage.records_path and storage.blacklist_path must differ",
            ));
        }

        Ok(())
    }

    fn validate_path(name: &str, value: &str) -> ConfigErrorResult<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::storage(format!("{name} cannot be empty")));
        }
        if Path::new(value).is_absolute() || value.contains("..") {
            return Err(ConfigError::storage(format!(
                "{name} must be relative and cannot contain '..'"
            )));
        }
        Ok(())
    }
}
