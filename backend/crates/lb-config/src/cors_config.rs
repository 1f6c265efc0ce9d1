use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Browser origins allowed to call the API with credentials. Empty means
/// any origin, without credentials.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for origin in &self.allowed_origins {
            let scheme_ok = origin.starts_with("https://") || origin.starts_with("http://");
            if !scheme_ok || origin.ends_with('/') || origin.contains('*') {
                return Err(ConfigError::cors(format!(
                    "cors.allowed_origins entry '{origin}' must be a scheme://host[:port] origin"
                )));
            }
        }
        Ok(())
    }
}
