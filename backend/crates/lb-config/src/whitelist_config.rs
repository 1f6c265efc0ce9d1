use serde::Deserialize;

/// Provider account ids allowed to create and delete records
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WhitelistConfig {
    pub members: Vec<String>,
}
