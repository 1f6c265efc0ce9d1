use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTHORIZE_URL, DEFAULT_IDENTITY_FIELD,
    DEFAULT_PROVIDER_TIMEOUT_SECS, DEFAULT_REDIRECT_URL, DEFAULT_SCOPE, DEFAULT_TOKEN_URL,
    DEFAULT_USERINFO_URL, MAX_PROVIDER_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Identity provider registration. Defaults target Discord.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: Option<String>,
    pub redirect_url: String,
    pub scope: String,
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    /// Profile field holding the account identifier
    pub identity_field: String,
    pub timeout_secs: u64,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: None,
            redirect_url: String::from(DEFAULT_REDIRECT_URL),
            scope: String::from(DEFAULT_SCOPE),
            authorize_url: String::from(DEFAULT_AUTHORIZE_URL),
            token_url: String::from(DEFAULT_TOKEN_URL),
            userinfo_url: String::from(DEFAULT_USERINFO_URL),
            identity_field: String::from(DEFAULT_IDENTITY_FIELD),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

// Hand-written so the client secret never reaches a log line.
impl std::fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("redirect_url", &self.redirect_url)
            .field("scope", &self.scope)
            .field("authorize_url", &self.authorize_url)
            .field("token_url", &self.token_url)
            .field("userinfo_url", &self.userinfo_url)
            .field("identity_field", &self.identity_field)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl OAuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.client_id.trim().is_empty() {
            return Err(ConfigError::oauth("oauth.client_id is required"));
        }

        match self.client_secret.as_deref() {
            Some(secret) if !secret.trim().is_empty() => {}
            _ => return Err(ConfigError::oauth("oauth.client_secret is required")),
        }

        for (name, url) in [
            ("oauth.redirect_url", &self.redirect_url),
            ("oauth.authorize_url", &self.authorize_url),
            ("oauth.token_url", &self.token_url),
            ("oauth.userinfo_url", &self.userinfo_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::oauth(format!(
                    "{name} must be an absolute http(s) URL, got '{url}'"
                )));
            }
        }

        if self.identity_field.trim().is_empty() {
            return Err(ConfigError::oauth("oauth.identity_field cannot be empty"));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_PROVIDER_TIMEOUT_SECS {
            return Err(ConfigError::oauth(format!(
                "oauth.timeout_secs must be 1-{}, got {}",
                MAX_PROVIDER_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn client_secret(&self) -> &str {
        self.client_secret.as_deref().unwrap_or_default()
    }
}
