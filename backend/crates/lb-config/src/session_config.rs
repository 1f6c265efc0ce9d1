use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COOKIE_NAME, DEFAULT_LANDING_URL,
    DEFAULT_SESSION_TTL_SECS, MIN_SESSION_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    /// HMAC key for signing credentials
    pub secret: Option<String>,
    pub ttl_secs: u64,
    /// Add the `Secure` attribute to the credential cookie
    pub secure_cookie: bool,
    /// Where the browser lands after login/logout
    pub landing_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            secret: None,
            ttl_secs: DEFAULT_SESSION_TTL_SECS,
            secure_cookie: false,
            landing_url: String::from(DEFAULT_LANDING_URL),
        }
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("cookie_name", &self.cookie_name)
            .field("secret", &self.secret.as_ref().map(|_| "***"))
            .field("ttl_secs", &self.ttl_secs)
            .field("secure_cookie", &self.secure_cookie)
            .field("landing_url", &self.landing_url)
            .finish()
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = self.secret.as_deref() else {
            return Err(ConfigError::session(
                "session.secret is required (set LB_SESSION_SECRET)",
            ));
        };

        if secret.len() < MIN_SESSION_SECRET_LENGTH {
            return Err(ConfigError::session(format!(
                "session.secret must be at least {} characters",
                MIN_SESSION_SECRET_LENGTH
            )));
        }

        let valid_name = !self.cookie_name.is_empty()
            && self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid_name {
            return Err(ConfigError::session(format!(
                "session.cookie_name must be non-empty ASCII alphanumerics, '_' or '-', got '{}'",
                self.cookie_name
            )));
        }

        if self.ttl_secs == 0 {
            return Err(ConfigError::session("session.ttl_secs must be positive"));
        }

        if self.landing_url.trim().is_empty() {
            return Err(ConfigError::session("session.landing_url cannot be empty"));
        }

        Ok(())
    }

    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_deref().unwrap_or_default().as_bytes()
    }
}
