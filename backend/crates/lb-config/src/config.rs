use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, CorsConfig,
    DEFAULT_CONFIG_DIR, LoggingConfig, OAuthConfig, ServerConfig, SessionConfig, StorageConfig,
    WhitelistConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub oauth: OAuthConfig,
    pub session: SessionConfig,
    pub whitelist: WhitelistConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for LB_CONFIG_DIR env var, else use ./.listing-board/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply LB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: LB_CONFIG_DIR env var > ./.listing-board/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.storage.validate()?;
        self.session.validate()?;
        self.oauth.validate()?;
        self.cors.validate()?;

        if self.whitelist.members.is_empty() {
            warn!("Whitelist is empty: every create and delete will be forbidden");
        }

        Ok(())
    }

    /// Absolute path to the vehicle snapshot
    pub fn records_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.records_path))
    }

    /// Absolute path to the blacklist snapshot
    pub fn blacklist_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.blacklist_path))
    }

    /// Absolute path to the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  storage: records={}, blacklist={}",
            self.storage.records_path, self.storage.blacklist_path
        );
        info!(
            "  oauth: client_id={}, scope={}, redirect={}, timeout={}s",
            self.oauth.client_id, self.oauth.scope, self.oauth.redirect_url, self.oauth.timeout_secs
        );
        info!(
            "  session: cookie={}, ttl={}s, secure={}",
            self.session.cookie_name, self.session.ttl_secs, self.session.secure_cookie
        );
        info!("  whitelist: {} members", self.whitelist.members.len());
        if self.cors.allowed_origins.is_empty() {
            info!("  cors: any origin");
        } else {
            info!("  cors: {}", self.cors.allowed_origins.join(", "));
        }
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("LB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("LB_SERVER_PORT", &mut self.server.port);

        // Storage
        Self::apply_env_string("LB_STORAGE_RECORDS_PATH", &mut self.storage.records_path);
        Self::apply_env_string(
            "LB_STORAGE_BLACKLIST_PATH",
            &mut self.storage.blacklist_path,
        );

        // OAuth
        Self::apply_env_string("LB_OAUTH_CLIENT_ID", &mut self.oauth.client_id);
        Self::apply_env_option_string("LB_OAUTH_CLIENT_SECRET", &mut self.oauth.client_secret);
        Self::apply_env_string("LB_OAUTH_REDIRECT_URL", &mut self.oauth.redirect_url);
        Self::apply_env_string("LB_OAUTH_SCOPE", &mut self.oauth.scope);
        Self::apply_env_string("LB_OAUTH_AUTHORIZE_URL", &mut self.oauth.authorize_url);
        Self::apply_env_string("LB_OAUTH_TOKEN_URL", &mut self.oauth.token_url);
        Self::apply_env_string("LB_OAUTH_USERINFO_URL", &mut self.oauth.userinfo_url);
        Self::apply_env_string("LB_OAUTH_IDENTITY_FIELD", &mut self.oauth.identity_field);
        Self::apply_env_parse("LB_OAUTH_TIMEOUT_SECS", &mut self.oauth.timeout_secs);

        // Session
        Self::apply_env_string("LB_SESSION_COOKIE_NAME", &mut self.session.cookie_name);
        Self::apply_env_option_string("LB_SESSION_SECRET", &mut self.session.secret);
        Self::apply_env_parse("LB_SESSION_TTL_SECS", &mut self.session.ttl_secs);
        Self::apply_env_bool("LB_SESSION_SECURE_COOKIE", &mut self.session.secure_cookie);
        Self::apply_env_string("LB_SESSION_LANDING_URL", &mut self.session.landing_url);

        // Whitelist
        if let Ok(val) = std::env::var("LB_WHITELIST") {
            self.whitelist.members = Self::split_list(&val);
        }

        // CORS
        if let Ok(val) = std::env::var("LB_CORS_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = Self::split_list(&val);
        }

        // Logging
        Self::apply_env_parse("LB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("LB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("LB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Split a comma-separated list, dropping blank entries
    fn split_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
