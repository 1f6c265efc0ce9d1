mod config;
mod cors_config;
mod error;
mod log_level;
mod logging_config;
mod oauth_config;
mod server_config;
mod session_config;
mod storage_config;
mod whitelist_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use cors_config::CorsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use oauth_config::OAuthConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;
pub use whitelist_config::WhitelistConfig;

const CONFIG_DIR_ENV: &str = "LB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".listing-board";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_RECORDS_FILENAME: &str = "vehicles.json";
const DEFAULT_BLACKLIST_FILENAME: &str = "blacklist.json";

const DEFAULT_AUTHORIZE_URL: &str = "https://discord.com/api/oauth2/authorize";
const DEFAULT_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DEFAULT_USERINFO_URL: &str = "https://discord.com/api/users/@me";
const DEFAULT_REDIRECT_URL: &str = "http://127.0.0.1:8000/oauth/callback";
const DEFAULT_SCOPE: &str = "identify";
const DEFAULT_IDENTITY_FIELD: &str = "id";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;
const MAX_PROVIDER_TIMEOUT_SECS: u64 = 120;

const DEFAULT_COOKIE_NAME: &str = "lb_session";
const DEFAULT_SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;
const MIN_SESSION_SECRET_LENGTH: usize = 32;
const DEFAULT_LANDING_URL: &str = "/";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
