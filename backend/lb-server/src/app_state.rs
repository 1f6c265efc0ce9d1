use crate::CookieSettings;
use crate::error::Result as ServerErrorResult;

use lb_auth::{AuthorizationPolicy, IdentityResolver, ProviderSettings, SessionBinder};
use lb_config::Config;
use lb_core::{BlacklistEntry, Vehicle};
use lb_store::RecordStore;

use std::sync::Arc;
use std::time::Duration;

use log::info;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<IdentityResolver>,
    pub sessions: Arc<SessionBinder>,
    pub policy: Arc<AuthorizationPolicy>,
    pub vehicles: Arc<RecordStore<Vehicle>>,
    pub blacklist: Arc<RecordStore<BlacklistEntry>>,
    pub cookies: CookieSettings,
    /// Browser origins allowed to send credentials; empty = any origin
    pub allowed_origins: Vec<String>,
}

impl AppState {
    /// Build every component from validated configuration
    pub async fn from_config(config: &Config) -> ServerErrorResult<Self> {
        let resolver = IdentityResolver::new(ProviderSettings {
            client_id: config.oauth.client_id.clone(),
            client_secret: config.oauth.client_secret().to_string(),
            redirect_url: config.oauth.redirect_url.clone(),
            scope: config.oauth.scope.clone(),
            authorize_url: config.oauth.authorize_url.clone(),
            token_url: config.oauth.token_url.clone(),
            userinfo_url: config.oauth.userinfo_url.clone(),
            identity_field: config.oauth.identity_field.clone(),
            timeout: Duration::from_secs(config.oauth.timeout_secs),
        })?;

        let sessions = SessionBinder::with_hs256(
            config.session.secret_bytes(),
            Duration::from_secs(config.session.ttl_secs),
        );

        let policy = Arc::new(AuthorizationPolicy::new(&config.whitelist.members));
        info!("Whitelist loaded: {} members", policy.len());

        let vehicles = RecordStore::open(config.records_path()?, Arc::clone(&policy)).await?;
        let blacklist = RecordStore::open(config.blacklist_path()?, Arc::clone(&policy)).await?;

        Ok(Self {
            resolver: Arc::new(resolver),
            sessions: Arc::new(sessions),
            policy,
            vehicles: Arc::new(vehicles),
            blacklist: Arc::new(blacklist),
            cookies: CookieSettings {
                name: config.session.cookie_name.clone(),
                secure: config.session.secure_cookie,
                max_age_secs: config.session.ttl_secs,
                landing_url: config.session.landing_url.clone(),
            },
            allowed_origins: config.cors.allowed_origins.clone(),
        })
    }
}
