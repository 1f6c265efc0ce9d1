use std::time::Duration;

/// OAuth2 provider endpoints and client registration
#[derive(Clone)]
pub struct ProviderSettings {
    pub client_id: String,
    pub client_secret: String,
    /// Callback URL registered with the provider
    pub redirect_url: String,
    pub scope: String,
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    /// Profile field holding the stable account identifier
    pub identity_field: String,
    /// Upper bound for each provider call
    pub timeout: Duration,
}
