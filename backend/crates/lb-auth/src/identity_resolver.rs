//! OAuth2 authorization-code exchange against the identity provider.
//!
//! The exchange is two provider calls: the code is traded for a bearer
//! token at the token endpoint, then the bearer token is used to fetch the
//! caller's profile, from which the account identifier is read. Neither call
//! is retried; a failed exchange means the user starts over at `/login`.

use crate::{AuthError, ProviderSettings, Result as AuthErrorResult};

use lb_core::Identity;

use log::{debug, warn};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

pub struct IdentityResolver {
    settings: ProviderSettings,
    authorize_url: Url,
    token_url: Url,
    userinfo_url: Url,
    client: Client,
}

impl IdentityResolver {
    /// Parses every configured endpoint up front so that building the
    /// authorization redirect later cannot fail.
    pub fn new(settings: ProviderSettings) -> AuthErrorResult<Self> {
        let authorize_url = parse_url("authorize_url", &settings.authorize_url)?;
        let token_url = parse_url("token_url", &settings.token_url)?;
        let userinfo_url = parse_url("userinfo_url", &settings.userinfo_url)?;
        parse_url("redirect_url", &settings.redirect_url)?;

        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| AuthError::configuration(format!("HTTP client: {e}")))?;

        Ok(Self {
            settings,
            authorize_url,
            token_url,
            userinfo_url,
            client,
        })
    }

    /// Provider authorization endpoint the login route redirects to
    pub fn build_authorization_redirect(&self) -> Url {
        let mut url = self.authorize_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.settings.client_id)
            .append_pair("redirect_uri", &self.settings.redirect_url)
            .append_pair("response_type", "code")
            .append_pair("scope", &self.settings.scope);
        url
    }

    /// Trade a one-time authorization code for the caller's identity
    pub async fn exchange_code(&self, code: &str) -> AuthErrorResult<Identity> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AuthError::exchange("authorization code is empty"));
        }

        let access_token = self.fetch_access_token(code).await?;
        let identity = self.fetch_identity(&access_token).await?;

        debug!("Resolved provider identity {}", identity);
        Ok(identity)
    }

    async fn fetch_access_token(&self, code: &str) -> AuthErrorResult<String> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.settings.redirect_url.as_str()),
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
        ];

        let response = self
            .client
            .post(self.token_url.clone())
            .form(&params)
            .send()
            .await
            .map_err(|e| transport_error("token", &e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Token endpoint rejected authorization code: {}", status);
            return Err(AuthError::exchange(format!(
                "token endpoint returned {status}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| transport_error("token", &e))?;

        match body.access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AuthError::exchange("token response has no access_token")),
        }
    }

    async fn fetch_identity(&self, access_token: &str) -> AuthErrorResult<Identity> {
        let response = self
            .client
            .get(self.userinfo_url.clone())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| transport_error("profile", &e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Profile endpoint rejected access token: {}", status);
            return Err(AuthError::exchange(format!(
                "profile endpoint returned {status}"
            )));
        }

        let profile: Value = response
            .json()
            .await
            .map_err(|e| transport_error("profile", &e))?;

        let field = self.settings.identity_field.as_str();
        match profile.get(field) {
            Some(Value::String(id)) if !id.is_empty() => Ok(Identity::new(id.as_str())),
            Some(Value::Number(id)) => Ok(Identity::new(id.to_string())),
            _ => Err(AuthError::exchange(format!(
                "profile response has no '{field}' identifier"
            ))),
        }
    }
}

#[track_caller]
fn parse_url(name: &str, value: &str) -> AuthErrorResult<Url> {
    Url::parse(value).map_err(|e| AuthError::configuration(format!("{name} '{value}': {e}")))
}

fn transport_error(endpoint: &str, error: &reqwest::Error) -> AuthError {
    if error.is_timeout() {
        AuthError::exchange(format!("{endpoint} endpoint timed out"))
    } else {
        AuthError::exchange(format!("{endpoint} endpoint request failed: {error}"))
    }
}
