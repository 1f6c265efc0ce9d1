#![allow(dead_code)]

//! Test infrastructure for lb-server API tests

use lb_auth::{AuthorizationPolicy, IdentityResolver, ProviderSettings, SessionBinder};
use lb_core::Identity;
use lb_server::{AppState, CookieSettings};
use lb_store::RecordStore;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use tempfile::TempDir;

pub const WRITER: &str = "A";
pub const OUTSIDER: &str = "B";
pub const COOKIE_NAME: &str = "lb_session";
pub const SECRET: &[u8] = b"listing-board-test-secret-0123456789";

/// App state plus the directory holding its snapshots
pub struct TestApp {
    pub state: AppState,
    pub dir: TempDir,
}

pub fn provider_settings(base_url: &str) -> ProviderSettings {
    ProviderSettings {
        client_id: "client-123".into(),
        client_secret: "shh".into(),
        redirect_url: "http://127.0.0.1:8000/oauth/callback".into(),
        scope: "identify".into(),
        authorize_url: format!("{base_url}/oauth2/authorize"),
        token_url: format!("{base_url}/oauth2/token"),
        userinfo_url: format!("{base_url}/users/@me"),
        identity_field: "id".into(),
        timeout: Duration::from_secs(2),
    }
}

/// Whitelist {"A"}, fresh snapshot files, provider at `provider_base`
pub async fn create_test_app(provider_base: &str) -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let policy = Arc::new(AuthorizationPolicy::new([WRITER]));

    let vehicles = RecordStore::open(dir.path().join("vehicles.json"), Arc::clone(&policy))
        .await
        .expect("Failed to open vehicle store");
    let blacklist = RecordStore::open(dir.path().join("blacklist.json"), Arc::clone(&policy))
        .await
        .expect("Failed to open blacklist store");

    let resolver =
        IdentityResolver::new(provider_settings(provider_base)).expect("Failed to build resolver");

    let state = AppState {
        resolver: Arc::new(resolver),
        sessions: Arc::new(SessionBinder::with_hs256(
            SECRET,
            Duration::from_secs(3600),
        )),
        policy,
        vehicles: Arc::new(vehicles),
        blacklist: Arc::new(blacklist),
        cookies: CookieSettings {
            name: COOKIE_NAME.into(),
            secure: false,
            max_age_secs: 3600,
            landing_url: "/".into(),
        },
        allowed_origins: Vec::new(),
    };

    TestApp { state, dir }
}

/// App whose provider is never contacted
pub async fn create_offline_app() -> TestApp {
    create_test_app("http://127.0.0.1:9").await
}

/// `Cookie` header value carrying a valid session for `identity`
pub fn session_cookie(state: &AppState, identity: &str) -> String {
    let credential = state
        .sessions
        .issue(&Identity::from(identity))
        .expect("Failed to issue credential");
    format!("{}={}", COOKIE_NAME, credential.as_str())
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    request("GET", uri, cookie, Body::empty())
}

pub fn delete(uri: &str, cookie: Option<&str>) -> Request<Body> {
    request("DELETE", uri, cookie, Body::empty())
}

pub fn post_json(uri: &str, cookie: Option<&str>, body: serde_json::Value) -> Request<Body> {
    request("POST", uri, cookie, Body::from(body.to_string()))
}

fn request(method: &str, uri: &str, cookie: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(body).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn truck() -> serde_json::Value {
    serde_json::json!({
        "name": "Truck",
        "miles": 1000,
        "condition": "good"
    })
}
