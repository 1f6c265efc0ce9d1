use crate::{
    AppState, create_blacklist_entry, create_record, delete_blacklist_entry, delete_record,
    get_blacklist_entry, get_record, health, is_whitelisted, list_blacklist, list_records, login,
    logout, oauth_callback,
};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    Router::new()
        // Login flow
        .route("/login", get(login))
        .route("/oauth/callback", get(oauth_callback))
        .route("/logout", get(logout))
        .route("/is-whitelisted", get(is_whitelisted))
        // Vehicle listings
        .route("/records", get(list_records).post(create_record))
        .route("/records/{id}", get(get_record).delete(delete_record))
        // Blacklist
        .route("/blacklist", get(list_blacklist).post(create_blacklist_entry))
        .route(
            "/blacklist/{id}",
            get(get_blacklist_entry).delete(delete_blacklist_entry),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        // Add shared state
        .with_state(state)
        .layer(cors)
}

/// Any origin when none are configured; otherwise only the listed origins,
/// which may then send the session cookie.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring unusable CORS origin {origin}: {e}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
