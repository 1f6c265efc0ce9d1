//! Login flow handlers
//!
//! `/login` sends the browser to the identity provider, which comes back to
//! `/oauth/callback` with a one-time code. The code is exchanged for the
//! provider identity and a signed session cookie is set.

use crate::{ApiError, ApiResult, AppState, CallbackQuery, CurrentIdentity, WhitelistResponse};

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use log::{debug, info, warn};

/// GET /login
pub async fn login(State(state): State<AppState>) -> Redirect {
    let url = state.resolver.build_authorization_redirect();
    debug!("Redirecting to identity provider");
    Redirect::to(url.as_str())
}

/// GET /oauth/callback?code=<code>
pub async fn oauth_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> ApiResult<Response> {
    if let Some(error) = query.error {
        warn!("Identity provider returned error: {}", error);
        return Err(lb_auth::AuthError::exchange(error).into());
    }

    let code = query
        .code
        .filter(|code| !code.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing authorization code"))?;

    let identity = state.resolver.exchange_code(&code).await?;
    let credential = state.sessions.issue(&identity)?;
    info!("Signed in {}", identity);

    Ok((
        [(header::SET_COOKIE, state.cookies.session_cookie(&credential))],
        Redirect::to(&state.cookies.landing_url),
    )
        .into_response())
}

/// GET /logout
pub async fn logout(State(state): State<AppState>) -> Response {
    (
        [(header::SET_COOKIE, state.cookies.expired_cookie())],
        Redirect::to(&state.cookies.landing_url),
    )
        .into_response()
}

/// GET /is-whitelisted
pub async fn is_whitelisted(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<WhitelistResponse> {
    Json(WhitelistResponse {
        whitelisted: state.policy.is_privileged(&identity),
    })
}
