//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use lb_core::Identity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Identity resolved from the session cookie.
///
/// Rejects with 401 before any body is read, so unauthenticated requests
/// never reach validation or authorization.
pub struct CurrentIdentity(pub Identity);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let credential = state.cookies.find(&parts.headers);
            let identity = state.sessions.resolve(credential.as_deref())?;

            log::debug!("Request authenticated as {}", identity);
            Ok(CurrentIdentity(identity))
        }
    }
}
