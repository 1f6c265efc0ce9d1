//! Blacklist REST API handlers

use crate::api::records::{create_in, delete_in, get_in, list_in};
use crate::{ApiResult, AppState, CurrentIdentity, DeleteResponse};

use lb_core::{BlacklistEntry, NewBlacklistEntry};

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};

/// GET /blacklist
pub async fn list_blacklist(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<BlacklistEntry>>> {
    list_in(&state.blacklist, params).await
}

/// GET /blacklist/{id}
pub async fn get_blacklist_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BlacklistEntry>> {
    get_in(&state.blacklist, &id).await
}

/// POST /blacklist
pub async fn create_blacklist_entry(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    payload: Result<Json<NewBlacklistEntry>, JsonRejection>,
) -> ApiResult<Json<BlacklistEntry>> {
    create_in(&state.blacklist, &identity, payload).await
}

/// DELETE /blacklist/{id}
pub async fn delete_blacklist_entry(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    delete_in(&state.blacklist, &id, &identity).await
}
