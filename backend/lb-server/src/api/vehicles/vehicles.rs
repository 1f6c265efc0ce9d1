//! Vehicle listing REST API handlers

use crate::api::records::{create_in, delete_in, get_in, list_in};
use crate::{ApiResult, AppState, CurrentIdentity, DeleteResponse};

use lb_core::{NewVehicle, Vehicle};

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};

/// GET /records?<attr>=<value>
///
/// List vehicles, optionally filtered on one attribute (e.g. `available=true`)
pub async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Vehicle>>> {
    list_in(&state.vehicles, params).await
}

/// GET /records/{id}
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vehicle>> {
    get_in(&state.vehicles, &id).await
}

/// POST /records
pub async fn create_record(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    payload: Result<Json<NewVehicle>, JsonRejection>,
) -> ApiResult<Json<Vehicle>> {
    create_in(&state.vehicles, &identity, payload).await
}

/// DELETE /records/{id}
pub async fn delete_record(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    delete_in(&state.vehicles, &id, &identity).await
}
