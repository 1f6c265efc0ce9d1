//! Handler bodies shared by every record kind.

use crate::{ApiError, ApiResult, DeleteResponse};

use lb_core::{Identity, Record, RecordFilter};
use lb_store::RecordStore;

use axum::{Json, extract::rejection::JsonRejection};

/// At most one `attribute=value` pair is accepted as a filter. Pairs are
/// kept as sent, so a repeated key counts twice.
pub(crate) fn filter_from_query(params: Vec<(String, String)>) -> ApiResult<Option<RecordFilter>> {
    if params.len() > 1 {
        return Err(ApiError::bad_request(
            "At most one filter parameter is supported",
        ));
    }

    Ok(params
        .into_iter()
        .next()
        .map(|(attribute, value)| RecordFilter::new(attribute, value)))
}

pub(crate) async fn list_in<R: Record>(
    store: &RecordStore<R>,
    params: Vec<(String, String)>,
) -> ApiResult<Json<Vec<R>>> {
    let filter = filter_from_query(params)?;
    Ok(Json(store.list(filter.as_ref()).await))
}

pub(crate) async fn get_in<R: Record>(store: &RecordStore<R>, id: &str) -> ApiResult<Json<R>> {
    store
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("No {} with id {} found", R::KIND, id)))
}

pub(crate) async fn create_in<R: Record>(
    store: &RecordStore<R>,
    writer: &Identity,
    payload: Result<Json<R::Draft>, JsonRejection>,
) -> ApiResult<Json<R>> {
    let Json(draft) = payload?;
    let record = store.create(draft, writer).await?;
    Ok(Json(record))
}

pub(crate) async fn delete_in<R: Record>(
    store: &RecordStore<R>,
    id: &str,
    requester: &Identity,
) -> ApiResult<Json<DeleteResponse>> {
    store.delete(id, requester).await?;
    Ok(Json(DeleteResponse { success: true }))
}
