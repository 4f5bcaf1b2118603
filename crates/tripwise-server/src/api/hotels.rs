use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use tripwise_core::Hotel;

use super::{normalize_limit, require_destination, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct HotelsQuery {
    pub destination: Option<String>,
    pub limit: Option<i64>,
}

pub(super) async fn list_hotels(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<HotelsQuery>,
) -> Result<Json<ApiResponse<Vec<Hotel>>>, ApiError> {
    let destination = require_destination(&req_id.0, query.destination.as_deref())?;
    let limit = normalize_limit(query.limit);

    let hotels = state.travel.get_hotels(&destination, limit).await;

    Ok(Json(ApiResponse {
        data: hotels,
        meta: ResponseMeta::new(req_id.0),
    }))
}
