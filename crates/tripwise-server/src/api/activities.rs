use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use tripwise_core::Activity;

use super::{normalize_limit, require_destination, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct ActivitiesQuery {
    pub destination: Option<String>,
    pub limit: Option<i64>,
}

pub(super) async fn list_activities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ActivitiesQuery>,
) -> Result<Json<ApiResponse<Vec<Activity>>>, ApiError> {
    let destination = require_destination(&req_id.0, query.destination.as_deref())?;
    let limit = normalize_limit(query.limit);

    let activities = state.travel.get_activities(&destination, limit).await;

    Ok(Json(ApiResponse {
        data: activities,
        meta: ResponseMeta::new(req_id.0),
    }))
}
