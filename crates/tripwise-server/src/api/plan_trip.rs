use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use tripwise_core::{Activity, Hotel};

use super::{normalize_limit, require_destination, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct PlanTripRequest {
    pub destination: Option<String>,
    pub budget: Option<u64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(super) struct TripPlan {
    pub destination: String,
    pub budget: u64,
    pub hotels: Vec<Hotel>,
    pub activities: Vec<Activity>,
    pub summary: String,
}

pub(super) async fn plan_trip(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<PlanTripRequest>,
) -> Result<Json<ApiResponse<TripPlan>>, ApiError> {
    let destination = require_destination(&req_id.0, body.destination.as_deref())?;
    let Some(budget) = body.budget else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "budget is required",
        ));
    };
    let limit = normalize_limit(body.limit);

    let plan = assemble_plan(&state, destination, budget, limit).await;

    Ok(Json(ApiResponse {
        data: plan,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Fetches hotels and activities concurrently, then writes the summary.
pub(super) async fn assemble_plan(
    state: &AppState,
    destination: String,
    budget: u64,
    limit: usize,
) -> TripPlan {
    let (hotels, activities) = tokio::join!(
        state.travel.get_hotels(&destination, limit),
        state.travel.get_activities(&destination, limit),
    );
    let summary = state
        .summary
        .generate_summary(&destination, budget, &hotels, &activities)
        .await;

    tracing::info!(
        destination = %destination,
        budget,
        hotels = hotels.len(),
        activities = activities.len(),
        "trip planned"
    );

    TripPlan {
        destination,
        budget,
        hotels,
        activities,
        summary,
    }
}
