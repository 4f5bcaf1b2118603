//! Unversioned routes consumed by the web frontend.
//!
//! Bodies are bare JSON (a list, or a top-level trip plan) and failures are
//! `{"error": "<message>"}` with status 400.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tripwise_core::{Activity, Hotel};

use super::plan_trip::{assemble_plan, PlanTripRequest, TripPlan};
use super::{normalize_limit, AppState};

#[derive(Debug, Serialize)]
pub(super) struct FrontendError {
    error: String,
}

impl FrontendError {
    fn bad_request(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

impl IntoResponse for FrontendError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// `limit` stays a string so a non-numeric value falls back to the default.
#[derive(Debug, Deserialize)]
pub(super) struct PlacesQuery {
    pub destination: Option<String>,
    pub limit: Option<String>,
}

impl PlacesQuery {
    fn destination(&self) -> Result<&str, FrontendError> {
        self.destination
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| FrontendError::bad_request("Missing destination parameter"))
    }

    fn limit(&self) -> usize {
        normalize_limit(self.limit.as_deref().and_then(|l| l.trim().parse().ok()))
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(super) struct Health {
    status: &'static str,
}

pub(super) async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub(super) async fn hotels(
    State(state): State<AppState>,
    Query(query): Query<PlacesQuery>,
) -> Result<Json<Vec<Hotel>>, FrontendError> {
    let destination = query.destination()?;
    Ok(Json(state.travel.get_hotels(destination, query.limit()).await))
}

pub(super) async fn activities(
    State(state): State<AppState>,
    Query(query): Query<PlacesQuery>,
) -> Result<Json<Vec<Activity>>, FrontendError> {
    let destination = query.destination()?;
    Ok(Json(
        state
            .travel
            .get_activities(destination, query.limit())
            .await,
    ))
}

pub(super) async fn plan_trip(
    State(state): State<AppState>,
    body: Result<Json<PlanTripRequest>, JsonRejection>,
) -> Result<Json<TripPlan>, FrontendError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable plan_trip body");
        FrontendError::bad_request("Missing request body")
    })?;

    let destination = body
        .destination
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| FrontendError::bad_request("Missing destination parameter"))?
        .to_string();
    let budget = body
        .budget
        .ok_or_else(|| FrontendError::bad_request("Missing budget parameter"))?;

    let plan = assemble_plan(&state, destination, budget, normalize_limit(body.limit)).await;
    Ok(Json(plan))
}
