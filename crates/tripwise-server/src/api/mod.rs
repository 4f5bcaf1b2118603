mod activities;
mod frontend;
mod hotels;
mod plan_trip;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tripwise_summary::SummaryClient;
use tripwise_travel::TravelService;

use crate::middleware::{request_id, RequestId};

const DEFAULT_LIMIT: i64 = 5;
const MAX_LIMIT: i64 = 30;

#[derive(Clone)]
pub struct AppState {
    pub travel: Arc<TravelService>,
    pub summary: Arc<SummaryClient>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    live_travel: bool,
    live_summary: bool,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Result count for a request: defaults to 5, clamped to `1..=30`.
pub(super) fn normalize_limit(limit: Option<i64>) -> usize {
    let clamped = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    usize::try_from(clamped).unwrap_or(1)
}

/// Trimmed destination, or a `validation_error` when missing or blank.
pub(super) fn require_destination(
    request_id: &str,
    destination: Option<&str>,
) -> Result<String, ApiError> {
    destination
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::new(request_id, "validation_error", "destination is required"))
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/hotels", get(hotels::list_hotels))
        .route("/api/v1/activities", get(activities::list_activities))
        .route("/api/v1/plan-trip", post(plan_trip::plan_trip))
        .route("/health", get(frontend::health))
        .route("/hotels", get(frontend::hotels))
        .route("/activities", get(frontend::activities))
        .route("/plan_trip", post(frontend::plan_trip))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            live_travel: state.travel.is_live(),
            live_summary: state.summary.is_enabled(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use tripwise_summary::{SummaryClient, SummarySettings};
    use tripwise_travel::TravelService;

    use super::{build_app, AppState};

    /// App wired to the static tables and the default summary.
    pub(crate) fn offline_app() -> axum::Router {
        let summary = SummaryClient::new(&SummarySettings {
            api_key: None,
            base_url: "http://127.0.0.1:9".to_string(),
            model: "gpt-4o-mini".to_string(),
            request_timeout_secs: 1,
        })
        .expect("summary client");
        build_app(AppState {
            travel: Arc::new(TravelService::fallback_only()),
            summary: Arc::new(summary),
        })
    }

    pub(crate) async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = offline_app().oneshot(request).await.expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json = serde_json::from_slice(&body).expect("json parse");
        (status, json)
    }

    pub(crate) async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        send(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{get, offline_app};
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[test]
    fn normalize_limit_applies_defaults_and_bounds() {
        assert_eq!(normalize_limit(None), 5);
        assert_eq!(normalize_limit(Some(0)), 1);
        assert_eq!(normalize_limit(Some(-4)), 1);
        assert_eq!(normalize_limit(Some(1_000)), 30);
        assert_eq!(normalize_limit(Some(12)), 12);
    }

    #[test]
    fn require_destination_trims_and_rejects_blank() {
        assert_eq!(require_destination("r", Some("  Goa ")).unwrap(), "Goa");
        let err = require_destination("r", Some("   ")).unwrap_err();
        assert_eq!(err.error.code, "validation_error");
        assert!(require_destination("r", None).is_err());
    }

    #[test]
    fn api_error_validation_error_maps_to_bad_request() {
        let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_unknown_code_maps_to_internal_error() {
        let response = ApiError::new("req-1", "internal_error", "boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_reports_ok_and_offline_integrations() {
        let (status, json) = get("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["live_travel"], false);
        assert_eq!(json["data"]["live_summary"], false);
        assert!(json["meta"]["request_id"].as_str().is_some());
        assert!(json["meta"]["timestamp"].as_str().is_some());
    }

    #[tokio::test]
    async fn request_id_header_is_echoed() {
        let response = offline_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header("x-request-id", "trip-42")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok()),
            Some("trip-42")
        );
    }

    #[tokio::test]
    async fn request_id_is_generated_when_absent() {
        let response = offline_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        let id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .expect("request id header");
        assert_eq!(id.len(), 36);
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let response = offline_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
