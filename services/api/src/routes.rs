use crate::infra::{AppState, RosterSource};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Local};
use gate_access::error::AppError;
use gate_access::roster::router::SearchParams;
use gate_access::roster::{
    roster_router, DashboardView, Roster, RosterImporter, SearchResultsView,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct RosterPreviewRequest {
    pub(crate) roster_csv: String,
    #[serde(default)]
    pub(crate) query: Option<String>,
    #[serde(default)]
    pub(crate) status: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RosterPreviewResponse {
    pub(crate) generated_at: DateTime<Local>,
    pub(crate) data_source: RosterSource,
    pub(crate) dashboard: DashboardView,
    pub(crate) results: SearchResultsView,
}

pub(crate) fn with_roster_routes(roster: Arc<Roster>) -> axum::Router {
    roster_router(roster)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/roster/preview",
            axum::routing::post(roster_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Runs search and dashboard aggregation over an uploaded roster export without replacing
/// the roster the service was started with.
pub(crate) async fn roster_preview_endpoint(
    Json(payload): Json<RosterPreviewRequest>,
) -> Result<Json<RosterPreviewResponse>, AppError> {
    let RosterPreviewRequest {
        roster_csv,
        query,
        status,
    } = payload;

    let state = SearchParams { q: query, status }.into_query_state()?;
    let reader = Cursor::new(roster_csv.into_bytes());
    let roster = RosterImporter::from_reader(reader)?;

    Ok(Json(RosterPreviewResponse {
        generated_at: Local::now(),
        data_source: RosterSource::Upload,
        dashboard: roster.dashboard(),
        results: roster.search(&state),
    }))
}
