use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::{Roster, RosterLookupError};
use super::domain::{QueryState, StatusFilter, VehicleId};

/// Query string accepted by the vehicle list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl SearchParams {
    pub fn into_query_state(self) -> Result<QueryState, RosterLookupError> {
        let status = match self.status {
            Some(raw) => {
                StatusFilter::parse(&raw).ok_or(RosterLookupError::UnknownStatus(raw))?
            }
            None => StatusFilter::All,
        };
        Ok(QueryState::new(self.q.unwrap_or_default(), status))
    }
}

/// Router builder exposing the vehicle list, detail, and dashboard endpoints.
pub fn roster_router(roster: Arc<Roster>) -> Router {
    Router::new()
        .route("/api/v1/vehicles", get(search_handler))
        .route("/api/v1/vehicles/:vehicle_id", get(detail_handler))
        .route("/api/v1/dashboard", get(dashboard_handler))
        .with_state(roster)
}

pub(crate) async fn search_handler(
    State(roster): State<Arc<Roster>>,
    Query(params): Query<SearchParams>,
) -> Response {
    match params.into_query_state() {
        Ok(state) => (StatusCode::OK, axum::Json(roster.search(&state))).into_response(),
        Err(error) => lookup_error_response(error),
    }
}

pub(crate) async fn detail_handler(
    State(roster): State<Arc<Roster>>,
    Path(vehicle_id): Path<String>,
) -> Response {
    match roster.detail(&VehicleId(vehicle_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => lookup_error_response(error),
    }
}

pub(crate) async fn dashboard_handler(State(roster): State<Arc<Roster>>) -> Response {
    (StatusCode::OK, axum::Json(roster.dashboard())).into_response()
}

fn lookup_error_response(error: RosterLookupError) -> Response {
    let status = match error {
        RosterLookupError::VehicleNotFound(_) => StatusCode::NOT_FOUND,
        RosterLookupError::UnknownStatus(_) => StatusCode::BAD_REQUEST,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
