// src/handlers/telemetry.rs

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    common::error::AppError,
    config::AppState,
    models::telemetry::{Summary, TimelineEvent, TimelineQuery, TimeseriesPoint, TimeseriesQuery},
};

// GET /api/summary
#[utoipa::path(
    get,
    path = "/api/summary",
    tag = "ChronoLog",
    responses((status = 200, description = "Error, warning and latency totals", body = Summary))
)]
pub async fn summary(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.telemetry_service.summary(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/timeline
#[utoipa::path(
    get,
    path = "/api/timeline",
    tag = "ChronoLog",
    params(TimelineQuery),
    responses((status = 200, description = "One page of timeline events", body = Vec<TimelineEvent>))
)]
pub async fn timeline(
    State(app_state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = app_state
        .telemetry_service
        .timeline(&app_state.db_pool, &query)
        .await?;
    Ok((StatusCode::OK, Json(events)))
}

// GET /api/timeseries
#[utoipa::path(
    get,
    path = "/api/timeseries",
    tag = "ChronoLog",
    params(TimeseriesQuery),
    responses(
        (status = 200, description = "Latest points of a metric, oldest first", body = Vec<TimeseriesPoint>),
        (status = 400, description = "Metric parameter is required")
    )
)]
pub async fn timeseries(
    State(app_state): State<AppState>,
    Query(query): Query<TimeseriesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let points = app_state
        .telemetry_service
        .timeseries(&app_state.db_pool, &query)
        .await?;
    Ok((StatusCode::OK, Json(points)))
}

// GET /api/messages
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "ChronoLog",
    responses((status = 200, description = "Message templates keyed by id", body = BTreeMap<String, String>))
)]
pub async fn messages(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let messages = app_state.telemetry_service.messages(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(messages)))
}

// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "ChronoLog",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
