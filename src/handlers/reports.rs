// src/handlers/reports.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::report::{
        GuestBookingReport, RevenueByRoomTypeReport, RoomAvailabilityReport, ServiceUsageStatsReport,
    },
};

// GET /api/reports/guest-bookings
#[utoipa::path(
    get,
    path = "/api/reports/guest-bookings",
    tag = "Reports",
    responses((status = 200, description = "Bookings joined with guest and room", body = Vec<GuestBookingReport>))
)]
pub async fn guest_bookings(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = app_state.report_service.guest_bookings(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(rows)))
}

// GET /api/reports/availability
#[utoipa::path(
    get,
    path = "/api/reports/availability",
    tag = "Reports",
    responses((status = 200, description = "Rooms with their type and price", body = Vec<RoomAvailabilityReport>))
)]
pub async fn room_availability(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = app_state.report_service.room_availability(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(rows)))
}

// GET /api/reports/service-stats
#[utoipa::path(
    get,
    path = "/api/reports/service-stats",
    tag = "Reports",
    responses((status = 200, description = "Usage and revenue per service", body = Vec<ServiceUsageStatsReport>))
)]
pub async fn service_stats(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = app_state.report_service.service_usage(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(rows)))
}

// GET /api/reports/revenue-by-room-type
#[utoipa::path(
    get,
    path = "/api/reports/revenue-by-room-type",
    tag = "Reports",
    responses((status = 200, description = "Bookings and revenue per room type", body = Vec<RevenueByRoomTypeReport>))
)]
pub async fn revenue_by_room_type(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = app_state.report_service.revenue_by_room_type(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(rows)))
}
