// src/handlers/bookings.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::booking::{Booking, BookingService},
    services::booking_service::BookingRequest,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingPayload {
    #[validate(range(min = 1, message = "A guest is required"))]
    #[schema(example = 1)]
    pub guest_id: i32,

    #[validate(range(min = 1, message = "A room is required"))]
    #[schema(example = 1)]
    pub room_id: i32,

    #[schema(value_type = String, format = DateTime, example = "2025-03-01T14:00:00")]
    pub check_in: NaiveDateTime,

    #[schema(value_type = String, format = DateTime, example = "2025-03-03T11:00:00")]
    pub check_out: NaiveDateTime,

    #[serde(default)]
    #[schema(example = json!([1, 2]))]
    pub service_ids: Vec<i32>,
}

impl From<CreateBookingPayload> for BookingRequest {
    fn from(payload: CreateBookingPayload) -> Self {
        Self {
            guest_id: payload.guest_id,
            room_id: payload.room_id,
            check_in: payload.check_in,
            check_out: payload.check_out,
            service_ids: payload.service_ids,
        }
    }
}

/// A booking with the services charged to it.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    #[serde(flatten)]
    pub booking: Booking,
    pub services: Vec<BookingService>,
}

// GET /api/bookings
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    responses((status = 200, description = "All bookings", body = Vec<Booking>))
)]
pub async fn list_bookings(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bookings = app_state.booking_service.list_bookings(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(bookings)))
}

// GET /api/bookings/{id}
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "The booking and its services", body = BookingDetails),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let booking = app_state.booking_service.get_booking(&app_state.db_pool, id).await?;
    let services = app_state
        .booking_service
        .list_booking_services(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(BookingDetails { booking, services })))
}

// POST /api/bookings
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    request_body = CreateBookingPayload,
    responses(
        (status = 201, description = "Booking confirmed", body = Booking),
        (status = 400, description = "Bad dates or unknown room"),
        (status = 500, description = "Booking rolled back")
    )
)]
pub async fn create_booking(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateBookingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let booking = app_state
        .booking_service
        .create_booking(&app_state.db_pool, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

// DELETE /api/bookings/{id}
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn delete_booking(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.booking_service.delete_booking(&app_state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
