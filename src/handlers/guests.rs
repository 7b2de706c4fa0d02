// src/handlers/guests.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::guest::{Guest, GuestType},
};

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestPayload {
    /// Must repeat the path id on updates; ignored on create.
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    #[schema(example = "Ana")]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    #[schema(example = "Souza")]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    #[schema(example = "ana@example.com")]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub phone: String,

    #[schema(value_type = Option<String>, format = Date, example = "1990-05-20")]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default)]
    pub guest_type: GuestType,

    #[serde(default)]
    #[validate(range(min = 0, message = "Loyalty points cannot be negative"))]
    pub loyalty_points: i32,
}

impl From<GuestPayload> for Guest {
    fn from(payload: GuestPayload) -> Self {
        Self {
            id: payload.id,
            first_name: payload.first_name.trim().to_string(),
            last_name: payload.last_name.trim().to_string(),
            email: payload.email.trim().to_string(),
            phone: payload.phone,
            date_of_birth: payload.date_of_birth,
            is_active: payload.is_active,
            guest_type: payload.guest_type,
            loyalty_points: payload.loyalty_points,
        }
    }
}

// GET /api/guests
#[utoipa::path(
    get,
    path = "/api/guests",
    tag = "Guests",
    responses(
        (status = 200, description = "All guests", body = Vec<Guest>)
    )
)]
pub async fn list_guests(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let guests = app_state.guest_service.list_guests(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(guests)))
}

// GET /api/guests/{id}
#[utoipa::path(
    get,
    path = "/api/guests/{id}",
    tag = "Guests",
    params(("id" = i32, Path, description = "Guest id")),
    responses(
        (status = 200, description = "The guest", body = Guest),
        (status = 404, description = "Guest not found")
    )
)]
pub async fn get_guest(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guest = app_state.guest_service.get_guest(&app_state.db_pool, id).await?;
    Ok((StatusCode::OK, Json(guest)))
}

// POST /api/guests
#[utoipa::path(
    post,
    path = "/api/guests",
    tag = "Guests",
    request_body = GuestPayload,
    responses(
        (status = 201, description = "Guest created", body = Guest),
        (status = 400, description = "Invalid data")
    )
)]
pub async fn create_guest(
    State(app_state): State<AppState>,
    Json(payload): Json<GuestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let guest = app_state
        .guest_service
        .create_guest(&app_state.db_pool, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(guest)))
}

// PUT /api/guests/{id}
#[utoipa::path(
    put,
    path = "/api/guests/{id}",
    tag = "Guests",
    params(("id" = i32, Path, description = "Guest id")),
    request_body = GuestPayload,
    responses(
        (status = 204, description = "Guest updated"),
        (status = 400, description = "Invalid data or id mismatch"),
        (status = 404, description = "Guest not found")
    )
)]
pub async fn update_guest(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<GuestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .guest_service
        .update_guest(&app_state.db_pool, id, payload.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/guests/{id}
#[utoipa::path(
    delete,
    path = "/api/guests/{id}",
    tag = "Guests",
    params(("id" = i32, Path, description = "Guest id")),
    responses(
        (status = 204, description = "Guest and their bookings deleted"),
        (status = 404, description = "Guest not found")
    )
)]
pub async fn delete_guest(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.guest_service.delete_guest(&app_state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
