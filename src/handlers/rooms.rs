// src/handlers/rooms.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::{error::AppError, validation::non_negative},
    config::AppState,
    models::room::{Room, RoomType},
};

// =============================================================================
//  ROOMS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomPayload {
    #[validate(length(min = 1, max = 20, message = "Room number must have 1 to 20 characters"))]
    #[schema(example = "101")]
    pub room_number: String,

    #[validate(range(min = 1, message = "A room type is required"))]
    #[schema(example = 1)]
    pub room_type_id: i32,

    #[schema(value_type = Option<String>, format = DateTime)]
    pub last_maintenance: Option<NaiveDateTime>,
}

// GET /api/rooms
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = "Rooms",
    responses((status = 200, description = "All rooms", body = Vec<Room>))
)]
pub async fn list_rooms(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = app_state.room_service.list_rooms(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(rooms)))
}

// GET /api/rooms/{id}
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 200, description = "The room", body = Room),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = app_state.room_service.get_room(&app_state.db_pool, id).await?;
    Ok((StatusCode::OK, Json(room)))
}

// POST /api/rooms
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = "Rooms",
    request_body = CreateRoomPayload,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 400, description = "Invalid data or unknown room type"),
        (status = 409, description = "Room number already exists")
    )
)]
pub async fn create_room(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateRoomPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let room = Room {
        id: 0,
        room_number: payload.room_number.trim().to_string(),
        room_type_id: payload.room_type_id,
        last_maintenance: payload.last_maintenance,
    };
    let room = app_state.room_service.create_room(&app_state.db_pool, room).await?;

    Ok((StatusCode::CREATED, Json(room)))
}

// DELETE /api/rooms/{id}
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room has bookings")
    )
)]
pub async fn delete_room(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.room_service.delete_room(&app_state.db_pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ROOM TYPES
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomTypePayload {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[schema(example = "Deluxe Double")]
    pub name: String,

    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = f64, example = 100.0)]
    pub base_price: Decimal,

    #[serde(default)]
    pub description: String,
}

// GET /api/room-types
#[utoipa::path(
    get,
    path = "/api/room-types",
    tag = "Rooms",
    responses((status = 200, description = "All room types", body = Vec<RoomType>))
)]
pub async fn list_room_types(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let types = app_state.room_service.list_room_types(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(types)))
}

// POST /api/room-types
#[utoipa::path(
    post,
    path = "/api/room-types",
    tag = "Rooms",
    request_body = CreateRoomTypePayload,
    responses(
        (status = 201, description = "Room type created", body = RoomType),
        (status = 400, description = "Invalid data")
    )
)]
pub async fn create_room_type(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateRoomTypePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let room_type = RoomType {
        id: 0,
        name: payload.name.trim().to_string(),
        base_price: payload.base_price,
        description: payload.description,
    };
    let room_type = app_state
        .room_service
        .create_room_type(&app_state.db_pool, room_type)
        .await?;

    Ok((StatusCode::CREATED, Json(room_type)))
}
