// src/handlers/imports.rs

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{catalog::ServiceImportRecord, guest::GuestImportRecord, import::ImportSummary},
    services::import::parse_json_array,
};

const FILE_FIELD: &str = "file";

/// Bytes of the `file` part of a multipart upload.
async fn read_file_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid upload: {e}")))?
    {
        if field.name() == Some(FILE_FIELD) {
            return field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Invalid upload: {e}")));
        }
    }

    Err(AppError::BadRequest("No file uploaded.".to_string()))
}

// POST /api/import/guests
#[utoipa::path(
    post,
    path = "/api/import/guests",
    tag = "Import",
    request_body(content_type = "multipart/form-data", description = "Field `file`: JSON array of guests"),
    responses(
        (status = 200, description = "All guests imported", body = ImportSummary),
        (status = 400, description = "Empty file, invalid JSON or invalid guest")
    )
)]
pub async fn import_guests(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let bytes = read_file_field(multipart).await?;
    let records: Vec<GuestImportRecord> = parse_json_array(&bytes, "guests")?;

    let count = app_state
        .guest_service
        .import_guests(&app_state.db_pool, records)
        .await?;

    Ok((StatusCode::OK, Json(ImportSummary::successful(count))))
}

// POST /api/import/services
#[utoipa::path(
    post,
    path = "/api/import/services",
    tag = "Import",
    request_body(content_type = "multipart/form-data", description = "Field `file`: JSON array of services"),
    responses(
        (status = 200, description = "All services imported", body = ImportSummary),
        (status = 400, description = "Empty file, invalid JSON or invalid service")
    )
)]
pub async fn import_services(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let bytes = read_file_field(multipart).await?;
    let records: Vec<ServiceImportRecord> = parse_json_array(&bytes, "services")?;

    let count = app_state
        .catalog_service
        .import_services(&app_state.db_pool, records)
        .await?;

    Ok((StatusCode::OK, Json(ImportSummary::successful(count))))
}
