// src/handlers/catalog.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::{error::AppError, validation::non_negative},
    config::AppState,
    models::catalog::Service,
};

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicePayload {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[schema(example = "Breakfast")]
    pub name: String,

    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = f64, example = 25.0)]
    pub price: Decimal,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

// GET /api/services
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Services",
    responses((status = 200, description = "Service catalog", body = Vec<Service>))
)]
pub async fn list_services(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let services = app_state.catalog_service.list_services(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(services)))
}

// POST /api/services
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "Services",
    request_body = CreateServicePayload,
    responses(
        (status = 201, description = "Service created", body = Service),
        (status = 400, description = "Invalid data")
    )
)]
pub async fn create_service(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = Service {
        id: 0,
        name: payload.name.trim().to_string(),
        price: payload.price,
        is_active: payload.is_active,
    };
    let service = app_state
        .catalog_service
        .create_service(&app_state.db_pool, service)
        .await?;

    Ok((StatusCode::CREATED, Json(service)))
}
