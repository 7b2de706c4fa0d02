// src/models/import.rs

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ImportSummary {
    #[schema(example = 12)]
    pub count: usize,
    #[schema(example = "Import successful")]
    pub message: String,
}

impl ImportSummary {
    pub fn successful(count: usize) -> Self {
        Self {
            count,
            message: "Import successful".to_string(),
        }
    }
}
