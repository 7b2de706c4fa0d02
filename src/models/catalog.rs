// src/models/catalog.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::db::active_record::{PgQuery, Record};

/// An extra a guest can add to a booking (breakfast, parking, spa...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub id: i32,
    #[schema(example = "Breakfast")]
    pub name: String,
    #[schema(value_type = f64, example = 25.0)]
    pub price: Decimal,
    pub is_active: bool,
}

impl Record for Service {
    const TABLE: &'static str = "services";
    const COLUMNS: &'static [&'static str] = &["name", "price", "is_active"];

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(&self.name).bind(self.price).bind(self.is_active)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceImportRecord {
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(alias = "Price")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

impl From<ServiceImportRecord> for Service {
    fn from(record: ServiceImportRecord) -> Self {
        Self {
            id: 0,
            name: record.name.trim().to_string(),
            price: record.price,
            is_active: true,
        }
    }
}
