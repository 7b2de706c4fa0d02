// src/models/room.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::db::active_record::{PgQuery, Record};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    #[serde(default)]
    pub id: i32,
    #[schema(example = "Deluxe Double")]
    pub name: String,
    #[schema(value_type = f64, example = 100.0)]
    pub base_price: Decimal,
    pub description: String,
}

impl Record for RoomType {
    const TABLE: &'static str = "room_types";
    const COLUMNS: &'static [&'static str] = &["name", "base_price", "description"];

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.name)
            .bind(self.base_price)
            .bind(&self.description)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(default)]
    pub id: i32,
    #[schema(example = "101")]
    pub room_number: String,
    #[schema(example = 1)]
    pub room_type_id: i32,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub last_maintenance: Option<NaiveDateTime>,
}

impl Record for Room {
    const TABLE: &'static str = "rooms";
    const COLUMNS: &'static [&'static str] = &["room_number", "room_type_id", "last_maintenance"];

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.room_number)
            .bind(self.room_type_id)
            .bind(self.last_maintenance)
    }
}
