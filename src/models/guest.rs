// src/models/guest.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::db::active_record::{PgQuery, Record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "guest_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuestType {
    #[default]
    Regular,
    Vip,
    Corporate,
}

// `is_active` is stored and returned but no query filters on it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ana")]
    pub first_name: String,
    #[schema(example = "Souza")]
    pub last_name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "+55 11 99999-8888")]
    pub phone: String,
    #[schema(value_type = Option<String>, format = Date, example = "1990-05-20")]
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: bool,
    pub guest_type: GuestType,
    pub loyalty_points: i32,
}

impl Record for Guest {
    const TABLE: &'static str = "guests";
    const COLUMNS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "email",
        "phone",
        "date_of_birth",
        "is_active",
        "guest_type",
        "loyalty_points",
    ];

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(&self.email)
            .bind(&self.phone)
            .bind(self.date_of_birth)
            .bind(self.is_active)
            .bind(self.guest_type)
            .bind(self.loyalty_points)
    }
}

/// One entry of a guest import file. PascalCase keys are accepted too.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestImportRecord {
    #[serde(default, alias = "FirstName")]
    pub first_name: String,
    #[serde(default, alias = "LastName")]
    pub last_name: String,
    #[serde(default, alias = "Email")]
    pub email: String,
    #[serde(default, alias = "Phone")]
    pub phone: String,
    #[serde(default, alias = "DateOfBirth")]
    #[schema(value_type = Option<String>, format = Date)]
    pub date_of_birth: Option<NaiveDate>,
}

impl From<GuestImportRecord> for Guest {
    fn from(record: GuestImportRecord) -> Self {
        Self {
            id: 0,
            first_name: record.first_name.trim().to_string(),
            last_name: record.last_name.trim().to_string(),
            email: record.email,
            phone: record.phone,
            date_of_birth: record.date_of_birth,
            is_active: true,
            guest_type: GuestType::Regular,
            loyalty_points: 0,
        }
    }
}
