// src/models/booking.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::db::active_record::{PgQuery, Record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "booking_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub guest_id: i32,
    pub room_id: i32,
    #[schema(value_type = String, format = DateTime, example = "2025-03-01T14:00:00")]
    pub check_in: NaiveDateTime,
    #[schema(value_type = String, format = DateTime, example = "2025-03-03T11:00:00")]
    pub check_out: NaiveDateTime,
    #[schema(value_type = f64, example = 275.0)]
    pub total_price: Decimal,
    pub status: BookingStatus,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: NaiveDateTime,
}

impl Record for Booking {
    const TABLE: &'static str = "bookings";
    const COLUMNS: &'static [&'static str] = &[
        "guest_id",
        "room_id",
        "check_in",
        "check_out",
        "total_price",
        "status",
        "created_at",
    ];

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.guest_id)
            .bind(self.room_id)
            .bind(self.check_in)
            .bind(self.check_out)
            .bind(self.total_price)
            .bind(self.status)
            .bind(self.created_at)
    }
}

/// One service picked for one booking. `sub_total` is the catalog price at
/// booking time, later price changes don't touch it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingService {
    pub id: i32,
    pub booking_id: i32,
    pub service_id: i32,
    #[schema(value_type = f64)]
    pub sub_total: Decimal,
    #[schema(value_type = String, format = DateTime)]
    pub service_date: NaiveDateTime,
}

impl Record for BookingService {
    const TABLE: &'static str = "booking_services";
    const COLUMNS: &'static [&'static str] = &["booking_id", "service_id", "sub_total", "service_date"];

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.booking_id)
            .bind(self.service_id)
            .bind(self.sub_total)
            .bind(self.service_date)
    }
}
