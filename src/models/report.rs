// src/models/report.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::db::active_record::View;
use crate::models::booking::BookingStatus;

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestBookingReport {
    pub booking_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub room_number: String,
    #[schema(value_type = String, format = DateTime)]
    pub check_in: NaiveDateTime,
    #[schema(value_type = String, format = DateTime)]
    pub check_out: NaiveDateTime,
    pub status: BookingStatus,
}

impl View for GuestBookingReport {
    const VIEW: &'static str = "v_guest_bookings";
    const ORDER_BY: &'static str = "check_in DESC, booking_id";
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomAvailabilityReport {
    pub room_id: i32,
    pub room_number: String,
    pub room_type: String,
    #[schema(value_type = f64)]
    pub base_price: Decimal,
}

impl View for RoomAvailabilityReport {
    const VIEW: &'static str = "v_room_availability";
    const ORDER_BY: &'static str = "room_number";
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsageStatsReport {
    pub service_name: String,
    pub usage_count: i32,
    #[schema(value_type = f64)]
    pub total_revenue: Decimal,
}

impl View for ServiceUsageStatsReport {
    const VIEW: &'static str = "v_service_usage_stats";
    const ORDER_BY: &'static str = "usage_count DESC, service_name";
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueByRoomTypeReport {
    pub room_type_name: String,
    pub total_bookings: i32,
    #[schema(value_type = f64)]
    pub total_revenue: Decimal,
}

impl View for RevenueByRoomTypeReport {
    const VIEW: &'static str = "v_revenue_by_room_type";
    const ORDER_BY: &'static str = "total_revenue DESC, room_type_name";
}
