// src/services/booking_service.rs

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, PgConnection, PgPool, Postgres};

use crate::{
    common::error::AppError,
    db::{BookingRepository, CatalogRepository, RoomRepository},
    models::{
        booking::{Booking, BookingService, BookingStatus},
        room::Room,
    },
    services::pricing,
};

/// What a client asks for when booking a room.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub guest_id: i32,
    pub room_id: i32,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub service_ids: Vec<i32>,
}

#[derive(Clone)]
pub struct BookingsService {
    repo: BookingRepository,
    rooms: RoomRepository,
    catalog: CatalogRepository,
}

impl BookingsService {
    pub fn new(repo: BookingRepository, rooms: RoomRepository, catalog: CatalogRepository) -> Self {
        Self { repo, rooms, catalog }
    }

    pub async fn list_bookings<'e, E>(&self, executor: E) -> Result<Vec<Booking>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor).await
    }

    pub async fn get_booking<'e, E>(&self, executor: E, id: i32) -> Result<Booking, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .find(executor, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found.".to_string()))
    }

    pub async fn list_booking_services<'e, E>(&self, executor: E, booking_id: i32) -> Result<Vec<BookingService>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_services(executor, booking_id).await
    }

    // =========================================================================
    //  CREATION
    // =========================================================================

    /// Dates and room are checked up front, then everything is written in one
    /// transaction. Any failure inside rolls the whole booking back and
    /// surfaces as a generic error.
    pub async fn create_booking(&self, pool: &PgPool, request: BookingRequest) -> Result<Booking, AppError> {
        if !pricing::validate_stay(request.check_in, request.check_out) {
            return Err(AppError::BadRequest("Check-out must be after check-in.".to_string()));
        }

        let room = self
            .rooms
            .find_room(pool, request.room_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Room not found.".to_string()))?;

        let mut tx = pool.begin().await?;

        match self.write_booking(&mut *tx, &room, &request).await {
            Ok(booking) => {
                tx.commit().await?;
                tracing::info!(
                    booking_id = booking.id,
                    room_id = booking.room_id,
                    total = %booking.total_price,
                    "Booking created"
                );
                Ok(booking)
            }
            Err(e) => {
                tx.rollback().await?;
                tracing::error!(room_id = request.room_id, guest_id = request.guest_id, "Booking rolled back: {}", e);
                Err(AppError::InternalServerError(anyhow::anyhow!("booking creation failed: {e}")))
            }
        }
    }

    async fn write_booking(
        &self,
        conn: &mut PgConnection,
        room: &Room,
        request: &BookingRequest,
    ) -> Result<Booking, AppError> {
        let room_total = match self.rooms.find_room_type(&mut *conn, room.room_type_id).await? {
            Some(room_type) => pricing::room_price(room_type.base_price, request.check_in, request.check_out),
            None => Decimal::ZERO,
        };

        let now = Utc::now().naive_utc();
        let mut booking = Booking {
            id: 0,
            guest_id: request.guest_id,
            room_id: request.room_id,
            check_in: request.check_in,
            check_out: request.check_out,
            total_price: room_total,
            status: BookingStatus::Confirmed,
            created_at: now,
        };
        self.repo.save(&mut *conn, &mut booking).await?;

        // Unknown service ids are skipped; each picked service keeps its current price
        let mut service_prices = Vec::with_capacity(request.service_ids.len());
        for &service_id in &request.service_ids {
            let Some(service) = self.catalog.find(&mut *conn, service_id).await? else {
                tracing::debug!(service_id, "Skipping unknown service");
                continue;
            };

            let mut line = BookingService {
                id: 0,
                booking_id: booking.id,
                service_id: service.id,
                sub_total: service.price,
                service_date: now,
            };
            self.repo.add_service(&mut *conn, &mut line).await?;
            service_prices.push(service.price);
        }

        booking.total_price = pricing::total_price(room_total, &service_prices);
        self.repo.save(&mut *conn, &mut booking).await?;

        Ok(booking)
    }

    // =========================================================================
    //  DELETION
    // =========================================================================

    pub async fn delete_booking<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        match self.repo.delete(executor, id).await? {
            0 => Err(AppError::NotFound("Booking not found.".to_string())),
            _ => Ok(()),
        }
    }
}
