// src/db/booking_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    db::active_record,
    models::booking::{Booking, BookingService},
};

#[derive(Clone, Default)]
pub struct BookingRepository;

impl BookingRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Booking>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::all(executor).await?)
    }

    pub async fn find<'e, E>(&self, executor: E, id: i32) -> Result<Option<Booking>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::find(executor, id).await?)
    }

    pub async fn list_for_guest<'e, E>(&self, executor: E, guest_id: i32) -> Result<Vec<Booking>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::find_where(executor, "guest_id", guest_id).await?)
    }

    pub async fn save<'e, E>(&self, executor: E, booking: &mut Booking) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::save(executor, booking).await?)
    }

    pub async fn add_service<'e, E>(&self, executor: E, line: &mut BookingService) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::insert(executor, line).await?)
    }

    pub async fn list_services<'e, E>(&self, executor: E, booking_id: i32) -> Result<Vec<BookingService>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::find_where(executor, "booking_id", booking_id).await?)
    }

    // booking_services rows follow through ON DELETE CASCADE
    pub async fn delete<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::delete::<Booking, _>(executor, id).await?)
    }
}
