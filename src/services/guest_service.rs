// src/services/guest_service.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    db::{BookingRepository, GuestRepository},
    models::guest::{Guest, GuestImportRecord},
    services::import::import_failure,
};

#[derive(Clone)]
pub struct GuestService {
    repo: GuestRepository,
    bookings: BookingRepository,
}

impl GuestService {
    pub fn new(repo: GuestRepository, bookings: BookingRepository) -> Self {
        Self { repo, bookings }
    }

    pub async fn list_guests<'e, E>(&self, executor: E) -> Result<Vec<Guest>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor).await
    }

    pub async fn get_guest<'e, E>(&self, executor: E, id: i32) -> Result<Guest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .find(executor, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found.".to_string()))
    }

    pub async fn create_guest<'e, E>(&self, executor: E, mut guest: Guest) -> Result<Guest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        guest.id = 0;
        self.repo.save(executor, &mut guest).await?;
        tracing::info!(guest_id = guest.id, "Guest created");
        Ok(guest)
    }

    /// The id in the path must match the body and the guest must exist.
    pub async fn update_guest(&self, pool: &PgPool, id: i32, mut guest: Guest) -> Result<Guest, AppError> {
        if guest.id != id {
            return Err(AppError::BadRequest("Guest id does not match the URL.".to_string()));
        }

        if self.repo.find(pool, id).await?.is_none() {
            return Err(AppError::NotFound("Guest not found.".to_string()));
        }

        self.repo.save(pool, &mut guest).await?;
        Ok(guest)
    }

    /// Removes the guest and every booking of theirs, all or nothing.
    pub async fn delete_guest(&self, pool: &PgPool, id: i32) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;

        if self.repo.find(&mut *tx, id).await?.is_none() {
            return Err(AppError::NotFound("Guest not found.".to_string()));
        }

        let bookings = self.bookings.list_for_guest(&mut *tx, id).await?;
        for booking in &bookings {
            self.bookings.delete(&mut *tx, booking.id).await?;
        }

        self.repo.delete(&mut *tx, id).await?;
        tx.commit().await?;

        tracing::info!(guest_id = id, bookings = bookings.len(), "Guest deleted with their bookings");
        Ok(())
    }

    /// Every record needs a first and last name; the batch is inserted in a
    /// single transaction.
    pub async fn import_guests(&self, pool: &PgPool, records: Vec<GuestImportRecord>) -> Result<usize, AppError> {
        if records
            .iter()
            .any(|r| r.first_name.trim().is_empty() || r.last_name.trim().is_empty())
        {
            return Err(AppError::BadRequest(
                "Invalid guest data: firstName and lastName are required.".to_string(),
            ));
        }

        let mut tx = pool.begin().await?;
        let count = records.len();

        for record in records {
            let mut guest = Guest::from(record);
            if let Err(e) = self.repo.save(&mut *tx, &mut guest).await {
                tx.rollback().await?;
                return Err(import_failure(e));
            }
        }

        tx.commit().await.map_err(|e| import_failure(e.into()))?;
        tracing::info!(count, "Guests imported");
        Ok(count)
    }
}
