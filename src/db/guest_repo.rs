// src/db/guest_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    db::active_record,
    models::guest::Guest,
};

#[derive(Clone, Default)]
pub struct GuestRepository;

impl GuestRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Guest>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::all(executor).await?)
    }

    pub async fn find<'e, E>(&self, executor: E, id: i32) -> Result<Option<Guest>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::find(executor, id).await?)
    }

    /// Insert on `id == 0`, update otherwise.
    pub async fn save<'e, E>(&self, executor: E, guest: &mut Guest) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::save(executor, guest).await?)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::delete::<Guest, _>(executor, id).await?)
    }
}
