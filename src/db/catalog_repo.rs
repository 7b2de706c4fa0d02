// src/db/catalog_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    db::active_record,
    models::catalog::Service,
};

#[derive(Clone, Default)]
pub struct CatalogRepository;

impl CatalogRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Service>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::all(executor).await?)
    }

    pub async fn find<'e, E>(&self, executor: E, id: i32) -> Result<Option<Service>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::find(executor, id).await?)
    }

    pub async fn save<'e, E>(&self, executor: E, service: &mut Service) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::save(executor, service).await?)
    }
}
