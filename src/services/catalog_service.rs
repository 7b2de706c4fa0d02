// src/services/catalog_service.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    db::CatalogRepository,
    models::catalog::{Service, ServiceImportRecord},
    services::import::import_failure,
};

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository) -> Self {
        Self { repo }
    }

    pub async fn list_services<'e, E>(&self, executor: E) -> Result<Vec<Service>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor).await
    }

    pub async fn create_service<'e, E>(&self, executor: E, mut service: Service) -> Result<Service, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        service.id = 0;
        self.repo.save(executor, &mut service).await?;
        Ok(service)
    }

    pub async fn import_services(&self, pool: &PgPool, records: Vec<ServiceImportRecord>) -> Result<usize, AppError> {
        if records
            .iter()
            .any(|r| r.name.trim().is_empty() || r.price.is_sign_negative())
        {
            return Err(AppError::BadRequest(
                "Invalid service data: name is required and price cannot be negative.".to_string(),
            ));
        }

        let mut tx = pool.begin().await?;
        let count = records.len();

        for record in records {
            let mut service = Service::from(record);
            if let Err(e) = self.repo.save(&mut *tx, &mut service).await {
                tx.rollback().await?;
                return Err(import_failure(e));
            }
        }

        tx.commit().await.map_err(|e| import_failure(e.into()))?;
        tracing::info!(count, "Services imported");
        Ok(count)
    }
}
