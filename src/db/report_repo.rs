// src/db/report_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    db::active_record::{self, View},
};

#[derive(Clone, Default)]
pub struct ReportRepository;

impl ReportRepository {
    pub fn new() -> Self {
        Self
    }

    /// Every row of a reporting view, in the view's own order.
    pub async fn fetch<'e, T, E>(&self, executor: E) -> Result<Vec<T>, AppError>
    where
        T: View,
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::all_rows(executor).await?)
    }
}
