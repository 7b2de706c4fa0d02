// src/services/telemetry_service.rs

use std::collections::BTreeMap;

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    db::TelemetryRepository,
    models::telemetry::{Summary, TimelineEvent, TimelineQuery, TimeseriesPoint, TimeseriesQuery},
};

pub const DEFAULT_PER_PAGE: i64 = 30;
pub const MAX_PER_PAGE: i64 = 1000;
pub const DEFAULT_TIMESERIES_LIMIT: i64 = 500;
pub const MAX_TIMESERIES_LIMIT: i64 = 10_000;

/// `(limit, offset)` for a 1-based page; bad values fall back to sane ones.
pub fn page_window(page: Option<i64>, per_page: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
    (per_page, (page - 1).saturating_mul(per_page))
}

pub fn timeseries_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_TIMESERIES_LIMIT)
        .clamp(1, MAX_TIMESERIES_LIMIT)
}

#[derive(Clone)]
pub struct TelemetryService {
    repo: TelemetryRepository,
}

impl TelemetryService {
    pub fn new(repo: TelemetryRepository) -> Self {
        Self { repo }
    }

    pub async fn summary<'e, E>(&self, executor: E) -> Result<Summary, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.summary(executor).await
    }

    pub async fn timeline<'e, E>(&self, executor: E, query: &TimelineQuery) -> Result<Vec<TimelineEvent>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (limit, offset) = page_window(query.page, query.per_page);
        let event_type = query
            .event_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        self.repo.timeline_page(executor, event_type, limit, offset).await
    }

    pub async fn timeseries<'e, E>(&self, executor: E, query: &TimeseriesQuery) -> Result<Vec<TimeseriesPoint>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let metric = query
            .metric
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| AppError::BadRequest("Metric parameter is required".to_string()))?;

        self.repo
            .timeseries(executor, metric, timeseries_limit(query.limit))
            .await
    }

    pub async fn messages<'e, E>(&self, executor: E) -> Result<BTreeMap<String, String>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.messages(executor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(page_window(None, None), (30, 0));
        assert_eq!(page_window(Some(1), Some(50)), (50, 0));
    }

    #[test]
    fn later_pages_skip_earlier_ones() {
        assert_eq!(page_window(Some(3), Some(30)), (30, 60));
    }

    #[test]
    fn nonsense_paging_is_clamped() {
        assert_eq!(page_window(Some(0), Some(0)), (1, 0));
        assert_eq!(page_window(Some(-4), Some(1_000_000)), (MAX_PER_PAGE, 0));
    }

    #[test]
    fn timeseries_limit_has_default_and_bounds() {
        assert_eq!(timeseries_limit(None), 500);
        assert_eq!(timeseries_limit(Some(0)), 1);
        assert_eq!(timeseries_limit(Some(i64::MAX)), MAX_TIMESERIES_LIMIT);
    }
}
