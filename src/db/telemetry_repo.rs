// src/db/telemetry_repo.rs

use std::collections::BTreeMap;

use sqlx::{types::Json, Executor, PgConnection, Postgres, QueryBuilder};

use crate::{
    common::error::AppError,
    models::telemetry::{NewTimelineEvent, Summary, SummaryRow, TimelineEvent, TimeseriesPoint},
};

// 5 binds per row keeps one statement well under the 65535 parameter cap
const MAX_ROWS_PER_INSERT: usize = 1000;

#[derive(Clone, Default)]
pub struct TelemetryRepository;

impl TelemetryRepository {
    pub fn new() -> Self {
        Self
    }

    // =========================================================================
    //  READ (dashboard)
    // =========================================================================

    pub async fn summary<'e, E>(&self, executor: E) -> Result<Summary, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE event_type = 'error')          AS error_count,
                COUNT(*) FILTER (WHERE event_type = 'warning')        AS warning_count,
                COUNT(*)                                              AS timeline_count,
                (SELECT COUNT(*) FROM messages)                       AS unique_messages,
                COUNT(value) FILTER (WHERE event_type = 'latency')    AS latency_count,
                AVG(value) FILTER (WHERE event_type = 'latency')      AS latency_average
            FROM timeline_events
            "#,
        )
        .fetch_one(executor)
        .await?;

        Ok(row.into())
    }

    /// One page of the timeline; every row carries the filtered total.
    pub async fn timeline_page<'e, E>(
        &self,
        executor: E,
        event_type: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TimelineEvent>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let events = sqlx::query_as::<_, TimelineEvent>(
            r#"
            SELECT
                e.event_id        AS id,
                e.event_time      AS time,
                e.event_type      AS event,
                e.message_id      AS msg_id,
                e.message_values  AS msg_values,
                e.value,
                m.template,
                COUNT(*) OVER ()  AS total_count
            FROM timeline_events e
            LEFT JOIN messages m ON m.message_id = e.message_id
            WHERE ($1::text IS NULL OR e.event_type = $1)
            ORDER BY e.event_id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(event_type)
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await?;

        Ok(events)
    }

    /// The newest `limit` points of a metric, returned oldest first.
    pub async fn timeseries<'e, E>(
        &self,
        executor: E,
        metric: &str,
        limit: i64,
    ) -> Result<Vec<TimeseriesPoint>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let points = sqlx::query_as::<_, TimeseriesPoint>(
            r#"
            SELECT time, value
            FROM (
                SELECT event_id, event_time AS time, value
                FROM timeline_events
                WHERE event_type = $1 AND value IS NOT NULL
                ORDER BY event_id DESC
                LIMIT $2
            ) recent
            ORDER BY event_id ASC
            "#,
        )
        .bind(metric)
        .bind(limit)
        .fetch_all(executor)
        .await?;

        Ok(points)
    }

    /// `{ "<message_id>": template }`
    pub async fn messages<'e, E>(&self, executor: E) -> Result<BTreeMap<String, String>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows: Vec<(i32, String)> =
            sqlx::query_as("SELECT message_id, template FROM messages ORDER BY message_id")
                .fetch_all(executor)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, template)| (id.to_string(), template))
            .collect())
    }

    // =========================================================================
    //  WRITE (ingestion)
    // =========================================================================

    /// Id of an existing template, inserting it first when unknown.
    pub async fn get_or_insert_message<'e, E>(&self, executor: E, template: &str) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // The no-op update makes RETURNING yield the id on conflict too
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO messages (template) VALUES ($1)
            ON CONFLICT (template) DO UPDATE SET template = EXCLUDED.template
            RETURNING message_id
            "#,
        )
        .bind(template)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    pub async fn insert_events(
        &self,
        conn: &mut PgConnection,
        events: &[NewTimelineEvent],
    ) -> Result<u64, AppError> {
        let mut inserted = 0;

        for chunk in events.chunks(MAX_ROWS_PER_INSERT) {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO timeline_events (event_time, event_type, message_id, message_values, value) ",
            );
            builder.push_values(chunk, |mut row, event| {
                row.push_bind(event.time)
                    .push_bind(event.event.clone())
                    .push_bind(event.message_id)
                    .push_bind(event.message_values.clone().map(Json))
                    .push_bind(event.value);
            });

            inserted += builder.build().execute(&mut *conn).await?.rows_affected();
        }

        Ok(inserted)
    }
}
