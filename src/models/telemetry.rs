// src/models/telemetry.rs

// ChronoLog payloads stay snake_case, the dashboard reads them as-is.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LatencyMetrics {
    pub count: i64,
    pub average: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Summary {
    pub error_count: i64,
    pub warning_count: i64,
    pub timeline_count: i64,
    pub unique_messages: i64,
    pub latency_metrics: LatencyMetrics,
}

// Raw row behind `Summary`
#[derive(Debug, FromRow)]
pub struct SummaryRow {
    pub error_count: i64,
    pub warning_count: i64,
    pub timeline_count: i64,
    pub unique_messages: i64,
    pub latency_count: i64,
    pub latency_average: Option<f64>,
}

impl From<SummaryRow> for Summary {
    fn from(row: SummaryRow) -> Self {
        Self {
            error_count: row.error_count,
            warning_count: row.warning_count,
            timeline_count: row.timeline_count,
            unique_messages: row.unique_messages,
            latency_metrics: LatencyMetrics {
                count: row.latency_count,
                average: row.latency_average.unwrap_or(0.0),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TimelineEvent {
    pub id: i64,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub time: Option<NaiveDateTime>,
    pub event: String,
    pub msg_id: Option<i32>,
    #[schema(value_type = Option<Vec<String>>)]
    pub msg_values: Option<Value>,
    pub value: Option<f64>,
    pub template: Option<String>,
    pub total_count: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TimeseriesPoint {
    #[schema(value_type = Option<String>, format = DateTime)]
    pub time: Option<NaiveDateTime>,
    pub value: f64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimelineQuery {
    /// Page number, starting at 1
    pub page: Option<i64>,
    /// Items per page
    pub per_page: Option<i64>,
    /// Only events of this type (`error`, `warning`, `latency`...)
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimeseriesQuery {
    /// Metric name, i.e. the event type (`latency`, `cpu`...)
    pub metric: Option<String>,
    /// Max points to return
    pub limit: Option<i64>,
}

/// A resolved event ready for `timeline_events`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimelineEvent {
    pub time: Option<NaiveDateTime>,
    pub event: String,
    pub message_id: Option<i32>,
    pub message_values: Option<Vec<String>>,
    pub value: Option<f64>,
}
