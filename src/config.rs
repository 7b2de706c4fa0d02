// src/config.rs

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{
        BookingRepository, CatalogRepository, GuestRepository, ReportRepository, RoomRepository,
        TelemetryRepository,
    },
    services::{
        booking_service::BookingsService, catalog_service::CatalogService, guest_service::GuestService,
        report_service::ReportService, room_service::RoomService, telemetry_service::TelemetryService,
    },
};

/// Reads an optional variable, falling back to `default` when it is unset.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

// =============================================================================
//  HTTP SERVER
// =============================================================================

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub cors_origin: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:3000".to_string())?,
            cors_origin: env_or("CORS_ORIGIN", "http://localhost:5173".to_string())?,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 5)?,
            db_acquire_timeout: Duration::from_secs(env_or("DB_ACQUIRE_TIMEOUT_SECS", 3)?),
        })
    }

    pub async fn connect(&self) -> anyhow::Result<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.db_max_connections)
            .acquire_timeout(self.db_acquire_timeout)
            .connect(&self.database_url)
            .await
            .context("Could not connect to the database")?;

        tracing::info!("✅ Database connection established");
        Ok(pool)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub guest_service: GuestService,
    pub room_service: RoomService,
    pub catalog_service: CatalogService,
    pub booking_service: BookingsService,
    pub report_service: ReportService,
    pub telemetry_service: TelemetryService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = config.connect().await?;
        Ok(Self::with_pool(db_pool))
    }

    /// Wires repositories into services around an existing pool.
    pub fn with_pool(db_pool: PgPool) -> Self {
        let guest_repo = GuestRepository::new();
        let room_repo = RoomRepository::new();
        let catalog_repo = CatalogRepository::new();
        let booking_repo = BookingRepository::new();

        Self {
            guest_service: GuestService::new(guest_repo, booking_repo.clone()),
            room_service: RoomService::new(room_repo.clone()),
            catalog_service: CatalogService::new(catalog_repo.clone()),
            booking_service: BookingsService::new(booking_repo, room_repo, catalog_repo),
            report_service: ReportService::new(ReportRepository::new()),
            telemetry_service: TelemetryService::new(TelemetryRepository::new()),
            db_pool,
        }
    }
}

// =============================================================================
//  CHRONOLOG INGEST
// =============================================================================

#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub input_file: PathBuf,
    pub chunk_size: usize,
    pub queue_max_size: usize,
    pub num_workers: usize,
    pub poll_interval: Duration,
    pub flush_interval: Duration,
    /// Empty means "every `key=<number>` pair".
    pub track_variables: Vec<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("input/sample.log"),
            chunk_size: 5000,
            queue_max_size: 100,
            num_workers: 3,
            poll_interval: Duration::from_millis(500),
            flush_interval: Duration::from_millis(2000),
            track_variables: Vec::new(),
        }
    }
}

impl IngestConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let track_variables = env::var("TRACK_VARIABLES")
            .map(|raw| parse_track_variables(&raw))
            .unwrap_or_default();

        Ok(Self {
            input_file: env_or("INPUT_FILE_PATH", defaults.input_file)?,
            chunk_size: env_or("CHUNK_SIZE", defaults.chunk_size)?.max(1),
            queue_max_size: env_or("QUEUE_MAX_SIZE", defaults.queue_max_size)?.max(1),
            num_workers: env_or("NUM_WORKERS", defaults.num_workers)?.max(1),
            poll_interval: interval_millis(env_or("POLL_INTERVAL_MS", 500)?),
            flush_interval: interval_millis(env_or("WRITER_FLUSH_INTERVAL_MS", 2000)?),
            track_variables,
        })
    }
}

/// Timer periods must be non-zero; 0 becomes 1 ms.
pub fn interval_millis(millis: u64) -> Duration {
    Duration::from_millis(millis.max(1))
}

pub fn parse_track_variables(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
