// src/services/report_service.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    db::ReportRepository,
    models::report::{
        GuestBookingReport, RevenueByRoomTypeReport, RoomAvailabilityReport, ServiceUsageStatsReport,
    },
};

#[derive(Clone)]
pub struct ReportService {
    repo: ReportRepository,
}

impl ReportService {
    pub fn new(repo: ReportRepository) -> Self {
        Self { repo }
    }

    pub async fn guest_bookings<'e, E>(&self, executor: E) -> Result<Vec<GuestBookingReport>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.fetch(executor).await
    }

    pub async fn room_availability<'e, E>(&self, executor: E) -> Result<Vec<RoomAvailabilityReport>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.fetch(executor).await
    }

    pub async fn service_usage<'e, E>(&self, executor: E) -> Result<Vec<ServiceUsageStatsReport>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.fetch(executor).await
    }

    pub async fn revenue_by_room_type<'e, E>(&self, executor: E) -> Result<Vec<RevenueByRoomTypeReport>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.fetch(executor).await
    }
}
