// src/db.rs

pub mod active_record;

pub mod guest_repo;
pub use guest_repo::GuestRepository;
pub mod room_repo;
pub use room_repo::RoomRepository;
pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod booking_repo;
pub use booking_repo::BookingRepository;
pub mod report_repo;
pub use report_repo::ReportRepository;

pub mod telemetry_repo;
pub use telemetry_repo::TelemetryRepository;
