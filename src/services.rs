// src/services.rs

pub mod booking_service;
pub mod catalog_service;
pub mod guest_service;
pub mod import;
pub mod pricing;
pub mod report_service;
pub mod room_service;
pub mod telemetry_service;
