// src/handlers.rs

pub mod bookings;
pub mod catalog;
pub mod guests;
pub mod imports;
pub mod reports;
pub mod rooms;
pub mod telemetry;
