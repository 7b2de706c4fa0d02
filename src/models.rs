// src/models.rs

pub mod booking;
pub mod catalog;
pub mod guest;
pub mod import;
pub mod report;
pub mod room;
pub mod telemetry;
