// src/ingest.rs

pub mod parser;
pub mod pipeline;
pub mod template;

pub use pipeline::{run, IngestMode, IngestStats};
