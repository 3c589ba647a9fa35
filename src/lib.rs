//! Half-hourly electricity meter readings: interchange-file ingestion,
//! point/range lookup and a naive historical-average forecast, served over
//! a thin HTTP gateway.

pub mod api;
pub mod app;
pub mod config;
pub mod datagen;
pub mod domain;
pub mod forecast;
pub mod ingest;
pub mod store;
pub mod telemetry;
