//! Synthetic interchange-file generator for fixtures and local development.
//!
//! Reproduces the feed this service ingests: an `HDR` header row followed by
//! half-hourly `DET` rows whose energy field is the running total for the
//! day, reset at midnight. The reader consumes that number verbatim, so the
//! generator must keep writing it that way.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ingest::parser::{DETAIL_TAG, HEADER_TAG, TIMESTAMP_FORMAT};

// Fixed pass-through identifiers, matching the meter export this format was
// captured from.
const METER_POINT: &str = "1001152970CK861";
const REGISTER: &str = "000";
const READING_ID: &str = "212589268";

const BASE_KWH: f64 = 0.15;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// First day of generated data.
    pub start: NaiveDate,
    /// Last day of generated data, inclusive.
    pub end: NaiveDate,
    pub seed: u64,
}

impl GeneratorConfig {
    /// The year of data the original feed shipped with.
    pub fn full_year(seed: u64) -> Option<Self> {
        Some(Self {
            start: NaiveDate::from_ymd_opt(2024, 12, 1)?,
            end: NaiveDate::from_ymd_opt(2025, 11, 30)?,
            seed,
        })
    }
}

/// Write a complete interchange file; returns the number of detail rows.
pub fn write_interchange_file(path: impl AsRef<Path>, cfg: &GeneratorConfig) -> Result<usize> {
    let path = path.as_ref();
    let rows = detail_rows(cfg);

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(header_row(cfg, rows.len()))?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(rows.len())
}

/// All detail rows for the configured date range, in chronological order.
///
/// Slots start one second past the half hour and end on the next half hour,
/// exactly as the source feed stamps them.
pub fn detail_rows(cfg: &GeneratorConfig) -> Vec<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut rows = Vec::new();

    let mut current = cfg.start.and_time(NaiveTime::MIN) + Duration::seconds(1);
    let end = cfg.end.and_time(NaiveTime::MIN) + Duration::seconds(86_399);

    let mut day_total = 0.0;
    let mut last_date = cfg.start;

    while current <= end {
        if current.date() != last_date {
            day_total = 0.0;
            last_date = current.date();
        }
        day_total += slot_kwh(&mut rng, current.hour(), current.month());

        let slot_end = current + Duration::minutes(30) - Duration::seconds(1);
        rows.push(vec![
            DETAIL_TAG.to_string(),
            String::new(),
            METER_POINT.to_string(),
            REGISTER.to_string(),
            String::new(),
            READING_ID.to_string(),
            "X".to_string(),
            "UN".to_string(),
            "24".to_string(),
            current.format(TIMESTAMP_FORMAT).to_string(),
            slot_end.format(TIMESTAMP_FORMAT).to_string(),
            "RD".to_string(),
            day_total.to_string(),
            String::new(),
        ]);

        current += Duration::minutes(30);
    }

    rows
}

fn header_row(cfg: &GeneratorConfig, total_records: usize) -> Vec<String> {
    vec![
        HEADER_TAG.to_string(),
        "ICPCONS".to_string(),
        "1.1".to_string(),
        "PSNZ".to_string(),
        "PSNZ".to_string(),
        "CUST".to_string(),
        cfg.end.format("%d/%m/%Y").to_string(),
        String::new(),
        total_records.to_string(),
        cfg.start.format("%d/%m/%Y").to_string(),
        cfg.end.format("%d/%m/%Y").to_string(),
    ]
}

fn slot_kwh(rng: &mut StdRng, hour: u32, month: u32) -> f64 {
    let variation = rng.gen_range(0.85..=1.15);
    round2(BASE_KWH * hour_multiplier(hour) * season_multiplier(month) * variation)
}

/// Consumption shape over the day: low overnight, morning and evening peaks.
fn hour_multiplier(hour: u32) -> f64 {
    match hour {
        0 => 0.6,
        1..=4 => 0.5,
        5 => 0.6,
        6 => 0.8,
        7 => 1.2,
        8 => 1.5,
        9 => 1.8,
        10 => 1.7,
        11 => 1.6,
        12 => 1.5,
        13 => 1.4,
        14 => 1.3,
        15 => 1.4,
        16 => 1.6,
        17 => 1.9,
        18 => 2.0,
        19 => 2.2,
        20 => 2.1,
        21 => 1.8,
        22 => 1.2,
        _ => 0.8,
    }
}

/// Southern-hemisphere seasonality: summer air-conditioning dominates.
fn season_multiplier(month: u32) -> f64 {
    match month {
        12 | 1 => 1.3,
        2 => 1.2,
        3 | 10 => 1.0,
        4 => 0.9,
        5 => 0.8,
        6..=9 => 0.9,
        11 => 1.1,
        _ => 1.0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
