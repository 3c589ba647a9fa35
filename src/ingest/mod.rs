//! One-shot ingestion of the meter interchange file.

pub mod parser;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::store::ReadingStore;

/// Read the interchange file at `path` and build the in-memory store.
///
/// Detail rows that fail to parse are dropped and counted, never fatal.
/// Only a missing or unreadable file is an error, and that happens before
/// the gateway exists, so a serving process always holds a complete load.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ReadingStore> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open meter data file {}", path.display()))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.records() {
        // A row the csv reader itself rejects is treated like any other
        // malformed row: dropped, load continues.
        let Ok(row) = row else {
            skipped += 1;
            continue;
        };
        if !parser::is_detail_row(&row) {
            continue;
        }
        match parser::parse_detail_row(&row) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, "dropped malformed detail rows");
    }

    let store = ReadingStore::new(records);
    info!(records = store.len(), path = %path.display(), "loaded meter readings");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_fixture(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn test_loads_detail_rows_and_ignores_header() {
        let file = write_fixture(&[
            "HDR,ICPCONS,1.1,PSNZ,PSNZ,CUST,24/11/2025,,2,01/12/2024,30/11/2025",
            "DET,,1001152970CK861,000,,212589268,X,UN,24,01/12/2024 00:00:01,01/12/2024 00:30:00,RD,0.09,",
            "DET,,1001152970CK861,000,,212589268,X,UN,24,01/12/2024 00:30:01,01/12/2024 01:00:00,RD,0.18,",
        ]);

        let store = load_from_path(file.path()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_malformed_rows_are_dropped_silently() {
        let file = write_fixture(&[
            "DET,,1001152970CK861,000,,212589268,X,UN,24,01/12/2024 00:00:01,01/12/2024 00:30:00,RD,0.09,",
            "DET,,1001152970CK861,000,,212589268,X,UN,24,not a date,01/12/2024 01:00:00,RD,0.18,",
            "DET,,1001152970CK861,000,,212589268,X,UN,24,01/12/2024 01:00:01,01/12/2024 01:30:00,RD,not a number,",
            "DET,too,short",
        ]);

        let store = load_from_path(file.path()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_from_path("/nonexistent/energy_data.csv").unwrap_err();
        assert!(err.to_string().contains("failed to open meter data file"));
    }

    #[test]
    fn test_loaded_records_keep_file_order() {
        let file = write_fixture(&[
            "DET,,1001152970CK861,000,,212589268,X,UN,24,01/12/2024 00:00:01,01/12/2024 00:30:00,RD,0.09,",
            "DET,,1001152970CK861,000,,212589268,X,UN,24,01/12/2024 00:30:01,01/12/2024 01:00:00,RD,0.18,",
            "DET,,1001152970CK861,000,,212589268,X,UN,24,01/12/2024 01:00:01,01/12/2024 01:30:00,RD,0.27,",
        ]);

        let store = load_from_path(file.path()).unwrap();
        let starts: Vec<_> = store.snapshot().iter().map(|r| r.start_time).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }
}
