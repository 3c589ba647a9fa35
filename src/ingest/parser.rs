use chrono::NaiveDateTime;
use csv::StringRecord;

use crate::domain::IntervalRecord;

/// Leading tag of rows that carry readings.
pub const DETAIL_TAG: &str = "DET";
/// Leading tag of the file header row, ignored by the loader.
pub const HEADER_TAG: &str = "HDR";

/// Timestamp format used by the interchange file, start and end alike.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

// Fixed field positions within a detail row. The fields in between are
// meter-point and register identifiers the engine passes through untouched.
const START_TIME_FIELD: usize = 9;
const END_TIME_FIELD: usize = 10;
const ENERGY_FIELD: usize = 12;

/// True for rows that carry a reading, as opposed to the header or any
/// unknown tag.
pub fn is_detail_row(row: &StringRecord) -> bool {
    row.get(0).map(str::trim) == Some(DETAIL_TAG)
}

/// Parse one detail row into a validated record, or `None` to drop it.
///
/// The energy field holds the export's running daily total, reset at
/// midnight; it is read verbatim as the slot's energy because every existing
/// consumer of this feed already does. Any missing field, malformed
/// timestamp, non-finite energy or inverted interval drops the row without
/// touching the rest of the load.
pub fn parse_detail_row(row: &StringRecord) -> Option<IntervalRecord> {
    let start_time = parse_timestamp(row.get(START_TIME_FIELD)?)?;
    let end_time = parse_timestamp(row.get(END_TIME_FIELD)?)?;
    let kwh: f64 = row.get(ENERGY_FIELD)?.trim().parse().ok()?;

    if !kwh.is_finite() || start_time > end_time {
        return None;
    }

    Some(IntervalRecord {
        start_time,
        end_time,
        kwh,
    })
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT).ok()
}
