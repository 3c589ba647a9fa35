use chrono::NaiveDateTime;
use serde::Serialize;

/// One half-hour meter observation with inclusive start/end bounds.
///
/// `end_time` is one second before the next period starts, so adjacent
/// well-formed records never share an instant. The store does not rely on
/// that: containment is always checked against both bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub kwh: f64,
}

impl IntervalRecord {
    /// Inclusive on both bounds.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start_time <= instant && instant <= self.end_time
    }
}
