use chrono::NaiveDateTime;
use serde::Serialize;

/// Derived average/min/max/count summary for one (weekday, hour, minute)
/// slot. Computed on demand; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotForecast {
    pub average_kwh: f64,
    pub min_kwh: f64,
    pub max_kwh: f64,
    pub sample_count: usize,
    pub day_of_week: String,
    pub hour: u32,
    pub minute: u32,
}

/// One entry of a full-day forecast sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySlotForecast {
    pub time: NaiveDateTime,
    pub average_kwh: f64,
    pub min_kwh: f64,
    pub max_kwh: f64,
    pub sample_count: usize,
}

/// Full-day forecast: the slots that had history, in slot order, plus the
/// sum of their averages.
#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    pub day_of_week: String,
    pub total_kwh: f64,
    pub slots: Vec<DaySlotForecast>,
}
