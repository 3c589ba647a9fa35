use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use itertools::{Itertools, MinMaxResult};

use crate::domain::{DayForecast, DaySlotForecast, SlotForecast};
use crate::store::ReadingStore;

/// Naive historical-average forecaster.
///
/// A requested instant is reduced to its (weekday, hour, minute) slot and
/// matched against the start time of every stored reading; the forecast is
/// the plain mean of the matches. No weighting, no decay, no outlier
/// rejection, and no notion of the future beyond the slot key: a slot with
/// no history yields nothing rather than an extrapolated guess.
pub struct HistoricalAverageForecaster {
    store: Arc<ReadingStore>,
}

impl HistoricalAverageForecaster {
    pub fn new(store: Arc<ReadingStore>) -> Self {
        Self { store }
    }

    /// Aggregate every historical occurrence of `instant`'s weekday and
    /// half-hour slot across the whole dataset.
    pub fn forecast_at(&self, instant: NaiveDateTime) -> Option<SlotForecast> {
        let day_of_week = instant.weekday();
        let (hour, minute) = (instant.hour(), instant.minute());

        let matches: Vec<f64> = self
            .store
            .snapshot()
            .iter()
            .filter(|r| {
                r.start_time.weekday() == day_of_week
                    && r.start_time.hour() == hour
                    && r.start_time.minute() == minute
            })
            .map(|r| r.kwh)
            .collect();

        let (min_kwh, max_kwh) = match matches.iter().copied().minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };
        let average = matches.iter().sum::<f64>() / matches.len() as f64;

        Some(SlotForecast {
            average_kwh: round4(average),
            min_kwh: round4(min_kwh),
            max_kwh: round4(max_kwh),
            sample_count: matches.len(),
            day_of_week: day_name(day_of_week).to_string(),
            hour,
            minute,
        })
    }

    /// Sweep all 48 half-hour slots of `date` in order (00:00, 00:30, ...,
    /// 23:30), keeping the slots that had history. `None` when the whole
    /// day has none.
    pub fn forecast_day(&self, date: NaiveDate) -> Option<DayForecast> {
        let midnight = date.and_time(NaiveTime::MIN);

        let mut slots = Vec::with_capacity(48);
        let mut total_kwh = 0.0;

        for half_hours in 0..48 {
            let time = midnight + Duration::minutes(30 * half_hours);
            if let Some(forecast) = self.forecast_at(time) {
                total_kwh += forecast.average_kwh;
                slots.push(DaySlotForecast {
                    time,
                    average_kwh: forecast.average_kwh,
                    min_kwh: forecast.min_kwh,
                    max_kwh: forecast.max_kwh,
                    sample_count: forecast.sample_count,
                });
            }
        }

        if slots.is_empty() {
            return None;
        }

        Some(DayForecast {
            day_of_week: day_name(midnight.weekday()).to_string(),
            total_kwh,
            slots,
        })
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Full weekday name, as reported in forecast responses.
fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
