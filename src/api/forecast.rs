use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::{
    api::{error::ApiError, parse_date, parse_instant, readings::TimeQuery, round2},
    app::AppState,
    domain::DaySlotForecast,
};

/// Single-slot forecast response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub time: String,
    pub kwh: f64,
    pub unit: &'static str,
}

/// GET /api/kwh/forecast?time= - historical average for the slot of `time`
pub async fn get_forecast_at(
    State(state): State<AppState>,
    Query(q): Query<TimeQuery>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let text = q.time.ok_or_else(|| {
        ApiError::BadRequest(
            "missing 'time' query parameter; usage: /api/kwh/forecast?time=2025-11-30T08:00:00"
                .to_string(),
        )
    })?;
    let instant = parse_instant(&text)?;

    let forecast = state.forecaster.forecast_at(instant).ok_or_else(|| {
        ApiError::NotFound(format!("no historical data available to forecast {text}"))
    })?;

    Ok(Json(ForecastResponse {
        time: text,
        kwh: forecast.average_kwh,
        unit: "kWh",
    }))
}

/// Full-day forecast response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayForecastResponse {
    pub date: String,
    pub day_of_week: String,
    pub forecasted_total_kwh: f64,
    pub intervals: usize,
    pub forecasts: Vec<DaySlotForecast>,
}

/// GET /api/kwh/forecast/date/:date - one forecast per populated half-hour
/// slot of the given calendar date
pub async fn get_day_forecast(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayForecastResponse>, ApiError> {
    let day = parse_date(&date)?;

    let forecast = state.forecaster.forecast_day(day).ok_or_else(|| {
        ApiError::NotFound(format!("no historical data available to forecast {date}"))
    })?;

    Ok(Json(DayForecastResponse {
        date,
        day_of_week: forecast.day_of_week,
        forecasted_total_kwh: round2(forecast.total_kwh),
        intervals: forecast.slots.len(),
        forecasts: forecast.slots,
    }))
}
