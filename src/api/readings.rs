use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    api::{error::ApiError, parse_date, parse_instant, round2},
    app::AppState,
    domain::IntervalRecord,
};

#[derive(Debug, Deserialize)]
pub struct TimeQuery {
    pub time: Option<String>,
}

/// Point lookup response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KwhResponse {
    pub requested_time: String,
    pub kwh: f64,
}

/// GET /api/kwh?time= - energy of the half-hour containing `time`
pub async fn get_kwh_at(
    State(state): State<AppState>,
    Query(q): Query<TimeQuery>,
) -> Result<Json<KwhResponse>, ApiError> {
    let text = q.time.ok_or_else(|| {
        ApiError::BadRequest(
            "missing 'time' query parameter; usage: /api/kwh?time=2025-10-01T08:00:00".to_string(),
        )
    })?;
    let instant = parse_instant(&text)?;

    let kwh = state
        .store
        .energy_at(instant)
        .ok_or_else(|| ApiError::NotFound(format!("no energy data found for {text}")))?;

    Ok(Json(KwhResponse {
        requested_time: text,
        kwh,
    }))
}

/// Day view response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayDataResponse {
    pub date: String,
    pub records: usize,
    pub total_kwh: f64,
    pub data: Vec<IntervalRecord>,
}

/// GET /api/kwh/date/:date - every reading starting on the given day
pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayDataResponse>, ApiError> {
    let day = parse_date(&date)?;
    let day_start = day.and_time(NaiveTime::MIN);
    let day_end = day_start + Duration::days(1);

    let data = state.store.find_range(day_start, day_end);
    if data.is_empty() {
        return Err(ApiError::NotFound(format!(
            "no energy data found for {date}"
        )));
    }

    let total_kwh = round2(data.iter().map(|r| r.kwh).sum());
    Ok(Json(DayDataResponse {
        date,
        records: data.len(),
        total_kwh,
        data,
    }))
}

/// Snapshot response, the full ordered dataset for the viewer
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub records: usize,
    pub data: Vec<IntervalRecord>,
}

/// GET /api/kwh/all - full dataset dump
pub async fn get_all(State(state): State<AppState>) -> Json<SnapshotResponse> {
    let data = state.store.snapshot().to_vec();
    Json(SnapshotResponse {
        records: data.len(),
        data,
    })
}
