pub mod error;
pub mod forecast;
pub mod health;
pub mod readings;

use std::time::Duration;

use axum::{routing::get, Router};
use chrono::{NaiveDate, NaiveDateTime};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{app::AppState, config::Config};

use error::ApiError;

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/kwh", get(readings::get_kwh_at))
        .route("/api/kwh/all", get(readings::get_all))
        .route("/api/kwh/date/:date", get(readings::get_day))
        .route("/api/kwh/forecast", get(forecast::get_forecast_at))
        .route("/api/kwh/forecast/date/:date", get(forecast::get_day_forecast))
        .with_state(state);

    if cfg.server.enable_cors {
        use tower_http::cors::Any;
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([axum::http::Method::GET])
            .allow_headers([axum::http::header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(
                cfg.server.request_timeout_secs,
            ))),
        )
        .layer(TraceLayer::new_for_http())
}

/// Request timestamps arrive as `YYYY-MM-DDTHH:MM:SS` text on the same
/// naive timeline the store uses. A parse failure is the caller's fault,
/// distinct from a lookup that finds nothing.
pub(crate) fn parse_instant(text: &str) -> Result<NaiveDateTime, ApiError> {
    text.parse::<NaiveDateTime>().map_err(|_| {
        ApiError::BadRequest(format!(
            "invalid time '{text}'; expected YYYY-MM-DDTHH:MM:SS"
        ))
    })
}

pub(crate) fn parse_date(text: &str) -> Result<NaiveDate, ApiError> {
    text.parse::<NaiveDate>()
        .map_err(|_| ApiError::BadRequest(format!("invalid date '{text}'; expected YYYY-MM-DD")))
}

/// Day and dataset totals are reported to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instant_accepts_iso_seconds() {
        let t = parse_instant("2025-10-01T08:00:00").unwrap();
        assert_eq!(t, "2025-10-01T08:00:00".parse::<NaiveDateTime>().unwrap());
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        assert!(parse_instant("08:00 on the 1st").is_err());
        assert!(parse_instant("").is_err());
    }

    #[test]
    fn test_parse_date_round_trips() {
        let d = parse_date("2025-10-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert!(parse_date("01/10/2025").is_err());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(12.344), 12.34);
    }
}
