use chrono::{DateTime, Utc};
use liftoff::predictions::{
    Clock, FixedClock, PredictionService, ScoringConfig, SystemClock, TimestampIdGenerator,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Prediction service backed by the built-in closure notices. A pinned `now`
/// replaces the wall clock.
pub(crate) fn prediction_service(
    scoring: ScoringConfig,
    now: Option<DateTime<Utc>>,
) -> PredictionService {
    let clock: Arc<dyn Clock> = match now {
        Some(instant) => Arc::new(FixedClock(instant)),
        None => Arc::new(SystemClock),
    };
    PredictionService::with_mock_source(scoring, Arc::new(TimestampIdGenerator::default()), clock)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|err| format!("failed to parse '{raw}' as an RFC 3339 timestamp ({err})"))
}
