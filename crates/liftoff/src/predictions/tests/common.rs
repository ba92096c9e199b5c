use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::predictions::catalog::StarshipCatalog;
use crate::predictions::clock::FixedClock;
use crate::predictions::domain::{ClosureId, ClosureLocation, ClosureStatus, RoadClosure};
use crate::predictions::scoring::{ConfidenceScorer, ScoringConfig};
use crate::predictions::service::PredictionService;
use crate::predictions::source::{ClosureSource, ClosureSourceError};

pub(super) const BOCA_CHICA: &str = "boca-chica";
pub(super) const CAMERON_COUNTY: &str = "Cameron County";

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 20, 14, 0, 0).unwrap()
}

pub(super) fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 22, hour, 0, 0).unwrap()
}

pub(super) fn location(id: &str) -> ClosureLocation {
    ClosureLocation {
        id: id.to_string(),
        name: format!("{id} closure zone"),
        region: "Texas".to_string(),
        country: "USA".to_string(),
        related_site_id: None,
    }
}

pub(super) fn closure(
    location_id: &str,
    start: DateTime<Utc>,
    duration: Duration,
    source: &str,
) -> RoadClosure {
    RoadClosure {
        id: ClosureId(format!("test-{location_id}-{}", start.timestamp())),
        location: location(location_id),
        start_date: start,
        end_date: start + duration,
        status: ClosureStatus::Scheduled,
        source: source.to_string(),
        prediction: None,
        created_at: now(),
        updated_at: now(),
    }
}

/// Boca Chica, 10:00 start, 24 hour window, official source.
pub(super) fn full_match_closure() -> RoadClosure {
    closure(BOCA_CHICA, at_hour(10), Duration::hours(24), CAMERON_COUNTY)
}

pub(super) fn scorer() -> ConfidenceScorer {
    ConfidenceScorer::new(ScoringConfig::default(), Arc::new(StarshipCatalog))
}

pub(super) fn service_with(source: impl ClosureSource + 'static) -> PredictionService {
    PredictionService::new(Arc::new(source), scorer(), Arc::new(FixedClock(now())))
}

/// Returns the configured closures untouched, whatever their status.
pub(super) struct StaticSource(pub(super) Vec<RoadClosure>);

impl ClosureSource for StaticSource {
    fn list_active_closures(
        &self,
        _now: DateTime<Utc>,
    ) -> Result<Vec<RoadClosure>, ClosureSourceError> {
        Ok(self.0.clone())
    }
}

pub(super) struct UnavailableSource;

impl ClosureSource for UnavailableSource {
    fn list_active_closures(
        &self,
        _now: DateTime<Utc>,
    ) -> Result<Vec<RoadClosure>, ClosureSourceError> {
        Err(ClosureSourceError::Unavailable(
            "county feed offline".to_string(),
        ))
    }
}
