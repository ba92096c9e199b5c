use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local, Offset, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::EventCatalog;
use super::domain::{ClosureId, LaunchPrediction, RoadClosure};
use super::source::{BOCA_CHICA_LOCATION_ID, CAMERON_COUNTY_SOURCE, SPACEX_SOURCE};

pub const ALGORITHM_VERSION: &str = "1.0.0-mvp";

/// Ceiling applied after all rule weights are summed.
pub const MAX_CONFIDENCE: u8 = 85;

const LOCATION_WEIGHT: u8 = 40;
const DURATION_WEIGHT: u8 = 25;
const TIME_OF_DAY_WEIGHT: u8 = 15;
const SOURCE_WEIGHT: u8 = 20;

const MIN_TEST_WINDOW_HOURS: f64 = 12.0;
const MAX_TEST_WINDOW_HOURS: f64 = 48.0;
const FIRST_LAUNCH_HOUR: u32 = 7;
const LAST_LAUNCH_HOUR: u32 = 18;

const OFFICIAL_SOURCES: [&str; 2] = [CAMERON_COUNTY_SOURCE, SPACEX_SOURCE];

/// Time zone in which a closure's start hour is read for the time-of-day rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringZone {
    /// Host zone, resolved against each closure's own start date so DST is honored.
    Local,
    Fixed(FixedOffset),
}

impl ScoringZone {
    pub fn hour_of(self, instant: DateTime<Utc>) -> u32 {
        match self {
            ScoringZone::Local => instant.with_timezone(&Local).hour(),
            ScoringZone::Fixed(offset) => instant.with_timezone(&offset).hour(),
        }
    }

    /// Render `instant` in this zone with a `strftime` pattern.
    pub fn format(self, instant: DateTime<Utc>, pattern: &str) -> String {
        match self {
            ScoringZone::Local => instant.with_timezone(&Local).format(pattern).to_string(),
            ScoringZone::Fixed(offset) => {
                instant.with_timezone(&offset).format(pattern).to_string()
            }
        }
    }
}

impl fmt::Display for ScoringZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringZone::Local => f.write_str("local"),
            ScoringZone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// Settings for the scorer that are not part of the rule weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    pub zone: ScoringZone,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            zone: ScoringZone::Fixed(Utc.fix()),
        }
    }
}

/// Scoring rules in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureRule {
    LaunchSiteLocation,
    TestWindowDuration,
    LaunchHours,
    OfficialSource,
}

impl ClosureRule {
    pub const ALL: [ClosureRule; 4] = [
        ClosureRule::LaunchSiteLocation,
        ClosureRule::TestWindowDuration,
        ClosureRule::LaunchHours,
        ClosureRule::OfficialSource,
    ];

    pub const fn weight(self) -> u8 {
        match self {
            ClosureRule::LaunchSiteLocation => LOCATION_WEIGHT,
            ClosureRule::TestWindowDuration => DURATION_WEIGHT,
            ClosureRule::LaunchHours => TIME_OF_DAY_WEIGHT,
            ClosureRule::OfficialSource => SOURCE_WEIGHT,
        }
    }
}

/// One rule that fired, with the note it contributes to the reasoning trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub rule: ClosureRule,
    pub weight: u8,
    pub note: String,
}

/// Malformed closures the scorer refuses to rate.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("closure {closure_id} has no location identifier")]
    MissingLocation { closure_id: ClosureId },
    #[error("closure {closure_id} ends ({end}) before it starts ({start})")]
    InvertedWindow {
        closure_id: ClosureId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Applies the weighted closure rules and resolves the predicted launch.
pub struct ConfidenceScorer {
    config: ScoringConfig,
    catalog: Arc<dyn EventCatalog>,
}

impl ConfidenceScorer {
    pub fn new(config: ScoringConfig, catalog: Arc<dyn EventCatalog>) -> Self {
        Self { config, catalog }
    }

    /// Score `closure`, stamping the prediction with `now`.
    pub fn score(
        &self,
        closure: &RoadClosure,
        now: DateTime<Utc>,
    ) -> Result<LaunchPrediction, ScoringError> {
        validate(closure)?;

        let hits = self.evaluate_rules(closure);
        let confidence = clamp_confidence(&hits);
        let launch = self.catalog.predicted_launch(closure);

        Ok(LaunchPrediction {
            confidence,
            predicted_event: launch.event,
            predicted_vehicle: launch.vehicle,
            reasoning: hits.into_iter().map(|hit| hit.note).collect(),
            algorithm_version: ALGORITHM_VERSION.to_string(),
            generated_at: now,
        })
    }

    /// Rules that fire for `closure`, in evaluation order.
    pub fn evaluate_rules(&self, closure: &RoadClosure) -> Vec<RuleHit> {
        let mut hits = Vec::with_capacity(ClosureRule::ALL.len());

        if closure.location.id == BOCA_CHICA_LOCATION_ID {
            hits.push(hit(
                ClosureRule::LaunchSiteLocation,
                "Road closure at Boca Chica typically indicates Starship test activity".to_string(),
            ));
        }

        let duration_hours = closure.duration_hours();
        if (MIN_TEST_WINDOW_HOURS..=MAX_TEST_WINDOW_HOURS).contains(&duration_hours) {
            hits.push(hit(
                ClosureRule::TestWindowDuration,
                format!(
                    "Closure duration ({}h) matches typical test window",
                    duration_hours.round()
                ),
            ));
        }

        let start_hour = self.config.zone.hour_of(closure.start_date);
        if (FIRST_LAUNCH_HOUR..=LAST_LAUNCH_HOUR).contains(&start_hour) {
            hits.push(hit(
                ClosureRule::LaunchHours,
                "Closure timing aligns with typical launch windows".to_string(),
            ));
        }

        if OFFICIAL_SOURCES.contains(&closure.source.as_str()) {
            hits.push(hit(
                ClosureRule::OfficialSource,
                "Official source increases prediction confidence".to_string(),
            ));
        }

        hits
    }
}

fn hit(rule: ClosureRule, note: String) -> RuleHit {
    RuleHit {
        rule,
        weight: rule.weight(),
        note,
    }
}

fn clamp_confidence(hits: &[RuleHit]) -> u8 {
    let total: u16 = hits.iter().map(|hit| u16::from(hit.weight)).sum();
    total.min(u16::from(MAX_CONFIDENCE)) as u8
}

fn validate(closure: &RoadClosure) -> Result<(), ScoringError> {
    if closure.location.id.trim().is_empty() {
        return Err(ScoringError::MissingLocation {
            closure_id: closure.id.clone(),
        });
    }
    if closure.end_date < closure.start_date {
        return Err(ScoringError::InvertedWindow {
            closure_id: closure.id.clone(),
            start: closure.start_date,
            end: closure.end_date,
        });
    }
    Ok(())
}
