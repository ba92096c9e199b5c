//! Road-closure launch predictions.
//!
//! A [`ClosureSource`] supplies closure notices, the [`ConfidenceScorer`] rates each one
//! against a fixed set of weighted rules, and [`PredictionService`] bundles the scored
//! closures for the `/api/predictions` endpoint.

pub mod catalog;
pub mod clock;
pub mod domain;
pub mod router;
pub mod scoring;
pub mod service;
pub mod source;

#[cfg(test)]
mod tests;

pub use catalog::{EventCatalog, PredictedLaunch, StarshipCatalog};
pub use clock::{Clock, FixedClock, IdGenerator, SystemClock, TimestampIdGenerator};
pub use domain::{
    ActivePredictions, ClosureId, ClosureLocation, ClosureStatus, ConfidenceTier,
    LaunchPrediction, RoadClosure, VehicleSummary,
};
pub use router::{prediction_router, PREDICTIONS_CACHE_CONTROL};
pub use scoring::{
    ClosureRule, ConfidenceScorer, RuleHit, ScoringConfig, ScoringError, ScoringZone,
    ALGORITHM_VERSION, MAX_CONFIDENCE,
};
pub use service::{PredictionError, PredictionService};
pub use source::{ClosureSource, ClosureSourceError, MockClosureSource};
