use std::sync::Arc;

use tracing::debug;

use super::catalog::StarshipCatalog;
use super::clock::{Clock, IdGenerator};
use super::domain::ActivePredictions;
use super::scoring::{ConfidenceScorer, ScoringConfig, ScoringError};
use super::source::{retain_exposable, ClosureSource, ClosureSourceError, MockClosureSource};

/// Service composing the closure source, scorer, and clock.
pub struct PredictionService {
    source: Arc<dyn ClosureSource>,
    scorer: ConfidenceScorer,
    clock: Arc<dyn Clock>,
}

impl PredictionService {
    pub fn new(
        source: Arc<dyn ClosureSource>,
        scorer: ConfidenceScorer,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            scorer,
            clock,
        }
    }

    /// Mock Boca Chica source scored against the Starship catalog.
    pub fn with_mock_source(
        config: ScoringConfig,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let source = Arc::new(MockClosureSource::new(ids));
        let scorer = ConfidenceScorer::new(config, Arc::new(StarshipCatalog));
        Self::new(source, scorer, clock)
    }

    /// Build, filter, and score the current closures. Any failure aborts the whole batch.
    pub fn active_predictions(&self) -> Result<ActivePredictions, PredictionError> {
        let now = self.clock.now();
        let closures = retain_exposable(self.source.list_active_closures(now)?);

        let road_closures = closures
            .into_iter()
            .map(|mut closure| {
                let prediction = self.scorer.score(&closure, now)?;
                closure.prediction = Some(prediction);
                Ok(closure)
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        debug!(count = road_closures.len(), "scored active road closures");

        Ok(ActivePredictions {
            road_closures,
            last_updated: now,
        })
    }
}

/// Error raised while aggregating predictions.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error(transparent)]
    Source(#[from] ClosureSourceError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
