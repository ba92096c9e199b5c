use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for road closure notices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClosureId(pub String);

impl std::fmt::Display for ClosureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Place covered by a closure notice, optionally tied to a known launch site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureLocation {
    pub id: String,
    pub name: String,
    pub region: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_site_id: Option<String>,
}

/// Lifecycle state published with a closure notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosureStatus {
    Scheduled,
    Active,
    Cancelled,
    Completed,
}

impl ClosureStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ClosureStatus::Scheduled => "scheduled",
            ClosureStatus::Active => "active",
            ClosureStatus::Cancelled => "cancelled",
            ClosureStatus::Completed => "completed",
        }
    }

    /// Only upcoming or in-progress closures are served to clients.
    pub const fn is_exposable(self) -> bool {
        matches!(self, ClosureStatus::Scheduled | ClosureStatus::Active)
    }
}

/// Road or area closure that may signal launch-related test activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadClosure {
    pub id: ClosureId,
    pub location: ClosureLocation,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: ClosureStatus,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<LaunchPrediction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RoadClosure {
    /// Closure window length in fractional hours. Negative when the window is inverted.
    pub fn duration_hours(&self) -> f64 {
        let millis = (self.end_date - self.start_date).num_milliseconds();
        millis as f64 / (1000.0 * 60.0 * 60.0)
    }
}

/// Minimal vehicle reference attached to a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub id: String,
    pub name: String,
    pub family: String,
    pub variant: String,
}

/// Scorer output for a single closure, including the rule trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPrediction {
    pub confidence: u8,
    pub predicted_event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_vehicle: Option<VehicleSummary>,
    pub reasoning: Vec<String>,
    pub algorithm_version: String,
    pub generated_at: DateTime<Utc>,
}

impl LaunchPrediction {
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }
}

/// Coarse bucket used when presenting a confidence value to people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Moderate,
    Low,
    Minimal,
}

impl ConfidenceTier {
    pub const fn from_confidence(confidence: u8) -> Self {
        match confidence {
            75.. => ConfidenceTier::High,
            50..=74 => ConfidenceTier::Moderate,
            25..=49 => ConfidenceTier::Low,
            _ => ConfidenceTier::Minimal,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Moderate => "moderate",
            ConfidenceTier::Low => "low",
            ConfidenceTier::Minimal => "minimal",
        }
    }
}

/// Payload served by the predictions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePredictions {
    pub road_closures: Vec<RoadClosure>,
    pub last_updated: DateTime<Utc>,
}
