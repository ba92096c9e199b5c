use super::domain::{RoadClosure, VehicleSummary};

/// Event and vehicle a closure is believed to precede.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictedLaunch {
    pub event: String,
    pub vehicle: Option<VehicleSummary>,
}

/// Lookup resolving which launch a closure most likely belongs to.
pub trait EventCatalog: Send + Sync {
    fn predicted_launch(&self, closure: &RoadClosure) -> PredictedLaunch;
}

/// Every closure is attributed to a Starship flight test.
#[derive(Debug, Default, Clone, Copy)]
pub struct StarshipCatalog;

impl EventCatalog for StarshipCatalog {
    fn predicted_launch(&self, _closure: &RoadClosure) -> PredictedLaunch {
        PredictedLaunch {
            event: "Starship Flight Test".to_string(),
            vehicle: Some(VehicleSummary {
                id: "80".to_string(),
                name: "Starship".to_string(),
                family: "Starship".to_string(),
                variant: "Block 1".to_string(),
            }),
        }
    }
}
