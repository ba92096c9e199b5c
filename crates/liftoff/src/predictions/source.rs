use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use super::clock::IdGenerator;
use super::domain::{ClosureLocation, ClosureStatus, RoadClosure};

pub const BOCA_CHICA_LOCATION_ID: &str = "boca-chica";
pub const CAMERON_COUNTY_SOURCE: &str = "Cameron County";
pub const SPACEX_SOURCE: &str = "SpaceX";

/// Starbase launch site identifier in Launch Library 2.
const STARBASE_SITE_ID: &str = "143";

/// Feed of closure notices to be scored.
pub trait ClosureSource: Send + Sync {
    /// Closures that are scheduled or currently active, relative to `now`.
    fn list_active_closures(&self, now: DateTime<Utc>)
        -> Result<Vec<RoadClosure>, ClosureSourceError>;
}

/// Failure building or fetching closure records.
#[derive(Debug, thiserror::Error)]
pub enum ClosureSourceError {
    #[error("closure location reference is malformed: {0}")]
    MalformedLocation(String),
    #[error("closure window starting {offset_hours}h from now is out of range")]
    WindowOutOfRange { offset_hours: i64 },
    #[error("closure source unavailable: {0}")]
    Unavailable(String),
}

/// Built-in source producing the Boca Chica beach closure notice.
pub struct MockClosureSource {
    ids: Arc<dyn IdGenerator>,
}

impl MockClosureSource {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    fn boca_chica(&self, now: DateTime<Utc>) -> Result<RoadClosure, ClosureSourceError> {
        let location = ClosureLocation {
            id: BOCA_CHICA_LOCATION_ID.to_string(),
            name: "Boca Chica Beach".to_string(),
            region: "Texas".to_string(),
            country: "USA".to_string(),
            related_site_id: Some(STARBASE_SITE_ID.to_string()),
        };

        closure_notice(
            self.ids.as_ref(),
            "bc",
            location,
            now,
            WindowOffsets {
                start_hours: 48,
                end_hours: 72,
            },
            CAMERON_COUNTY_SOURCE,
        )
    }
}

impl ClosureSource for MockClosureSource {
    fn list_active_closures(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<RoadClosure>, ClosureSourceError> {
        let candidates = vec![self.boca_chica(now)?];
        Ok(retain_exposable(candidates))
    }
}

/// Hours after `now` at which a notice window opens and closes.
#[derive(Debug, Clone, Copy)]
pub struct WindowOffsets {
    pub start_hours: i64,
    pub end_hours: i64,
}

/// Assemble a scheduled closure notice whose window is relative to `now`.
pub fn closure_notice(
    ids: &dyn IdGenerator,
    id_prefix: &str,
    location: ClosureLocation,
    now: DateTime<Utc>,
    window: WindowOffsets,
    source: &str,
) -> Result<RoadClosure, ClosureSourceError> {
    if location.id.trim().is_empty() {
        return Err(ClosureSourceError::MalformedLocation(format!(
            "location '{}' has no identifier",
            location.name
        )));
    }

    let start_date = offset_from(now, window.start_hours)?;
    let end_date = offset_from(now, window.end_hours)?;

    Ok(RoadClosure {
        id: ids.next_id(id_prefix, now),
        location,
        start_date,
        end_date,
        status: ClosureStatus::Scheduled,
        source: source.to_string(),
        prediction: None,
        created_at: now,
        updated_at: now,
    })
}

/// Drop closures that are cancelled or already completed.
pub fn retain_exposable(closures: Vec<RoadClosure>) -> Vec<RoadClosure> {
    closures
        .into_iter()
        .filter(|closure| closure.status.is_exposable())
        .collect()
}

fn offset_from(now: DateTime<Utc>, hours: i64) -> Result<DateTime<Utc>, ClosureSourceError> {
    Duration::try_hours(hours)
        .and_then(|offset| now.checked_add_signed(offset))
        .ok_or(ClosureSourceError::WindowOutOfRange {
            offset_hours: hours,
        })
}
