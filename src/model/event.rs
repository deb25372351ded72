//! Events: the root of an export.

use super::activity::Activity;
use super::ModelError;
use serde::{Deserialize, Serialize};

/// Summary aggregates across all activities of an event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EventSummary {
    pub total_duration_seconds: f64,
    pub total_distance_meters: f64,
}

impl EventSummary {
    /// Sum the summaries of the given activities.
    pub fn from_activities(activities: &[Activity]) -> Self {
        activities.iter().fold(Self::default(), |acc, activity| Self {
            total_duration_seconds: acc.total_duration_seconds
                + activity.summary.total_duration_seconds,
            total_distance_meters: acc.total_distance_meters
                + activity.summary.total_distance_meters,
        })
    }
}

/// One exportable session.
///
/// Deserialized input without a `summary` gets the aggregate of its
/// activities, as with [`Event::new`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawEvent")]
pub struct Event {
    pub name: String,
    pub activities: Vec<Activity>,
    pub summary: EventSummary,
}

/// Wire shape of [`Event`] with an optional summary.
#[derive(Deserialize)]
struct RawEvent {
    #[serde(default)]
    name: String,
    #[serde(default)]
    activities: Vec<Activity>,
    #[serde(default)]
    summary: Option<EventSummary>,
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        let summary = raw
            .summary
            .unwrap_or_else(|| EventSummary::from_activities(&raw.activities));
        Self {
            name: raw.name,
            activities: raw.activities,
            summary,
        }
    }
}

impl Event {
    /// Create an event whose summary aggregates its activities.
    pub fn new(name: impl Into<String>, activities: Vec<Activity>) -> Self {
        let summary = EventSummary::from_activities(&activities);
        Self {
            name: name.into(),
            activities,
            summary,
        }
    }

    /// Builder-style summary override.
    pub fn with_summary(mut self, summary: EventSummary) -> Self {
        self.summary = summary;
        self
    }

    /// Check every activity's point ordering.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (activity_index, activity) in self.activities.iter().enumerate() {
            activity.validate().map_err(|e| ModelError::InvalidActivity {
                activity_index,
                source: Box::new(e),
            })?;
        }
        Ok(())
    }
}
