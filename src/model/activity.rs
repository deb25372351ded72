//! Activities: one continuous recorded exercise segment.

use super::point::Point;
use super::ModelError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sport of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SportType {
    Running,
    Biking,
    Walking,
    Hiking,
    Swimming,
    Rowing,
    Skiing,
    #[default]
    Other,
}

impl SportType {
    pub fn as_str(self) -> &'static str {
        match self {
            SportType::Running => "Running",
            SportType::Biking => "Biking",
            SportType::Walking => "Walking",
            SportType::Hiking => "Hiking",
            SportType::Swimming => "Swimming",
            SportType::Rowing => "Rowing",
            SportType::Skiing => "Skiing",
            SportType::Other => "Other",
        }
    }
}

impl std::fmt::Display for SportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Device or software that recorded the activity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
}

impl Creator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Summary aggregates of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub total_duration_seconds: f64,
    pub total_distance_meters: f64,
}

/// Ordered sequence of points plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub sport_type: SportType,
    pub start_date: DateTime<Utc>,
    pub creator: Creator,
    #[serde(default)]
    pub summary: ActivitySummary,
    #[serde(default)]
    points: Vec<Point>,
}

impl Activity {
    /// Create an activity without points.
    pub fn new(sport_type: SportType, start_date: DateTime<Utc>, creator: Creator) -> Self {
        Self {
            sport_type,
            start_date,
            creator,
            summary: ActivitySummary::default(),
            points: Vec::new(),
        }
    }

    /// Builder-style summary setter.
    pub fn with_summary(mut self, total_duration_seconds: f64, total_distance_meters: f64) -> Self {
        self.summary = ActivitySummary {
            total_duration_seconds,
            total_distance_meters,
        };
        self
    }

    /// Append a point. Points must not go back in time; equal timestamps are kept in order.
    pub fn add_point(&mut self, point: Point) -> Result<(), ModelError> {
        if let Some(last) = self.points.last() {
            if point.timestamp < last.timestamp {
                return Err(ModelError::PointOutOfOrder {
                    index: self.points.len(),
                });
            }
        }
        self.points.push(point);
        Ok(())
    }

    /// Build an activity from points that are already ordered.
    pub fn with_points(
        mut self,
        points: impl IntoIterator<Item = Point>,
    ) -> Result<Self, ModelError> {
        for point in points {
            self.add_point(point)?;
        }
        Ok(self)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first_point(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Check the ordering invariant, e.g. after deserialization.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self
            .points
            .windows(2)
            .position(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            Some(i) => Err(ModelError::PointOutOfOrder { index: i + 1 }),
            None => Ok(()),
        }
    }
}
