//! In-memory activity model: events, activities, points and samples.
//!
//! The model is built by upstream import or recording code and only read by
//! the exporters.

pub mod activity;
pub mod event;
pub mod point;
pub mod sample;

pub use activity::{Activity, ActivitySummary, Creator, SportType};
pub use event::{Event, EventSummary};
pub use point::{Point, Position};
pub use sample::{Sample, SampleKind};

use thiserror::Error;

/// Errors from building or validating the model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A point is earlier than the one before it
    #[error("Point {index} is earlier than the previous point")]
    PointOutOfOrder { index: usize },

    /// An activity of an event failed validation
    #[error("Activity {activity_index} is invalid: {source}")]
    InvalidActivity {
        activity_index: usize,
        #[source]
        source: Box<ModelError>,
    },
}
