//! A single recorded instant of an activity.

use super::sample::{Sample, SampleKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude_degrees: f64,
    pub longitude_degrees: f64,
}

impl Position {
    pub fn new(latitude_degrees: f64, longitude_degrees: f64) -> Self {
        Self {
            latitude_degrees,
            longitude_degrees,
        }
    }
}

/// One recorded instant: timestamp, optional position fix and samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// When the point was recorded
    pub timestamp: DateTime<Utc>,
    /// Position fix, absent when the receiver had none
    #[serde(default)]
    pub position: Option<Position>,
    /// Samples keyed by kind, at most one per kind
    #[serde(default, with = "sample_map")]
    samples: BTreeMap<SampleKind, Sample>,
}

impl Point {
    /// Create a point without position or samples.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            position: None,
            samples: BTreeMap::new(),
        }
    }

    /// Builder-style position setter.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Builder-style sample setter.
    pub fn with_sample(mut self, kind: SampleKind, value: f64) -> Self {
        self.add_sample(Sample::new(kind, value));
        self
    }

    /// Attach a sample, replacing any existing sample of the same kind.
    pub fn add_sample(&mut self, sample: Sample) -> Option<Sample> {
        self.samples.insert(sample.kind(), sample)
    }

    pub fn sample(&self, kind: SampleKind) -> Option<&Sample> {
        self.samples.get(&kind)
    }

    /// Samples ordered by kind.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.values()
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }
}

/// Samples travel as a `{"Kind": value}` map.
mod sample_map {
    use super::{Sample, SampleKind};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S: Serializer>(
        samples: &BTreeMap<SampleKind, Sample>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let values: BTreeMap<SampleKind, f64> = samples
            .iter()
            .map(|(kind, sample)| (*kind, sample.value()))
            .collect();
        values.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<SampleKind, Sample>, D::Error> {
        let values = BTreeMap::<SampleKind, f64>::deserialize(deserializer)?;
        Ok(values
            .into_iter()
            .map(|(kind, value)| (kind, Sample::new(kind, value)))
            .collect())
    }
}
