//! Carry of samples recorded between position fixes.
//!
//! Sensors keep reporting while the GPS has no fix. Those points are not
//! written as trackpoints; their samples ride along until the next point with
//! a position and are attached to it.

use crate::model::{Point, Sample, SampleKind};
use std::collections::BTreeMap;

/// Samples resolved for one kind each.
pub type SampleSet<'a> = BTreeMap<SampleKind, &'a Sample>;

/// Carry state threaded through a walk over an activity's points.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CarryState<'a> {
    /// Nothing pending
    #[default]
    Idle,
    /// Samples from unpositioned points waiting for the next fix
    Carrying(SampleSet<'a>),
}

impl<'a> CarryState<'a> {
    /// Take in the samples of an unpositioned point. A kind already carried
    /// keeps its first value.
    pub fn absorb(self, point: &'a Point) -> Self {
        let mut carried = match self {
            CarryState::Idle => SampleSet::new(),
            CarryState::Carrying(carried) => carried,
        };
        for sample in point.samples() {
            carried.entry(sample.kind()).or_insert(sample);
        }
        CarryState::Carrying(carried)
    }

    /// Resolve the samples of a positioned point: its own samples plus every
    /// carried kind it lacks. The carry is consumed.
    pub fn resolve(self, point: &'a Point) -> SampleSet<'a> {
        let mut resolved: SampleSet<'a> = point.samples().map(|s| (s.kind(), s)).collect();
        if let CarryState::Carrying(carried) = self {
            for (kind, sample) in carried {
                resolved.entry(kind).or_insert(sample);
            }
        }
        resolved
    }

    /// Number of samples waiting.
    pub fn len(&self) -> usize {
        match self {
            CarryState::Idle => 0,
            CarryState::Carrying(carried) => carried.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
