//! Sample kind dispatch for TCX trackpoints.
//!
//! A closed table maps each exportable [`SampleKind`] to the TCX field it
//! fills and the transform applied to its value. Kinds without a row are not
//! representable in TCX and are left out of the document. Table order is the
//! emission order inside a trackpoint.

use crate::model::SampleKind;

/// TCX trackpoint field filled by a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TcxField {
    /// `<AltitudeMeters>`
    AltitudeMeters,
    /// `<Cadence>`
    Cadence,
    /// `<HeartRateBpm><Value>`
    HeartRateBpm,
    /// `<Extensions><TPX><Speed>`
    Speed,
}

impl TcxField {
    pub fn element_name(self) -> &'static str {
        match self {
            TcxField::AltitudeMeters => "AltitudeMeters",
            TcxField::Cadence => "Cadence",
            TcxField::HeartRateBpm => "HeartRateBpm",
            TcxField::Speed => "Speed",
        }
    }

    /// Whether the field lives in the ActivityExtension `TPX` block.
    pub fn is_extension(self) -> bool {
        matches!(self, TcxField::Speed)
    }
}

/// Value transform applied before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Written as recorded
    Raw,
    /// Rounded to the nearest integer
    Round,
    /// Halved then rounded; devices report double cadence
    HalveAndRound,
}

impl Transform {
    pub fn apply(self, value: f64) -> FieldValue {
        match self {
            Transform::Raw => FieldValue::Decimal(value),
            Transform::Round => FieldValue::Integer(value.round() as i64),
            Transform::HalveAndRound => FieldValue::Integer((value / 2.0).round() as i64),
        }
    }
}

/// A transformed value ready to be written as element text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Decimal(f64),
    Integer(i64),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Decimal(v) => write!(f, "{}", v),
            FieldValue::Integer(v) => write!(f, "{}", v),
        }
    }
}

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchRule {
    pub kind: SampleKind,
    pub field: TcxField,
    pub transform: Transform,
}

/// Exportable kinds, in emission order.
pub const DISPATCH_TABLE: &[DispatchRule] = &[
    DispatchRule {
        kind: SampleKind::Altitude,
        field: TcxField::AltitudeMeters,
        transform: Transform::Raw,
    },
    DispatchRule {
        kind: SampleKind::Cadence,
        field: TcxField::Cadence,
        transform: Transform::HalveAndRound,
    },
    DispatchRule {
        kind: SampleKind::HeartRate,
        field: TcxField::HeartRateBpm,
        transform: Transform::Round,
    },
    DispatchRule {
        kind: SampleKind::Speed,
        field: TcxField::Speed,
        transform: Transform::Raw,
    },
];

/// Look up the rule for a kind, `None` if TCX cannot represent it.
pub fn rule_for(kind: SampleKind) -> Option<&'static DispatchRule> {
    DISPATCH_TABLE.iter().find(|rule| rule.kind == kind)
}

pub fn is_representable(kind: SampleKind) -> bool {
    rule_for(kind).is_some()
}
