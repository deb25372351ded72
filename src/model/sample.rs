//! Typed time-series samples attached to recorded points.

use serde::{Deserialize, Serialize};

/// Kind of a recorded measurement.
///
/// The set is closed: every measurement a point can carry is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SampleKind {
    /// Barometric altitude in meters
    Altitude,
    /// Altitude reported by the GPS receiver in meters
    GpsAltitude,
    /// Cadence as reported by the device (double-counted steps/strokes)
    Cadence,
    /// Heart rate in beats per minute
    HeartRate,
    /// Speed in meters per second
    Speed,
    /// Vertical speed in meters per second
    VerticalSpeed,
    /// Power in watts
    Power,
    /// Temperature in degrees Celsius
    Temperature,
    /// Cumulative distance in meters
    Distance,
    /// Absolute pressure in hectopascals
    AbsolutePressure,
    /// Sea level pressure in hectopascals
    SeaLevelPressure,
    /// Number of satellites in view
    NumberOfSatellites,
    /// Device battery charge in percent
    BatteryCharge,
}

impl SampleKind {
    /// Every kind, in declaration order.
    pub const ALL: [SampleKind; 13] = [
        SampleKind::Altitude,
        SampleKind::GpsAltitude,
        SampleKind::Cadence,
        SampleKind::HeartRate,
        SampleKind::Speed,
        SampleKind::VerticalSpeed,
        SampleKind::Power,
        SampleKind::Temperature,
        SampleKind::Distance,
        SampleKind::AbsolutePressure,
        SampleKind::SeaLevelPressure,
        SampleKind::NumberOfSatellites,
        SampleKind::BatteryCharge,
    ];

    /// Human readable name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            SampleKind::Altitude => "Altitude",
            SampleKind::GpsAltitude => "GPS Altitude",
            SampleKind::Cadence => "Cadence",
            SampleKind::HeartRate => "Heart Rate",
            SampleKind::Speed => "Speed",
            SampleKind::VerticalSpeed => "Vertical Speed",
            SampleKind::Power => "Power",
            SampleKind::Temperature => "Temperature",
            SampleKind::Distance => "Distance",
            SampleKind::AbsolutePressure => "Absolute Pressure",
            SampleKind::SeaLevelPressure => "Sea Level Pressure",
            SampleKind::NumberOfSatellites => "Number of Satellites",
            SampleKind::BatteryCharge => "Battery Charge",
        }
    }

    /// Unit string used when displaying a value of this kind.
    pub fn unit(self) -> &'static str {
        match self {
            SampleKind::Altitude | SampleKind::GpsAltitude | SampleKind::Distance => "m",
            SampleKind::Cadence => "rpm",
            SampleKind::HeartRate => "bpm",
            SampleKind::Speed | SampleKind::VerticalSpeed => "m/s",
            SampleKind::Power => "W",
            SampleKind::Temperature => "°C",
            SampleKind::AbsolutePressure | SampleKind::SeaLevelPressure => "hPa",
            SampleKind::NumberOfSatellites => "",
            SampleKind::BatteryCharge => "%",
        }
    }

    /// Number of decimal places kept when displaying a value.
    pub fn display_decimals(self) -> usize {
        match self {
            SampleKind::Speed | SampleKind::VerticalSpeed => 2,
            SampleKind::Temperature
            | SampleKind::AbsolutePressure
            | SampleKind::SeaLevelPressure => 1,
            _ => 0,
        }
    }
}

impl std::fmt::Display for SampleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single typed measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    kind: SampleKind,
    value: f64,
}

impl Sample {
    /// Create a sample of the given kind.
    pub fn new(kind: SampleKind, value: f64) -> Self {
        Self { kind, value }
    }

    pub fn kind(&self) -> SampleKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value rounded to the kind's display precision.
    pub fn display_value(&self) -> String {
        format!("{:.*}", self.kind.display_decimals(), self.value)
    }

    pub fn display_unit(&self) -> &'static str {
        self.kind.unit()
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = self.display_unit();
        if unit.is_empty() {
            write!(f, "{}", self.display_value())
        } else {
            write!(f, "{} {}", self.display_value(), unit)
        }
    }
}
