use std::{cmp::Ordering, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The label of a [`Measurement`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Unit {
    /// Kilometres
    #[default]
    Kilometers,
    /// Metres
    Meters,
    /// International (statute) miles
    Miles,
    /// Nautical miles
    NauticalMiles,
    /// Angular degrees
    Degrees,
}

impl Unit {
    /// How many kilometres are in the single unit.
    /// `None` for the units not measuring a distance.
    pub const fn in_kilometers(self) -> Option<f64> {
        match self {
            Self::Kilometers => Some(1.0),
            Self::Meters => Some(0.001),
            Self::Miles => Some(1.609_344),
            Self::NauticalMiles => Some(1.852),
            Self::Degrees => None,
        }
    }

    /// Short symbol of the unit
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Meters => "m",
            Self::Miles => "mi",
            Self::NauticalMiles => "nmi",
            Self::Degrees => "°",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A number paired with its unit.
///
/// Only the measurements of the same unit are ordered.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    value: f64,
    unit: Unit,
}

impl Measurement {
    /// Label the value with the unit
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// The numeric part
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The unit label
    pub const fn unit(self) -> Unit {
        self.unit
    }
}

impl PartialOrd for Measurement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit == other.unit {
            self.value.partial_cmp(&other.value)
        } else {
            None
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*}", precision, self.value)?;
        } else {
            write!(f, "{}", self.value)?;
        }

        match self.unit {
            // no space before the degree sign
            Unit::Degrees => write!(f, "{}", self.unit),
            _ => write!(f, " {}", self.unit),
        }
    }
}

/// Decimal latitude and longitude, the exported mapping form of a coordinate
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
    /// Decimal degrees north (positive) or south (negative) of the equator
    pub lat: f64,
    /// Decimal degrees east (positive) or west (negative) of the prime meridian
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_distance() {
        let m = Measurement::new(12.5, Unit::Kilometers);
        assert_eq!(m.to_string(), "12.5 km");
        assert_eq!(format!("{:.2}", m), "12.50 km");
    }

    #[test]
    fn display_angle() {
        let m = Measurement::new(87.123_456, Unit::Degrees);
        assert_eq!(format!("{:.1}", m), "87.1°");
    }

    #[test]
    fn only_lengths_convert_to_kilometers() {
        assert_eq!(Unit::Kilometers.in_kilometers(), Some(1.0));
        assert_eq!(Unit::NauticalMiles.in_kilometers(), Some(1.852));
        assert!(Unit::Degrees.in_kilometers().is_none());
    }

    #[test]
    fn compare_same_units() {
        let near = Measurement::new(12.5, Unit::Kilometers);
        let far = Measurement::new(467.5, Unit::Kilometers);
        assert!(near < far);
        assert_eq!(near.partial_cmp(&near), Some(Ordering::Equal));
    }

    #[test]
    fn different_units_are_not_ordered() {
        let km = Measurement::new(1.0, Unit::Kilometers);
        let mi = Measurement::new(1.0, Unit::Miles);
        assert_eq!(km.partial_cmp(&mi), None);
        assert!(!(km < mi) && !(km > mi));
    }

    #[test]
    fn default_unit_is_kilometer() {
        assert_eq!(Unit::default(), Unit::Kilometers);
    }
}
