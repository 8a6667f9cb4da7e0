//! The angle is stored as a whole number of small fixed units,
//! so the value given once never drifts on conversions.
//!
//! The size of the unit is chosen to represent _both_:
//!  - decimal fractions of a degree up to the 10<sup>-11</sup> degree;
//!  - arc seconds with up to 9 decimal digits.
//!
//! All the derived values (decimal degrees, degrees-minutes-seconds)
//! are computed on demand from the units and never written back.

use std::{
    convert::TryFrom,
    fmt,
    ops::{Add, Neg, Sub},
};

use geocoord_types::ParseError;
use num_traits::{CheckedAdd, CheckedSub, ToPrimitive};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::div_mod;

use super::consts::{
    ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, FULL_TURN_DEG, HALF_TURN_DEG,
    MINUTES_IN_DEGREE, SECONDS_IN_MINUTE,
};

/// Signed angle with the exact fixed-point representation.
///
/// Two angles are equal only if their units are equal, no tolerance is applied.
///
/// ```
/// # use geocoord::ExactDegree;
/// # use std::convert::TryFrom;
/// let a = ExactDegree::try_from(45.25).unwrap();
/// let b = ExactDegree::with_dms(false, 45, 15.0, 0.0).unwrap();
/// assert_eq!(a, b);
///
/// let c = ExactDegree::try_from(45.250_001).unwrap();
/// assert_ne!(a, c);
/// ```
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExactDegree {
    units: i64,
}

impl ExactDegree {
    // The number of units (N) obeys the following rules:
    // - N is divisible by `3600 * 10^9` to keep nano arc seconds exact;
    // - N is divisible by `10^11` to keep 11 decimal digits of a degree exact;
    // - `N * 2500` fits into 2^53 so that the angles of the globe are exact `f64` numerators.
    const UNITS_IN_SECOND: i64 = 1_000_000_000;
    const UNITS_IN_MINUTE: i64 = Self::UNITS_IN_SECOND * SECONDS_IN_MINUTE;
    const UNITS_IN_DEGREE: i64 = Self::UNITS_IN_MINUTE * MINUTES_IN_DEGREE;

    /// The angle of the given raw units
    pub const fn from_units(units: i64) -> Self {
        Self { units }
    }

    /// The raw units of the angle: 3.6 * 10<sup>12</sup> of them make a degree
    pub const fn units(self) -> i64 {
        self.units
    }

    /// No angle
    pub const fn zero() -> Self {
        Self { units: 0 }
    }

    /// The angle of two exactly opposite directions (180°)
    pub const fn half_turn() -> Self {
        Self {
            units: HALF_TURN_DEG * Self::UNITS_IN_DEGREE,
        }
    }

    const fn full_turn() -> Self {
        Self {
            units: FULL_TURN_DEG * Self::UNITS_IN_DEGREE,
        }
    }

    /// Sum up the degrees, minutes and seconds and apply the sign.
    ///
    /// The minutes and seconds may have fractions, they are never truncated.
    ///
    /// # Errors
    /// When the minutes or seconds are not finite or too big to be stored.
    pub fn with_dms(
        negative: bool,
        degrees: u32,
        minutes: f64,
        seconds: f64,
    ) -> Result<Self, ParseError> {
        let overflow = || ParseError::NotFinite(f64::from(degrees));

        let degrees = i64::from(degrees)
            .checked_mul(Self::UNITS_IN_DEGREE)
            .ok_or_else(overflow)?;
        let minutes = scale(minutes, Self::UNITS_IN_MINUTE)?;
        let seconds = scale(seconds, Self::UNITS_IN_SECOND)?;

        let units = degrees
            .checked_add(minutes)
            .and_then(|units| units.checked_add(seconds))
            .ok_or_else(overflow)?;

        let angle = Self { units };
        Ok(if negative { -angle } else { angle })
    }

    /// The whole number of degrees (truncated toward zero)
    pub const fn degrees(self) -> i64 {
        self.units / Self::UNITS_IN_DEGREE
    }

    /// Is the angle less than zero?
    pub const fn is_negative(self) -> bool {
        self.units < 0
    }

    /// The angle without its sign
    pub const fn abs(self) -> Self {
        Self {
            units: self.units.saturating_abs(),
        }
    }

    /// The decimal degrees
    pub fn to_f64(self) -> f64 {
        // single division of exactly representable numbers rounds once
        self.units as f64 / Self::UNITS_IN_DEGREE as f64
    }

    /// Split the angle into the sign, whole degrees, whole arc minutes
    /// and arc seconds with fraction
    pub fn dms_parts(self) -> (bool, u32, u32, f64) {
        let units_in_degree = Self::UNITS_IN_DEGREE.unsigned_abs();
        let units_in_minute = Self::UNITS_IN_MINUTE.unsigned_abs();

        let (degrees, rest) = div_mod(self.units.unsigned_abs(), units_in_degree);
        let (minutes, seconds) = div_mod(rest, units_in_minute);

        // `u64::MAX / units_in_degree` is less than `u32::MAX`
        let degrees = degrees as u32;
        let minutes = minutes as u32;
        let seconds = seconds as f64 / Self::UNITS_IN_SECOND as f64;
        (self.is_negative(), degrees, minutes, seconds)
    }

    /// Bring the longitude-like angle into the range `(-180°, 180°]`
    pub fn wrap_half_turn(self) -> Self {
        let full = Self::full_turn().units;
        let units = self.units.rem_euclid(full);
        if units > Self::half_turn().units {
            Self { units: units - full }
        } else {
            Self { units }
        }
    }
}

/// Multiply the decimal number by the number of units it consists of.
/// Integer and fractional parts are scaled separately to not lose the precision.
fn scale(value: f64, units_in_one: i64) -> Result<i64, ParseError> {
    let not_finite = || ParseError::NotFinite(value);

    let whole = value.trunc().to_i64().ok_or_else(not_finite)?;
    let fraction = (value.fract() * units_in_one as f64)
        .round()
        .to_i64()
        .ok_or_else(not_finite)?;

    whole
        .checked_mul(units_in_one)
        .and_then(|whole| whole.checked_add(fraction))
        .ok_or_else(not_finite)
}

impl TryFrom<f64> for ExactDegree {
    type Error = ParseError;

    /// The decimal number is rounded to the nearest unit (10<sup>-11</sup> of the degree is exact)
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        scale(value, Self::UNITS_IN_DEGREE).map(Self::from_units)
    }
}

impl From<i32> for ExactDegree {
    fn from(degrees: i32) -> Self {
        Self {
            units: i64::from(degrees) * Self::UNITS_IN_DEGREE,
        }
    }
}

impl Neg for ExactDegree {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            units: self.units.saturating_neg(),
        }
    }
}

impl Add for ExactDegree {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            units: self.units.saturating_add(rhs.units),
        }
    }
}

impl Sub for ExactDegree {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            units: self.units.saturating_sub(rhs.units),
        }
    }
}

impl CheckedAdd for ExactDegree {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.units.checked_add(rhs.units).map(Self::from_units)
    }
}

impl CheckedSub for ExactDegree {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.units.checked_sub(rhs.units).map(Self::from_units)
    }
}

impl fmt::Display for ExactDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // DMS
        if f.alternate() {
            let (negative, deg, arc_min, arc_sec) = self.dms_parts();
            if negative {
                write!(f, "-")?;
            }
            write!(f, "{}{}{}{}", deg, DEGREE_SIGN, arc_min, ARC_MINUTE_SIGN)?;
            let precision = f.precision().unwrap_or(0);
            write!(f, "{:.*}{}", precision, arc_sec, ARC_SECOND_SIGN)
        } else {
            write!(f, "{}{}", self.to_f64(), DEGREE_SIGN)
        }
    }
}
