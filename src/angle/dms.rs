//! Degree-Minute-Second (DMS) representation of an angle
//! <https://en.wikipedia.org/wiki/Degree_(angle)#Subdivisions>
//!
//! The sign of the angle comes either from the hemisphere letter (N, S, E, W)
//! or, if there is no letter, from the sign of the degrees.

use std::{convert::TryFrom, fmt, str::FromStr};

use geocoord_types::{Axis, Hemisphere, ParseError};
use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::StripChar;

use super::{
    consts::{ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE, SECONDS_IN_MINUTE},
    ExactDegree,
};

/// Degrees, minutes, seconds and the optional hemisphere.
///
/// The degrees are whole (`-0.0` is a valid value meaning the negative angle
/// with zero degrees), the minutes and seconds can have fractional parts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dms {
    degrees: f64,
    minutes: f64,
    seconds: f64,
    hemisphere: Option<Hemisphere>,
}

impl Dms {
    /// Signed angle without a hemisphere.
    /// Only the whole part of the `degrees` is taken.
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            degrees: degrees.trunc(),
            minutes,
            seconds,
            hemisphere: None,
        }
    }

    /// Attach the hemisphere which overrides the sign of the degrees
    pub const fn with_hemisphere(self, hemisphere: Hemisphere) -> Self {
        Self {
            hemisphere: Some(hemisphere),
            ..self
        }
    }

    /// The whole degrees
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// The arc minutes
    pub const fn minutes(&self) -> f64 {
        self.minutes
    }

    /// The arc seconds
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// The direction of the angle, if specified
    pub const fn hemisphere(&self) -> Option<Hemisphere> {
        self.hemisphere
    }

    /// Zero degrees are considered non-negative unless it is explicitly `-0`
    fn is_negative(&self) -> bool {
        self.hemisphere.map_or_else(
            || self.degrees.is_sign_negative(),
            Hemisphere::is_negative,
        )
    }

    /// Sum up the parts into the exact angle
    ///
    /// # Errors
    /// When some part is not finite or is too big to be stored.
    pub fn to_exact(&self) -> Result<ExactDegree, ParseError> {
        let degrees = self.degrees.abs();
        if !degrees.is_finite() {
            return Err(ParseError::NotFinite(degrees));
        }
        let whole = u32::try_from(degrees as i64).map_err(|_| ParseError::NotFinite(degrees))?;
        ExactDegree::with_dms(self.is_negative(), whole, self.minutes, self.seconds)
    }
}

/// The exact angle of the DMS parts.
///
/// ```
/// # use geocoord::{decimal_from_dms, ExactDegree};
/// # use std::convert::TryFrom;
/// let west = decimal_from_dms((70, 40, 0, 'W')).unwrap();
/// assert_eq!(west, decimal_from_dms((-70, 40)).unwrap());
/// assert!((west.to_f64() + 70.666_667).abs() < 1e-6);
///
/// assert!(decimal_from_dms((70, 40, 0, 'X')).is_err());
/// ```
///
/// # Errors
/// - the hemisphere letter is not one of `N`, `S`, `E`, `W`;
/// - the parts are not finite or too big.
pub fn decimal_from_dms<T>(parts: T) -> Result<ExactDegree, ParseError>
where
    Dms: TryFrom<T, Error = ParseError>,
{
    Dms::try_from(parts)?.to_exact()
}

/// Split the angle into degrees, whole minutes and seconds.
///
/// With the `direction` given, the degrees are unsigned and the sign
/// goes to the hemisphere of that axis.
/// Otherwise, the degrees carry the sign.
pub fn decimal_to_dms(value: ExactDegree, direction: Option<Axis>) -> Dms {
    let (negative, degrees, minutes, seconds) = value.dms_parts();
    let degrees = f64::from(degrees);
    let minutes = f64::from(minutes);

    if let Some(axis) = direction {
        Dms::new(degrees, minutes, seconds).with_hemisphere(axis.hemisphere(negative))
    } else if negative {
        // `-0.0` keeps the sign of the angles in (-1°, 0°)
        Dms::new(-degrees, minutes, seconds)
    } else {
        Dms::new(degrees, minutes, seconds)
    }
}

// `From` is not implemented on purpose: its blanket `TryFrom` has the `Infallible` error,
// while all the DMS sources should be interchangeable in the `decimal_from_dms`
macro_rules! try_from_tuples {
    ($($t:ty => |$value:ident| $body:expr;)+) => {
        $(
            impl TryFrom<$t> for Dms {
                type Error = ParseError;

                fn try_from($value: $t) -> Result<Self, Self::Error> {
                    Ok($body)
                }
            }
        )+
    };
}

try_from_tuples! {
    i32 => |value| Self::new(f64::from(value), 0.0, 0.0);
    (i32, u32) => |value| Self::new(f64::from(value.0), f64::from(value.1), 0.0);
    (i32, u32, u32) => |value| {
        Self::new(f64::from(value.0), f64::from(value.1), f64::from(value.2))
    };
    &Dms => |value| *value;
}

impl TryFrom<(i32, u32, u32, char)> for Dms {
    type Error = ParseError;

    fn try_from(value: (i32, u32, u32, char)) -> Result<Self, Self::Error> {
        let (deg, min, sec, letter) = value;
        let hemisphere = Hemisphere::try_from(letter)?;
        // the letter defines the sign, so only the magnitude of the degrees matters
        Ok(Self::new(f64::from(deg.unsigned_abs()), f64::from(min), f64::from(sec))
            .with_hemisphere(hemisphere))
    }
}

impl TryFrom<&str> for Dms {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn parse_dms_re() -> String {
    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<sign>[-+])?                                 # optional sign
        (?P<deg>\d{{1,3}})                              # mandatory degree VALUE
        (?:[{deg}*]|\x20|$)                             # degree sign (can be omitted before the space or the end)
        (?:\x20?                                        # minutes group optionally started with the space
            (?P<min>\d{{1,2}}(?:\.\d+)?)                    # minutes VALUE with optional fraction
            [{min}']                                        # arcminute sign
        )?                                              # minutes are optional
        (?:\x20?                                        # seconds group optionally started with the space
            (?P<sec>\d{{1,2}}(?:\.\d+)?)                    # seconds VALUE with optional fraction
            [{sec}"]                                        # arcsecond sign
        )?                                              # seconds are optional
        $                                           # match the whole line till the end
        "#,
        deg = DEGREE_SIGN,
        min = ARC_MINUTE_SIGN,
        sec = ARC_SECOND_SIGN,
    )
}

lazy_static! {
    static ref RE_DMS: Regex = Regex::new(&parse_dms_re()).expect("DMS regex is valid");
}

impl Dms {
    fn parse_notation(s: &str) -> Result<Self, ParseError> {
        let not_dms = || ParseError::DmsNotation(s.to_string());

        let capture = RE_DMS.captures(s).ok_or_else(not_dms)?;
        let deg: f64 = capture.name("deg").ok_or_else(not_dms)?.as_str().parse()?;
        let min = capture.name("min").map_or("0", |m| m.as_str()).parse()?;
        let sec = capture.name("sec").map_or("0", |m| m.as_str()).parse()?;

        let deg = match capture.name("sign").map(|m| m.as_str()) {
            Some("-") => -deg,
            _ => deg,
        };
        Ok(Self::new(deg, min, sec))
    }

    fn parse_with_hemisphere(s: &str, letter: char) -> Result<Self, ParseError> {
        let hemisphere = Hemisphere::try_from(letter)?;
        // single space is allowed
        let s = s.strip_prefix(' ').unwrap_or(s);
        let s = s.strip_suffix(' ').unwrap_or(s);
        if s.starts_with(|c| c == '-' || c == '+') {
            // the sign and the letter are mutually exclusive
            return Err(ParseError::DmsNotation(s.to_string()));
        }
        Self::parse_notation(s).map(|dms| dms.with_hemisphere(hemisphere))
    }
}

impl Dms {
    /// Round the seconds to the given number of decimals
    /// carrying the overflow into the minutes and degrees
    fn rounded(&self, precision: usize) -> (f64, f64, f64) {
        // nano arc seconds are the finest stored fraction
        let scale = 10_f64.powi(precision.min(9) as i32);
        let mut seconds = (self.seconds * scale).round() / scale;
        let mut minutes = self.minutes;
        let mut degrees = self.degrees;

        let full_minute = SECONDS_IN_MINUTE as f64;
        let full_degree = MINUTES_IN_DEGREE as f64;
        if seconds >= full_minute && minutes.fract() == 0.0 {
            seconds -= full_minute;
            minutes += 1.0;
            if minutes >= full_degree {
                minutes -= full_degree;
                // away from zero, keeping the sign of `-0.0`
                degrees = (degrees.abs() + 1.0).copysign(degrees);
            }
        }
        (degrees, minutes, seconds)
    }
}

impl FromStr for Dms {
    type Err = ParseError;

    /// Parse the DMS angle in one of the forms:
    /// - `50°27′0″N` (Unicode signs);
    /// - `50*27'0"N` (ASCII signs);
    /// - `N50°27′` (hemisphere prefix);
    /// - `-33°27′44.5″` (signed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (rest, last) = s.split_last().ok_or(ParseError::EmptyString)?;
        if last.is_ascii_alphabetic() {
            return Self::parse_with_hemisphere(rest, last);
        }

        let (first, rest) = s.split_first().ok_or(ParseError::EmptyString)?;
        if first.is_ascii_alphabetic() {
            return Self::parse_with_hemisphere(rest, first);
        }

        Self::parse_notation(s)
    }
}

impl fmt::Display for Dms {
    /// `D°M′S″H` with the seconds rounded to the given precision (whole seconds by default)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(0);
        let (degrees, minutes, seconds) = self.rounded(precision);
        write!(
            f,
            "{}{}{}{}{:.*}{}",
            degrees, DEGREE_SIGN, minutes, ARC_MINUTE_SIGN, precision, seconds, ARC_SECOND_SIGN
        )?;

        if let Some(hemisphere) = self.hemisphere {
            write!(f, "{}", hemisphere)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use geocoord_types::Hemisphere::{East, North, South, West};

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn hemisphere_defines_sign() {
        let north = decimal_from_dms((50, 27, 0, 'N')).unwrap();
        let south = decimal_from_dms((50, 27, 0, 'S')).unwrap();
        let east = decimal_from_dms((50, 27, 0, 'E')).unwrap();
        let west = decimal_from_dms((50, 27, 0, 'W')).unwrap();

        assert_close(north.to_f64(), 50.45);
        assert_eq!(north, east);
        assert_eq!(south, west);
        assert_eq!(south, -north);
    }

    #[test]
    fn letter_overrides_negative_degrees() {
        let a = decimal_from_dms((-50, 27, 0, 'N')).unwrap();
        assert_close(a.to_f64(), 50.45);
    }

    #[test]
    fn sign_of_degrees_without_letter() {
        let a = decimal_from_dms((-33, 27, 44)).unwrap();
        assert_close(a.to_f64(), -(33.0 + 27.0 / 60.0 + 44.0 / 3600.0));

        let zero = decimal_from_dms((0, 30)).unwrap();
        assert!(!zero.is_negative());
        assert_close(zero.to_f64(), 0.5);
    }

    #[test]
    fn minutes_and_seconds_default_to_zero() {
        assert_eq!(decimal_from_dms(12).unwrap(), ExactDegree::from(12));
        assert_eq!(
            decimal_from_dms((12, 30)).unwrap(),
            decimal_from_dms((12, 30, 0)).unwrap()
        );
    }

    #[test]
    #[should_panic(expected = "Hemisphere('X')")]
    fn bad_hemisphere() {
        let _a = decimal_from_dms((50, 27, 0, 'X')).unwrap();
    }

    #[test]
    fn fractional_seconds() {
        let dms = Dms::new(30.0, 31.0, 24.5).with_hemisphere(East);
        let a = dms.to_exact().unwrap();
        assert_eq!(a, ExactDegree::with_dms(false, 30, 31.0, 24.5).unwrap());
    }

    #[test]
    fn whole_degrees_only() {
        let dms = Dms::new(-12.7, 0.0, 0.0);
        assert!(dms.degrees().eq(&-12.0));
        assert_eq!(dms.to_exact().unwrap(), ExactDegree::from(-12));
    }

    #[test]
    fn to_dms_with_direction() {
        let a = ExactDegree::try_from(-33.462_222_222).unwrap();
        let dms = decimal_to_dms(a, Some(Axis::Latitude));
        assert!(dms.degrees().eq(&33.0));
        assert!(dms.minutes().eq(&27.0));
        assert!((dms.seconds() - 44.0).abs() < 1e-5);
        assert_eq!(dms.hemisphere(), Some(South));

        let dms = decimal_to_dms(-a, Some(Axis::Longitude));
        assert_eq!(dms.hemisphere(), Some(East));
    }

    #[test]
    fn to_dms_signed() {
        let a = ExactDegree::try_from(-70.5).unwrap();
        let dms = decimal_to_dms(a, None);
        assert!(dms.degrees().eq(&-70.0));
        assert!(dms.minutes().eq(&30.0));
        assert!(dms.seconds().eq(&0.0));
        assert!(dms.hemisphere().is_none());
    }

    #[test]
    fn small_negative_keeps_sign() {
        let a = ExactDegree::try_from(-0.5).unwrap();

        let signed = decimal_to_dms(a, None);
        assert!(signed.degrees().is_sign_negative());
        assert_eq!(signed.to_exact().unwrap(), a);

        let directed = decimal_to_dms(a, Some(Axis::Longitude));
        assert_eq!(directed.hemisphere(), Some(West));
        assert_eq!(directed.to_exact().unwrap(), a);
    }

    #[test]
    fn round_trip() {
        for value in [0.0, 50.45, -33.462_222, 179.999_999, -0.000_277_777_8, 89.5] {
            let a = ExactDegree::try_from(value).unwrap();
            for direction in [None, Some(Axis::Latitude), Some(Axis::Longitude)] {
                let dms = decimal_to_dms(a, direction);
                assert_eq!(dms.to_exact().unwrap(), a, "{} via {}", value, dms);
            }
        }
    }

    #[test]
    fn parse_unicode() {
        let dms: Dms = "50°27′0″N".parse().unwrap();
        assert_eq!(dms, Dms::new(50.0, 27.0, 0.0).with_hemisphere(North));
    }

    #[test]
    fn parse_ascii() {
        let dms: Dms = "30*31'24.5\"E".parse().unwrap();
        assert_eq!(dms, Dms::new(30.0, 31.0, 24.5).with_hemisphere(East));
    }

    #[test]
    fn parse_with_spaces() {
        let dms: Dms = "70° 40′ W".parse().unwrap();
        assert_eq!(dms, Dms::new(70.0, 40.0, 0.0).with_hemisphere(West));

        let dms: Dms = "S 33°27′".parse().unwrap();
        assert_eq!(dms, Dms::new(33.0, 27.0, 0.0).with_hemisphere(South));
    }

    #[test]
    fn parse_signed() {
        let dms: Dms = "-33°27′44″".parse().unwrap();
        assert_eq!(dms, Dms::new(-33.0, 27.0, 44.0));

        let dms: Dms = "-0°30′".parse().unwrap();
        assert!(dms.to_exact().unwrap().is_negative());

        let dms: Dms = "+12".parse().unwrap();
        assert_eq!(dms, Dms::new(12.0, 0.0, 0.0));
    }

    #[test]
    fn parse_bad_letter() {
        let err = "50°27′0″X".parse::<Dms>().unwrap_err();
        assert_eq!(err, ParseError::Hemisphere('X'));
    }

    #[test]
    fn parse_sign_and_letter() {
        let err = "-50°27′N".parse::<Dms>().unwrap_err();
        assert!(matches!(err, ParseError::DmsNotation(_)));
    }

    #[test]
    fn parse_garbage() {
        assert_eq!("".parse::<Dms>().unwrap_err(), ParseError::EmptyString);
        assert!(matches!(
            "50°61″27′".parse::<Dms>(),
            Err(ParseError::DmsNotation(_))
        ));
        assert!(matches!(
            "fifty".parse::<Dms>(),
            Err(ParseError::Hemisphere('y'))
        ));
    }

    #[test]
    fn display() {
        let dms = Dms::new(50.0, 27.0, 0.0).with_hemisphere(North);
        assert_eq!(dms.to_string(), "50°27′0″N");

        let dms = Dms::new(30.0, 31.0, 23.6).with_hemisphere(East);
        assert_eq!(dms.to_string(), "30°31′24″E");
        assert_eq!(format!("{:.1}", dms), "30°31′23.6″E");

        let dms = Dms::new(-0.0, 30.0, 0.0);
        assert_eq!(dms.to_string(), "-0°30′0″");
    }

    #[test]
    fn display_carries_rounded_seconds() {
        let dms = Dms::new(10.0, 5.0, 59.7).with_hemisphere(North);
        assert_eq!(dms.to_string(), "10°6′0″N");
        assert_eq!(format!("{:.1}", dms), "10°5′59.7″N");

        let dms = Dms::new(-0.0, 59.0, 59.5);
        assert_eq!(dms.to_string(), "-1°0′0″");
    }
}
