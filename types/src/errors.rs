use std::{
    error::Error as StdError,
    fmt,
    num::{ParseFloatError, ParseIntError},
};

use crate::{enum_trivial_from_impl, measure::Unit};

/// Failure to interpret a textual or numeric representation of an angle or a coordinate
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The hemisphere letter is not one of `N`, `S`, `E`, `W`
    Hemisphere(char),
    /// The text does not follow the Degree-Minute-Second notation
    DmsNotation(String),
    /// Nothing to parse
    EmptyString,
    /// NaN, infinity or a value too big to be stored
    NotFinite(f64),
    /// Bad decimal number
    Float(ParseFloatError),
    // this variant is practically impossible due to regex digits limitations
    /// Bad integer number
    Int(ParseIntError),
}

enum_trivial_from_impl!(ParseFloatError => ParseError:Float);
enum_trivial_from_impl!(ParseIntError => ParseError:Int);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse coordinate: ")?;
        match self {
            Self::Hemisphere(letter) => {
                write!(f, "unknown hemisphere {letter:?} (expected one of N, S, E, W)")
            }
            Self::DmsNotation(s) => write!(f, "{s:?} is not a Degree-Minute-Second notation"),
            Self::EmptyString => write!(f, "empty string provided"),
            Self::NotFinite(value) => write!(f, "{value} cannot be stored as an exact angle"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Int(inner) => write!(f, "{inner}"),
        }
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Float(inner) => Some(inner),
            Self::Int(inner) => Some(inner),
            _ => None,
        }
    }
}

/// The value given in place of a point neither is a coordinate nor can produce one
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NotACoordinate {
    type_name: &'static str,
}

impl NotACoordinate {
    /// Blame the value of the given type
    pub const fn new(type_name: &'static str) -> Self {
        Self { type_name }
    }

    /// The name of the type that failed to produce a coordinate
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for NotACoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a coordinate-like value: {}", self.type_name)
    }
}

impl StdError for NotACoordinate {}

/// Failures reported by a geodetic or a solar engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The point is not in the canonical `"lat,lng"` form
    MalformedPoint(String),
    /// The unit cannot measure a distance
    NotADistance(Unit),
    /// The argument is outside the domain of the computation
    OutOfRange {
        /// Name of the argument
        what: &'static str,
        /// Offending value
        value: f64,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPoint(s) => write!(f, "malformed canonical point {s:?}"),
            Self::NotADistance(unit) => write!(f, "{unit:?} is not a unit of distance"),
            Self::OutOfRange { what, value } => write!(f, "{what} is out of range: {value}"),
        }
    }
}

impl StdError for EngineError {}

/// Any failure of the coordinate operations
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Bad coordinate representation
    Parse(ParseError),
    /// The point argument cannot be normalized
    NotACoordinate(NotACoordinate),
    /// The delegated computation failed
    Engine(EngineError),
}

enum_trivial_from_impl!(ParseError => Error:Parse);
enum_trivial_from_impl!(NotACoordinate => Error:NotACoordinate);
enum_trivial_from_impl!(EngineError => Error:Engine);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(inner) => write!(f, "{inner}"),
            Self::NotACoordinate(inner) => write!(f, "{inner}"),
            Self::Engine(inner) => write!(f, "Engine failure: {inner}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Parse(inner) => Some(inner),
            Self::NotACoordinate(inner) => Some(inner),
            Self::Engine(inner) => Some(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hemisphere_message() {
        let err = ParseError::Hemisphere('X');
        assert_eq!(
            err.to_string(),
            "Cannot parse coordinate: unknown hemisphere 'X' (expected one of N, S, E, W)"
        );
    }

    #[test]
    fn float_error_is_the_source() {
        let inner = "1.2.3".parse::<f64>().unwrap_err();
        let err: ParseError = inner.clone().into();
        assert_eq!(err, ParseError::Float(inner));
        assert!(err.source().is_some());
    }

    #[test]
    fn not_a_coordinate_is_copy() {
        let err = NotACoordinate::new("Station");
        let copy = err;
        assert_eq!(err, copy);
        assert_eq!(copy.type_name(), "Station");
    }

    #[test]
    fn umbrella_wraps_everything() {
        let err: Error = NotACoordinate::new("Option<Coordinate>").into();
        assert_eq!(
            err.to_string(),
            "not a coordinate-like value: Option<Coordinate>"
        );

        let err: Error = EngineError::MalformedPoint("foo".into()).into();
        assert_eq!(
            err.to_string(),
            "Engine failure: malformed canonical point \"foo\""
        );
        assert!(err.source().is_some());
    }
}
