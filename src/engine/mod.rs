//! Geodetic computations on the canonical `"lat,lng"` points

use geocoord_types::{EngineError, Unit};

pub use self::spherical::{DistanceFormula, GeodeticConfig, SphericalEarth};

mod spherical;

/// Great-circle geometry over the points given in the canonical `"lat,lng"` form.
///
/// The distances (both given and returned) are measured in the [`units`](#method.units)
/// of the engine, the angles are in degrees.
pub trait GeodeticEngine {
    /// The unit of the distances
    fn units(&self) -> Unit {
        Unit::Kilometers
    }

    /// Great-circle distance between the points
    ///
    /// # Errors
    /// Malformed points or internal failures.
    fn distance(&self, from: &str, to: &str) -> Result<f64, EngineError>;

    /// Initial bearing of the great-circle path in degrees `[0, 360)`
    ///
    /// # Errors
    /// Malformed points or internal failures.
    fn bearing(&self, from: &str, to: &str) -> Result<f64, EngineError>;

    /// The decimal `(lat, lng)` reached from the `origin` along the initial `bearing`
    /// (in degrees) after the `distance`
    ///
    /// # Errors
    /// Malformed points or internal failures.
    fn destination(
        &self,
        origin: &str,
        bearing: f64,
        distance: f64,
    ) -> Result<(f64, f64), EngineError>;

    /// Is the `point` not farther than `radius` from the `center`?
    ///
    /// # Errors
    /// Malformed points or internal failures.
    fn contains(&self, center: &str, radius: f64, point: &str) -> Result<bool, EngineError> {
        Ok(self.distance(center, point)? <= radius)
    }
}

/// Parse the canonical `"lat,lng"` string into the decimal degrees.
/// Spaces around the numbers are allowed.
///
/// ```
/// # use geocoord::parse_canonical;
/// assert_eq!(parse_canonical("50.45, 30.52").unwrap(), (50.45, 30.52));
/// assert!(parse_canonical("50.45").is_err());
/// ```
///
/// # Errors
/// The string is not a pair of finite decimal numbers separated by the comma.
pub fn parse_canonical(point: &str) -> Result<(f64, f64), EngineError> {
    let malformed = || EngineError::MalformedPoint(point.to_string());

    let (lat, lng) = point.split_once(',').ok_or_else(malformed)?;
    let lat: f64 = lat.trim().parse().map_err(|_| malformed())?;
    let lng: f64 = lng.trim().parse().map_err(|_| malformed())?;

    if lat.is_finite() && lng.is_finite() {
        Ok((lat, lng))
    } else {
        Err(malformed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_pair() {
        assert_eq!(parse_canonical("12.5,-45.25").unwrap(), (12.5, -45.25));
        assert_eq!(parse_canonical(" 0 , 0 ").unwrap(), (0.0, 0.0));
    }

    #[test]
    fn malformed() {
        for bad in ["", "1", "1,", ",1", "a,b", "1,2,3", "NaN,0", "inf,0", "50°27′N,30°E"] {
            assert_eq!(
                parse_canonical(bad),
                Err(EngineError::MalformedPoint(bad.to_string())),
                "{:?}",
                bad
            );
        }
    }
}
