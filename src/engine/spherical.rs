use geocoord_types::{EngineError, Unit};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{parse_canonical, GeodeticEngine};

/// Mean radius of the Earth
/// <https://en.wikipedia.org/wiki/Earth_radius#Mean_radius>
const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

/// The way to compute the central angle between two points
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceFormula {
    /// <https://en.wikipedia.org/wiki/Spherical_law_of_cosines>
    #[default]
    SphericalCosines,
    /// <https://en.wikipedia.org/wiki/Haversine_formula>,
    /// better conditioned for the small distances
    Haversine,
}

/// Settings of the [`SphericalEarth`] engine
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeodeticConfig {
    /// The unit of the given and returned distances
    pub units: Unit,
    /// The radius of the sphere
    pub radius_km: f64,
    /// The formula of the great-circle distance
    pub formula: DistanceFormula,
}

impl Default for GeodeticConfig {
    fn default() -> Self {
        Self {
            units: Unit::Kilometers,
            radius_km: MEAN_EARTH_RADIUS_KM,
            formula: DistanceFormula::default(),
        }
    }
}

impl GeodeticConfig {
    /// Measure distances in the other unit
    pub const fn with_units(self, units: Unit) -> Self {
        Self { units, ..self }
    }

    /// Use the sphere of the other radius
    pub const fn with_radius_km(self, radius_km: f64) -> Self {
        Self { radius_km, ..self }
    }

    /// Use the other distance formula
    pub const fn with_formula(self, formula: DistanceFormula) -> Self {
        Self { formula, ..self }
    }
}

/// The Earth as a perfect sphere.
///
/// ```
/// # use geocoord::{GeodeticConfig, GeodeticEngine, SphericalEarth, Unit};
/// let km = SphericalEarth::default();
/// let miles = SphericalEarth::new(GeodeticConfig::default().with_units(Unit::Miles)).unwrap();
///
/// let d_km = km.distance("40.7128,-74.006", "34.0522,-118.2437").unwrap();
/// let d_mi = miles.distance("40.7128,-74.006", "34.0522,-118.2437").unwrap();
/// assert!((d_km - 3935.7).abs() < 0.1);
/// assert!((d_km / d_mi - 1.609_344).abs() < 1e-9);
///
/// assert!(SphericalEarth::new(GeodeticConfig::default().with_units(Unit::Degrees)).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SphericalEarth {
    config: GeodeticConfig,
    // radius in the configured units
    radius: f64,
}

impl Default for SphericalEarth {
    fn default() -> Self {
        let config = GeodeticConfig::default();
        Self {
            radius: config.radius_km,
            config,
        }
    }
}

impl SphericalEarth {
    /// Configure the engine
    ///
    /// # Errors
    /// The units cannot measure distances or the radius is not a positive number.
    pub fn new(config: GeodeticConfig) -> Result<Self, EngineError> {
        let km_in_unit = config
            .units
            .in_kilometers()
            .ok_or(EngineError::NotADistance(config.units))?;

        if !(config.radius_km.is_finite() && config.radius_km > 0.0) {
            return Err(EngineError::OutOfRange {
                what: "radius",
                value: config.radius_km,
            });
        }

        Ok(Self {
            config,
            radius: config.radius_km / km_in_unit,
        })
    }

    /// The settings of the engine
    pub const fn config(&self) -> &GeodeticConfig {
        &self.config
    }

    /// Central angle between the points in radians
    fn central_angle(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = (from.0.to_radians(), from.1.to_radians());
        let (lat2, lng2) = (to.0.to_radians(), to.1.to_radians());
        let delta_lng = lng2 - lng1;

        match self.config.formula {
            DistanceFormula::SphericalCosines => {
                let cos = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lng.cos();
                // rounding can bring the value slightly out of the `acos` domain
                cos.clamp(-1.0, 1.0).acos()
            }
            DistanceFormula::Haversine => {
                let delta_lat = lat2 - lat1;
                let a = (delta_lat / 2.0).sin().powi(2)
                    + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
                2.0 * a.sqrt().atan2((1.0 - a).sqrt())
            }
        }
    }
}

impl GeodeticEngine for SphericalEarth {
    fn units(&self) -> Unit {
        self.config.units
    }

    fn distance(&self, from: &str, to: &str) -> Result<f64, EngineError> {
        let from = parse_canonical(from)?;
        let to = parse_canonical(to)?;
        Ok(self.central_angle(from, to) * self.radius)
    }

    fn bearing(&self, from: &str, to: &str) -> Result<f64, EngineError> {
        let (lat1, lng1) = parse_canonical(from)?;
        let (lat2, lng2) = parse_canonical(to)?;

        let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
        let delta_lng = (lng2 - lng1).to_radians();

        let y = delta_lng.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

        let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
        // tiny negative angles round up to the full turn
        Ok(if bearing >= 360.0 { 0.0 } else { bearing })
    }

    fn destination(
        &self,
        origin: &str,
        bearing: f64,
        distance: f64,
    ) -> Result<(f64, f64), EngineError> {
        let (lat, lng) = parse_canonical(origin)?;
        if !bearing.is_finite() {
            return Err(EngineError::OutOfRange {
                what: "bearing",
                value: bearing,
            });
        }
        if !distance.is_finite() {
            return Err(EngineError::OutOfRange {
                what: "distance",
                value: distance,
            });
        }

        let lat1 = lat.to_radians();
        let lng1 = lng.to_radians();
        let theta = bearing.to_radians();
        let delta = distance / self.radius;

        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
        let lng2 = lng1
            + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

        let lat2 = lat2.to_degrees();
        // normalise to [-180, 180)
        let lng2 = (lng2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
        trace!(lat = lat2, lng = lng2, "destination reached");
        Ok((lat2, lng2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_YORK: &str = "40.7128,-74.006";
    const LOS_ANGELES: &str = "34.0522,-118.2437";

    fn assert_close(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() < eps, "{} != {}", a, b);
    }

    #[test]
    fn default_config() {
        let engine = SphericalEarth::default();
        assert_eq!(engine.units(), Unit::Kilometers);
        assert_eq!(engine.config(), &GeodeticConfig::default());
        assert_eq!(SphericalEarth::new(GeodeticConfig::default()).unwrap(), engine);
    }

    #[test]
    fn distance_new_york_los_angeles() {
        let engine = SphericalEarth::default();
        let d = engine.distance(NEW_YORK, LOS_ANGELES).unwrap();
        assert_close(d, 3935.746, 1e-3);
    }

    #[test]
    fn formulas_agree() {
        let cosines = SphericalEarth::default();
        let haversine =
            SphericalEarth::new(GeodeticConfig::default().with_formula(DistanceFormula::Haversine))
                .unwrap();

        let d1 = cosines.distance("51.5074,-0.1278", "48.8566,2.3522").unwrap();
        let d2 = haversine.distance("51.5074,-0.1278", "48.8566,2.3522").unwrap();
        assert_close(d1, 343.556, 1e-3);
        assert_close(d1, d2, 1e-6);
    }

    #[test]
    fn same_point_is_zero_distance() {
        let engine = SphericalEarth::default();
        assert_close(engine.distance(NEW_YORK, NEW_YORK).unwrap(), 0.0, 1e-3);
    }

    #[test]
    fn antipodes_are_half_circumference_away() {
        let engine = SphericalEarth::default();
        let d = engine.distance("0,0", "0,180").unwrap();
        assert_close(d, std::f64::consts::PI * MEAN_EARTH_RADIUS_KM, 1e-6);
    }

    #[test]
    fn distance_in_other_units() {
        let config = GeodeticConfig::default().with_units(Unit::NauticalMiles);
        let engine = SphericalEarth::new(config).unwrap();
        assert_eq!(engine.units(), Unit::NauticalMiles);

        // one arc minute of the meridian is roughly a nautical mile
        let d = engine.distance("0,0", "0.016666666667,0").unwrap();
        assert_close(d, 1.0, 0.001);
    }

    #[test]
    fn bad_config() {
        let config = GeodeticConfig::default().with_units(Unit::Degrees);
        assert_eq!(
            SphericalEarth::new(config),
            Err(EngineError::NotADistance(Unit::Degrees))
        );

        let config = GeodeticConfig::default().with_radius_km(-1.0);
        assert!(matches!(
            SphericalEarth::new(config),
            Err(EngineError::OutOfRange { what: "radius", .. })
        ));
    }

    #[test]
    fn cardinal_bearings() {
        let engine = SphericalEarth::default();
        assert_close(engine.bearing("0,0", "1,0").unwrap(), 0.0, 1e-9);
        assert_close(engine.bearing("0,0", "0,1").unwrap(), 90.0, 1e-9);
        assert_close(engine.bearing("0,0", "-1,0").unwrap(), 180.0, 1e-9);
        assert_close(engine.bearing("0,0", "0,-1").unwrap(), 270.0, 1e-9);
    }

    #[test]
    fn bearing_range() {
        let engine = SphericalEarth::default();
        let b = engine.bearing(NEW_YORK, LOS_ANGELES).unwrap();
        assert_close(b, 273.687, 1e-3);
        assert!((0.0..360.0).contains(&b));
    }

    #[test]
    fn destination_along_equator() {
        let engine = SphericalEarth::default();
        let one_degree = MEAN_EARTH_RADIUS_KM.to_radians();

        let (lat, lng) = engine.destination("0,0", 90.0, one_degree).unwrap();
        assert_close(lat, 0.0, 1e-9);
        assert_close(lng, 1.0, 1e-9);
    }

    #[test]
    fn destination_crosses_antimeridian() {
        let engine = SphericalEarth::default();
        let one_degree = MEAN_EARTH_RADIUS_KM.to_radians();

        let (lat, lng) = engine.destination("0,179.5", 90.0, one_degree).unwrap();
        assert_close(lat, 0.0, 1e-9);
        assert_close(lng, -179.5, 1e-9);
    }

    #[test]
    fn destination_rejects_infinite_distance() {
        let engine = SphericalEarth::default();
        assert!(matches!(
            engine.destination("0,0", 0.0, f64::INFINITY),
            Err(EngineError::OutOfRange {
                what: "distance",
                ..
            })
        ));
    }

    #[test]
    fn contains_boundary() {
        let engine = SphericalEarth::default();
        let d = engine.distance(NEW_YORK, LOS_ANGELES).unwrap();
        assert!(engine.contains(NEW_YORK, d, LOS_ANGELES).unwrap());
        assert!(!engine.contains(NEW_YORK, d - 1e-6, LOS_ANGELES).unwrap());
    }

    #[test]
    fn malformed_point() {
        let engine = SphericalEarth::default();
        assert_eq!(
            engine.distance("north pole", NEW_YORK),
            Err(EngineError::MalformedPoint("north pole".into()))
        );
    }
}
