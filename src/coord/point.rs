use std::{convert::TryFrom, fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use geocoord_types::{Axis, EngineError, Error, LatLng, Measurement, ParseError, Unit};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    angle::{
        dms::{decimal_to_dms, Dms},
        ExactDegree,
    },
    engine::{parse_canonical, GeodeticEngine},
    solar::SolarEngine,
};

use super::{normalize, HasCoordinate};

/// The point on the surface of the Earth, represented as the pair (latitude, longitude).
///
/// The value is immutable, both angles are kept exact (see [`ExactDegree`]),
/// so the equality has no tolerance:
///
/// ```
/// # use geocoord::Coordinate;
/// let a = Coordinate::new(12.5, 45.25).unwrap();
/// assert_eq!(a, Coordinate::new(12.5, 45.25).unwrap());
/// assert_ne!(a, Coordinate::new(12.5, 45.250_001).unwrap());
/// ```
///
/// The ranges of the latitude `[-90, 90]` and the longitude `[-180, 180]`
/// are not enforced, use [`is_valid`](#method.is_valid) to check them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "LatLng", try_from = "LatLng")
)]
pub struct Coordinate {
    lat: ExactDegree,
    lng: ExactDegree,
}

impl Coordinate {
    /// Construct a point from the decimal degrees.
    ///
    /// # Errors
    /// NaN, infinite or too big numbers cannot be stored.
    pub fn new(lat: f64, lng: f64) -> Result<Self, ParseError> {
        Ok(Self {
            lat: ExactDegree::try_from(lat)?,
            lng: ExactDegree::try_from(lng)?,
        })
    }

    /// Construct a point from the exact angles
    pub const fn from_exact(lat: ExactDegree, lng: ExactDegree) -> Self {
        Self { lat, lng }
    }

    /// Construct a point from the Degree-Minute-Second representations.
    /// Any DMS source is accepted: tuples, strings or [`Dms`] references.
    ///
    /// ```
    /// # use geocoord::Coordinate;
    /// let a = Coordinate::from_dms((50, 27, 0, 'N'), "30°31′24″E").unwrap();
    /// let b = Coordinate::from_dms((50, 27), (30, 31, 24)).unwrap();
    /// assert_eq!(a, b);
    /// ```
    ///
    /// # Errors
    /// The hemisphere letter is not one of `N`, `S`, `E`, `W`
    /// or the textual representation cannot be parsed.
    pub fn from_dms<Lat, Lng>(lat: Lat, lng: Lng) -> Result<Self, ParseError>
    where
        Dms: TryFrom<Lat, Error = ParseError> + TryFrom<Lng, Error = ParseError>,
    {
        let lat = Dms::try_from(lat)?;
        let lng = Dms::try_from(lng)?;
        Self::with_dms(&lat, &lng)
    }

    /// Construct a point from the parsed DMS values.
    ///
    /// # Errors
    /// Some part of the DMS is not finite or too big.
    pub fn with_dms(lat: &Dms, lng: &Dms) -> Result<Self, ParseError> {
        Ok(Self {
            lat: lat.to_exact()?,
            lng: lng.to_exact()?,
        })
    }

    /// Decimal degrees of the latitude
    pub fn lat(&self) -> f64 {
        self.lat.to_f64()
    }

    /// Decimal degrees of the longitude
    pub fn lng(&self) -> f64 {
        self.lng.to_f64()
    }

    /// Exact latitude
    pub const fn lat_exact(&self) -> ExactDegree {
        self.lat
    }

    /// Exact longitude
    pub const fn lng_exact(&self) -> ExactDegree {
        self.lng
    }

    /// DMS of the latitude, either with the `N`/`S` letter or signed
    pub fn lat_dms(&self, with_direction: bool) -> Dms {
        decimal_to_dms(self.lat, with_direction.then_some(Axis::Latitude))
    }

    /// DMS of the longitude, either with the `E`/`W` letter or signed
    pub fn lng_dms(&self, with_direction: bool) -> Dms {
        decimal_to_dms(self.lng, with_direction.then_some(Axis::Longitude))
    }

    /// The `"lat,lng"` decimal string used to exchange points with a geodetic engine
    pub fn to_canonical_string(&self) -> String {
        format!("{},{}", self.lat(), self.lng())
    }

    /// The decimal mapping `{lat, lng}`
    pub fn to_mapping(&self) -> LatLng {
        LatLng {
            lat: self.lat(),
            lng: self.lng(),
        }
    }

    /// Human-readable form `(D°M′S″H, D°M′S″H)` with the seconds rounded
    pub fn describe(&self) -> String {
        format!("{:#}", self)
    }

    /// Are the latitude and the longitude in their conventional ranges?
    pub fn is_valid(&self) -> bool {
        let right = ExactDegree::from(90);
        let straight = ExactDegree::half_turn();
        self.lat.abs() <= right && self.lng.abs() <= straight
    }

    /// The diametrically opposite point
    pub fn antipode(&self) -> Self {
        Self {
            lat: -self.lat,
            lng: (self.lng + ExactDegree::half_turn()).wrap_half_turn(),
        }
    }

    /// Great-circle distance to the point.
    ///
    /// # Errors
    /// The point cannot be normalized or the engine fails.
    pub fn distance_to<P, E>(&self, point: &P, engine: &E) -> Result<Measurement, Error>
    where
        P: HasCoordinate + ?Sized,
        E: GeodeticEngine + ?Sized,
    {
        let (from, to) = self.canonical_pair(point)?;
        debug!(%from, %to, "distance");
        let distance = engine.distance(&from, &to)?;
        Ok(Measurement::new(distance, engine.units()))
    }

    /// Initial bearing of the great-circle path to the point, in degrees `[0, 360)`.
    ///
    /// # Errors
    /// The point cannot be normalized or the engine fails.
    pub fn direction_to<P, E>(&self, point: &P, engine: &E) -> Result<Measurement, Error>
    where
        P: HasCoordinate + ?Sized,
        E: GeodeticEngine + ?Sized,
    {
        let (from, to) = self.canonical_pair(point)?;
        debug!(%from, %to, "bearing");
        let bearing = engine.bearing(&from, &to)?;
        Ok(Measurement::new(bearing, Unit::Degrees))
    }

    /// The point reached by travelling the `distance` (in the engine's units)
    /// along the initial `bearing` (in degrees).
    ///
    /// # Errors
    /// The engine fails or gives back a point which cannot be stored.
    pub fn endpoint<E>(&self, bearing: f64, distance: f64, engine: &E) -> Result<Self, Error>
    where
        E: GeodeticEngine + ?Sized,
    {
        let origin = self.to_canonical_string();
        debug!(%origin, bearing, distance, "destination");
        let (lat, lng) = engine.destination(&origin, bearing, distance)?;
        Ok(Self::new(lat, lng)?)
    }

    /// Is the point within the `radius` (in the engine's units)?
    ///
    /// # Errors
    /// The point cannot be normalized or the engine fails.
    pub fn close_to<P, E>(&self, point: &P, radius: f64, engine: &E) -> Result<bool, Error>
    where
        P: HasCoordinate + ?Sized,
        E: GeodeticEngine + ?Sized,
    {
        let (center, point) = self.canonical_pair(point)?;
        debug!(%center, %point, radius, "containment");
        Ok(engine.contains(&center, radius, &point)?)
    }

    fn canonical_pair<P>(&self, point: &P) -> Result<(String, String), Error>
    where
        P: HasCoordinate + ?Sized,
    {
        let other = normalize(point)?;
        Ok((self.to_canonical_string(), other.to_canonical_string()))
    }

    /// The moment of the sunrise at the given date, `None` if the sun does not rise.
    ///
    /// # Errors
    /// The engine fails.
    pub fn sunrise<S>(
        &self,
        date: NaiveDate,
        engine: &S,
    ) -> Result<Option<DateTime<Utc>>, EngineError>
    where
        S: SolarEngine + ?Sized,
    {
        debug!(%date, lat = self.lat(), lng = self.lng(), "sunrise");
        engine.sunrise(date, self.lat(), self.lng())
    }

    /// The moment of the sunset at the given date, `None` if the sun does not set.
    ///
    /// # Errors
    /// The engine fails.
    pub fn sunset<S>(
        &self,
        date: NaiveDate,
        engine: &S,
    ) -> Result<Option<DateTime<Utc>>, EngineError>
    where
        S: SolarEngine + ?Sized,
    {
        debug!(%date, lat = self.lat(), lng = self.lng(), "sunset");
        engine.sunset(date, self.lat(), self.lng())
    }

    /// The sunrise of the current UTC date
    ///
    /// # Errors
    /// The engine fails.
    pub fn sunrise_today<S>(&self, engine: &S) -> Result<Option<DateTime<Utc>>, EngineError>
    where
        S: SolarEngine + ?Sized,
    {
        self.sunrise(Utc::now().date_naive(), engine)
    }

    /// The sunset of the current UTC date
    ///
    /// # Errors
    /// The engine fails.
    pub fn sunset_today<S>(&self, engine: &S) -> Result<Option<DateTime<Utc>>, EngineError>
    where
        S: SolarEngine + ?Sized,
    {
        self.sunset(Utc::now().date_naive(), engine)
    }
}

impl From<Coordinate> for LatLng {
    fn from(coord: Coordinate) -> Self {
        coord.to_mapping()
    }
}

impl TryFrom<LatLng> for Coordinate {
    type Error = ParseError;

    fn try_from(value: LatLng) -> Result<Self, Self::Error> {
        Self::new(value.lat, value.lng)
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    /// Parse either the canonical `"lat,lng"` decimal pair
    /// or the DMS pair like `"50°27′0″N, 30°31′24″E"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseError::EmptyString);
        }

        if let Ok((lat, lng)) = parse_canonical(s) {
            return Self::new(lat, lng);
        }

        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| ParseError::DmsNotation(s.to_string()))?;
        Self::from_dms(lat, lng)
    }
}

impl fmt::Display for Coordinate {
    /// The canonical string, or the description with the alternate flag (`{:#}`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "({}, {})", self.lat_dms(true), self.lng_dms(true))
        } else {
            write!(f, "{},{}", self.lat(), self.lng())
        }
    }
}
