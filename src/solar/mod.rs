//! Sunrise and sunset computations

use chrono::{DateTime, NaiveDate, Utc};
use geocoord_types::EngineError;

pub use self::equation::SunriseEquation;

mod equation;

/// The source of the sunrise and sunset moments at the given place and date.
///
/// The latitude and longitude are in decimal degrees;
/// `Ok(None)` means there is no such event during the day (polar day or night).
pub trait SolarEngine {
    /// The moment when the upper limb of the sun appears over the horizon
    ///
    /// # Errors
    /// The place or the date cannot be processed.
    fn sunrise(
        &self,
        date: NaiveDate,
        lat: f64,
        lng: f64,
    ) -> Result<Option<DateTime<Utc>>, EngineError>;

    /// The moment when the upper limb of the sun disappears under the horizon
    ///
    /// # Errors
    /// The place or the date cannot be processed.
    fn sunset(
        &self,
        date: NaiveDate,
        lat: f64,
        lng: f64,
    ) -> Result<Option<DateTime<Utc>>, EngineError>;
}
