use chrono::{DateTime, Datelike, NaiveDate, Utc};
use geocoord_types::EngineError;
use num_traits::ToPrimitive;
use tracing::{debug, trace};

use super::SolarEngine;

/// The day number of 2000-01-01 counting from 0001-01-01 as day 1
const J2000_DAYS_FROM_CE: i32 = 730_120;
/// Julian date of 2000-01-01 12:00 TT
const J2000_JD: f64 = 2_451_545.0;
/// Julian date of the Unix epoch
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const MILLIS_IN_DAY: f64 = 86_400_000.0;

/// Obliquity of the ecliptic
const EARTH_AXIAL_TILT_DEG: f64 = 23.4397;
/// Refraction plus the apparent radius of the sun
const STANDARD_ALTITUDE_DEG: f64 = -0.833;

/// The sun over the place at the given day
#[derive(Debug, Copy, Clone, PartialEq)]
enum Daylight {
    Regular { sunrise: f64, sunset: f64 },
    PolarDay,
    PolarNight,
}

/// The simplified sunrise equation
/// <https://en.wikipedia.org/wiki/Sunrise_equation>.
///
/// The result is within a few minutes of the published almanac times
/// for the latitudes outside of the polar circles.
///
/// ```
/// # use chrono::{NaiveDate, Timelike};
/// # use geocoord::{SolarEngine, SunriseEquation};
/// let sun = SunriseEquation::default();
/// let equinox = NaiveDate::from_ymd_opt(2023, 3, 20).unwrap();
///
/// let sunrise = sun.sunrise(equinox, 0.0, 0.0).unwrap().unwrap();
/// let sunset = sun.sunset(equinox, 0.0, 0.0).unwrap().unwrap();
/// assert_eq!(sunrise.hour(), 6);
/// assert_eq!(sunset.hour(), 18);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SunriseEquation {
    altitude_deg: f64,
}

impl Default for SunriseEquation {
    fn default() -> Self {
        Self {
            altitude_deg: STANDARD_ALTITUDE_DEG,
        }
    }
}

impl SunriseEquation {
    /// Use the other altitude of the sun center as the sunrise criteria,
    /// e.g. -6 degrees for the civil twilight.
    ///
    /// # Errors
    /// The altitude is not a number between -90 and 90 degrees.
    pub fn with_altitude(altitude_deg: f64) -> Result<Self, EngineError> {
        if altitude_deg.is_finite() && altitude_deg.abs() <= 90.0 {
            Ok(Self { altitude_deg })
        } else {
            Err(EngineError::OutOfRange {
                what: "altitude",
                value: altitude_deg,
            })
        }
    }

    /// The altitude of the sun center at the sunrise in degrees
    pub const fn altitude(&self) -> f64 {
        self.altitude_deg
    }

    fn daylight(&self, date: NaiveDate, lat: f64, lng: f64) -> Result<Daylight, EngineError> {
        if !(lat.is_finite() && lat.abs() <= 90.0) {
            return Err(EngineError::OutOfRange {
                what: "latitude",
                value: lat,
            });
        }
        if !lng.is_finite() {
            return Err(EngineError::OutOfRange {
                what: "longitude",
                value: lng,
            });
        }

        let days = f64::from(date.num_days_from_ce() - J2000_DAYS_FROM_CE);
        // mean solar time
        let j_star = days - lng / 360.0;

        let anomaly = (357.5291 + 0.985_600_28 * j_star).rem_euclid(360.0).to_radians();
        let center = 1.9148 * anomaly.sin()
            + 0.02 * (2.0 * anomaly).sin()
            + 0.0003 * (3.0 * anomaly).sin();
        let ecliptic_lng = (anomaly.to_degrees() + center + 180.0 + 102.9372)
            .rem_euclid(360.0)
            .to_radians();

        let transit =
            J2000_JD + j_star + 0.0053 * anomaly.sin() - 0.0069 * (2.0 * ecliptic_lng).sin();

        let sin_declination = ecliptic_lng.sin() * EARTH_AXIAL_TILT_DEG.to_radians().sin();
        let cos_declination = sin_declination.asin().cos();

        let phi = lat.to_radians();
        let cos_hour_angle = (self.altitude_deg.to_radians().sin() - phi.sin() * sin_declination)
            / (phi.cos() * cos_declination);
        trace!(transit, cos_hour_angle, "solar transit");

        if cos_hour_angle > 1.0 {
            return Ok(Daylight::PolarNight);
        }
        if cos_hour_angle < -1.0 {
            return Ok(Daylight::PolarDay);
        }

        let half_day = cos_hour_angle.acos().to_degrees() / 360.0;
        Ok(Daylight::Regular {
            sunrise: transit - half_day,
            sunset: transit + half_day,
        })
    }

    fn event(
        &self,
        date: NaiveDate,
        lat: f64,
        lng: f64,
        pick: fn(f64, f64) -> f64,
    ) -> Result<Option<DateTime<Utc>>, EngineError> {
        match self.daylight(date, lat, lng)? {
            Daylight::Regular { sunrise, sunset } => julian_to_utc(pick(sunrise, sunset)).map(Some),
            other => {
                debug!(%date, lat, lng, daylight = ?other, "no sunrise or sunset");
                Ok(None)
            }
        }
    }
}

fn julian_to_utc(jd: f64) -> Result<DateTime<Utc>, EngineError> {
    let out_of_range = || EngineError::OutOfRange {
        what: "julian date",
        value: jd,
    };
    let millis = ((jd - UNIX_EPOCH_JD) * MILLIS_IN_DAY)
        .round()
        .to_i64()
        .ok_or_else(out_of_range)?;
    DateTime::from_timestamp_millis(millis).ok_or_else(out_of_range)
}

impl SolarEngine for SunriseEquation {
    fn sunrise(
        &self,
        date: NaiveDate,
        lat: f64,
        lng: f64,
    ) -> Result<Option<DateTime<Utc>>, EngineError> {
        self.event(date, lat, lng, |rise, _| rise)
    }

    fn sunset(
        &self,
        date: NaiveDate,
        lat: f64,
        lng: f64,
    ) -> Result<Option<DateTime<Utc>>, EngineError> {
        self.event(date, lat, lng, |_, set| set)
    }
}
