//! Exact geographic coordinates.
//!
//! A [`Coordinate`] keeps its latitude and longitude as fixed-point [`ExactDegree`]s,
//! so converting back and forth between the decimal and the DMS (degrees, minutes, seconds)
//! representations never accumulates a rounding error.
//!
//! The geometry (distance, bearing, destination point) and the astronomy (sunrise, sunset)
//! are delegated to a [`GeodeticEngine`] and a [`SolarEngine`] given by the caller,
//! with [`SphericalEarth`] and [`SunriseEquation`] being the default implementations.
//!
//! ```
//! use geocoord::{Coordinate, SphericalEarth};
//!
//! let kyiv = Coordinate::from_dms((50, 27, 0, 'N'), (30, 31, 24, 'E')).unwrap();
//! let lviv = Coordinate::new(49.8397, 24.0297).unwrap();
//!
//! let distance = kyiv.distance_to(&lviv, &SphericalEarth::default()).unwrap();
//! assert_eq!(format!("{:.0}", distance), "468 km");
//! assert_eq!(kyiv.describe(), "(50°27′0″N, 30°31′24″E)");
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
// #![warn(private_doc_tests)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// #![warn(unreachable_pub)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]
// degrees of an `i64`-backed angle always fit into `i32`
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

pub use angle::{
    dms::{decimal_from_dms, decimal_to_dms, Dms},
    ExactDegree,
};
pub use coord::{normalize, Coordinate, HasCoordinate};
pub use engine::{
    parse_canonical, DistanceFormula, GeodeticConfig, GeodeticEngine, SphericalEarth,
};
pub use geocoord_types::{
    Axis, EngineError, Error, Hemisphere, LatLng, Measurement, NotACoordinate, ParseError, Unit,
};
pub use solar::{SolarEngine, SunriseEquation};

mod angle;
mod coord;
mod engine;
mod solar;
mod utils;
