use std::any::type_name;

use geocoord_types::NotACoordinate;

pub use self::point::Coordinate;

mod point;

/// The ability of a located entity to tell where it is.
///
/// Every operation taking a point accepts either a [`Coordinate`] itself
/// or anything implementing this trait.
///
/// ```
/// use geocoord::{Coordinate, HasCoordinate, SphericalEarth};
///
/// struct Landmark {
///     name: &'static str,
///     location: Option<Coordinate>,
/// }
///
/// impl HasCoordinate for Landmark {
///     fn coord(&self) -> Option<Coordinate> {
///         self.location
///     }
/// }
///
/// let engine = SphericalEarth::default();
/// let kyiv = Coordinate::new(50.45, 30.523_333).unwrap();
/// let lavra = Landmark {
///     name: "Pechersk Lavra",
///     location: Some(Coordinate::new(50.4346, 30.5569).unwrap()),
/// };
/// assert!(kyiv.close_to(&lavra, 5.0, &engine).unwrap());
///
/// let atlantis = Landmark { name: "Atlantis", location: None };
/// assert!(kyiv.close_to(&atlantis, 5.0, &engine).is_err());
/// ```
pub trait HasCoordinate {
    /// The location, if it is known
    fn coord(&self) -> Option<Coordinate>;
}

impl HasCoordinate for Coordinate {
    fn coord(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

impl<T: HasCoordinate + ?Sized> HasCoordinate for &T {
    fn coord(&self) -> Option<Coordinate> {
        (**self).coord()
    }
}

impl<T: HasCoordinate> HasCoordinate for Option<T> {
    fn coord(&self) -> Option<Coordinate> {
        self.as_ref().and_then(HasCoordinate::coord)
    }
}

impl<T: HasCoordinate + ?Sized> HasCoordinate for Box<T> {
    fn coord(&self) -> Option<Coordinate> {
        (**self).coord()
    }
}

/// Reduce the point-like value to the coordinate.
///
/// # Errors
/// The value cannot tell its location.
pub fn normalize<P: HasCoordinate + ?Sized>(point: &P) -> Result<Coordinate, NotACoordinate> {
    point
        .coord()
        .ok_or_else(|| NotACoordinate::new(type_name::<P>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Station {
        position: Option<Coordinate>,
    }

    impl HasCoordinate for Station {
        fn coord(&self) -> Option<Coordinate> {
            self.position
        }
    }

    #[test]
    fn coordinate_is_unchanged() {
        let c = Coordinate::new(12.5, 45.25).unwrap();
        assert_eq!(normalize(&c).unwrap(), c);
        assert_eq!(normalize(&&c).unwrap(), c);
    }

    #[test]
    fn located_entity() {
        let c = Coordinate::new(-33.45, -70.666_667).unwrap();
        let station = Station { position: Some(c) };
        assert_eq!(normalize(&station).unwrap(), c);

        let boxed: Box<dyn HasCoordinate> = Box::new(station);
        assert_eq!(normalize(&boxed).unwrap(), c);
    }

    #[test]
    fn unknown_location_fails_explicitly() {
        let station = Station { position: None };
        let err = normalize(&station).unwrap_err();
        assert!(err.type_name().ends_with("Station"));
        assert!(err.to_string().starts_with("not a coordinate-like value"));
    }

    #[test]
    fn absent_value() {
        let nothing: Option<Coordinate> = None;
        assert!(normalize(&nothing).is_err());

        let something = Some(Coordinate::new(1.0, 2.0).unwrap());
        assert!(normalize(&something).is_ok());
    }

    #[test]
    fn trait_object() {
        let c = Coordinate::new(0.0, 0.0).unwrap();
        let dynamic: &dyn HasCoordinate = &c;
        assert_eq!(normalize(dynamic).unwrap(), c);
    }
}
