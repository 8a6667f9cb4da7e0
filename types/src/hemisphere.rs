use std::{convert::TryFrom, fmt, ops::Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

use self::Hemisphere::{East, North, South, West};

/// One of the four halves of the globe split by the equator or by the prime meridian.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    /// Latitudes above the equator
    North,
    /// Latitudes below the equator
    South,
    /// Longitudes east of the prime meridian
    East,
    /// Longitudes west of the prime meridian
    West,
}

impl Hemisphere {
    /// The sign the hemisphere gives to an angle: `+1` for N and E, `-1` for S and W
    pub const fn sign(self) -> i8 {
        match self {
            North | East => 1,
            South | West => -1,
        }
    }

    /// Is the hemisphere negates an angle?
    pub const fn is_negative(self) -> bool {
        self.sign() < 0
    }

    /// Which of the coordinates the hemisphere qualifies
    pub const fn axis(self) -> Axis {
        match self {
            North | South => Axis::Latitude,
            East | West => Axis::Longitude,
        }
    }

    /// The single letter designation
    pub const fn letter(self) -> char {
        match self {
            North => 'N',
            South => 'S',
            East => 'E',
            West => 'W',
        }
    }
}

impl Neg for Hemisphere {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }
}

impl TryFrom<char> for Hemisphere {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(North),
            'S' => Ok(South),
            'E' => Ok(East),
            'W' => Ok(West),
            _ => Err(ParseError::Hemisphere(c)),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The two angles locating a point on the globe
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Angle north or south of the equator
    Latitude,
    /// Angle east or west of the prime meridian
    Longitude,
}

impl Axis {
    /// The hemisphere of the non-negative angles along the axis
    pub const fn positive(self) -> Hemisphere {
        match self {
            Self::Latitude => North,
            Self::Longitude => East,
        }
    }

    /// The hemisphere of the negative angles along the axis
    pub const fn negative(self) -> Hemisphere {
        match self {
            Self::Latitude => South,
            Self::Longitude => West,
        }
    }

    /// Select the hemisphere by the sign of an angle
    pub const fn hemisphere(self, is_negative: bool) -> Hemisphere {
        if is_negative {
            self.negative()
        } else {
            self.positive()
        }
    }
}
