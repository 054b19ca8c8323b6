use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::Vector;

/// Names the coordinate system in which the three components of a [`Vector`] are expressed.
///
/// The component order for each system is:
///
/// - [`Cartesian`](CoordinateSystem::Cartesian): x, y, z;
/// - [`Spherical`](CoordinateSystem::Spherical): radius, polar angle, azimuth angle (physics
///   convention, radians);
/// - [`Cylindrical`](CoordinateSystem::Cylindrical): radius, azimuth angle, elevation (radians
///   for the angle).
///
/// The tag only says how to _read_ the components. All arithmetic happens in cartesian space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CoordinateSystem {
    #[default]
    Cartesian,
    Spherical,
    Cylindrical,
}

impl CoordinateSystem {
    /// All supported systems, in declaration order.
    pub const ALL: [CoordinateSystem; 3] = [
        CoordinateSystem::Cartesian,
        CoordinateSystem::Spherical,
        CoordinateSystem::Cylindrical,
    ];

    /// The lowercase name of the system, as used by [`Display`] and [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CoordinateSystem::Cartesian => "cartesian",
            CoordinateSystem::Spherical => "spherical",
            CoordinateSystem::Cylindrical => "cylindrical",
        }
    }
}

impl Display for CoordinateSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a [`CoordinateSystem`] from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown coordinate system {0:?}; expected cartesian, spherical, or cylindrical")]
pub struct UnknownCoordinateSystem(pub String);

impl FromStr for CoordinateSystem {
    type Err = UnknownCoordinateSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoordinateSystem::ALL
            .into_iter()
            .find(|system| system.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCoordinateSystem(s.to_owned()))
    }
}
