//! Degree/radian conversion and the angle helpers shared by the rest of the crate.
//!
//! All trigonometry in this crate happens in radians. Degrees only ever appear at function
//! boundaries, selected by an [`AngleUnit`] argument.

use std::f64::consts::{PI, TAU};
use uom::si::angle::{degree, radian};
use uom::si::f64::Angle;

#[cfg(test)]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Converts degrees to radians.
///
/// Whole half-turns (eg, ±180°) map exactly onto multiples of π, which keeps the range checks in
/// [`transform`](crate::transform) from rejecting boundary values.
#[must_use]
pub fn deg_to_rad(value: f64) -> f64 {
    value / 180. * PI
}

/// Converts radians to degrees.
#[must_use]
pub fn rad_to_deg(value: f64) -> f64 {
    value / PI * 180.
}

/// Sine of an angle given in degrees.
#[must_use]
pub fn sin_deg(degrees: f64) -> f64 {
    deg_to_rad(degrees).sin()
}

/// Cosine of an angle given in degrees.
#[must_use]
pub fn cos_deg(degrees: f64) -> f64 {
    deg_to_rad(degrees).cos()
}

/// The unit in which a function receives and returns its angles.
///
/// Lengths are unaffected; only the angular components of a triple are converted, and only at
/// the boundary of the function the unit is passed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Converts an angle expressed in this unit into radians.
    #[must_use]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => deg_to_rad(value),
        }
    }

    /// Converts an angle in radians into this unit.
    #[must_use]
    pub fn from_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => rad_to_deg(value),
        }
    }

    /// Wraps a raw value expressed in this unit into a typed [`Angle`].
    #[must_use]
    pub fn angle(self, value: f64) -> Angle {
        match self {
            AngleUnit::Radians => Angle::new::<radian>(value),
            AngleUnit::Degrees => Angle::new::<degree>(value),
        }
    }

    /// Extracts a typed [`Angle`] as a raw value in this unit.
    #[must_use]
    pub fn value_of(self, angle: Angle) -> f64 {
        match self {
            AngleUnit::Radians => angle.get::<radian>(),
            AngleUnit::Degrees => angle.get::<degree>(),
        }
    }
}

/// An angle that compares equal to any other angle a whole number of turns away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BoundedAngle {
    radians: f64,
}

impl BoundedAngle {
    pub(crate) fn new(angle: impl Into<Angle>) -> Self {
        Self {
            radians: Self::into_bounds(angle.into().get::<radian>()),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_radians(radians: f64) -> Self {
        Self {
            radians: Self::into_bounds(radians),
        }
    }

    /// Returns the angle in [0, 2π).
    #[cfg(test)]
    pub(crate) fn get_bounded(self) -> f64 {
        self.radians
    }

    fn into_bounds(radians: f64) -> f64 {
        let bounded = radians.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if bounded >= TAU {
            0.
        } else {
            bounded
        }
    }

    /// Returns the angle in [-π, π) in radians.
    #[cfg(test)]
    pub(crate) fn to_signed_range(self) -> f64 {
        if self.radians < PI {
            self.radians
        } else {
            self.radians - TAU
        }
    }

    /// Returns the angle in (-π, π] in radians, matching the range of `atan2`.
    pub(crate) fn to_azimuth_range(self) -> f64 {
        if self.radians <= PI {
            self.radians
        } else {
            self.radians - TAU
        }
    }
}

impl From<Angle> for BoundedAngle {
    fn from(value: Angle) -> Self {
        BoundedAngle::new(value)
    }
}

#[cfg(test)]
impl AbsDiffEq<Self> for BoundedAngle {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        // this is very accurate in radians
        0.000_000_001
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Self::from_radians(self.radians - other.radians)
            .to_signed_range()
            .abs()
            <= epsilon
    }
}

#[cfg(test)]
impl RelativeEq for BoundedAngle {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        let min = f64::min(self.radians, other.radians);
        let max = f64::max(self.radians, other.radians);

        f64::relative_eq(&min, &max, epsilon, max_relative)
            || f64::relative_eq(&(min + TAU), &max, epsilon, max_relative)
    }
}
