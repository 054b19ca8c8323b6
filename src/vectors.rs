use crate::angles::AngleUnit;
use crate::coordinate_systems::CoordinateSystem;
use crate::error::Result;
use crate::transform::{
    cartesian_to_cylindrical, cartesian_to_spherical, cylindrical_to_cartesian,
    cylindrical_to_spherical, spherical_to_cartesian, spherical_to_cylindrical,
};
use crate::Vector3;
use std::fmt::{self, Display, Formatter};
use uom::si::angle::radian;
use uom::si::f64::{Angle, Length};
use uom::si::length::meter;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D vector whose components are expressed in a given [`CoordinateSystem`].
///
/// A `Vector` is an immutable value: every operation returns a new one. You can construct one
/// using [cartesian](Vector::cartesian), [spherical](Vector::spherical), or
/// [cylindrical](Vector::cylindrical) components; angles are always in radians.
///
/// # Arithmetic is cartesian
///
/// Arithmetic ([`add`](Vector::add), [`subtract`](Vector::subtract),
/// [`component_multiply`](Vector::component_multiply),
/// [`component_divide`](Vector::component_divide), [`dot`](Vector::dot), and
/// [`cross`](Vector::cross)) first converts both operands to cartesian components, then operates
/// on those, and always returns a vector tagged [`CoordinateSystem::Cartesian`]. In particular,
/// multiplying two spherical vectors does _not_ multiply their radii and angles; it multiplies
/// their cartesian projections:
///
/// ```rust
/// use approx::assert_relative_eq;
/// use cosy::{CoordinateSystem, Vector};
/// use std::f64::consts::FRAC_PI_2;
///
/// // (1, 0, 0) and (0, 2, 0) in spherical form
/// let a = Vector::spherical(1., FRAC_PI_2, 0.);
/// let b = Vector::spherical(2., FRAC_PI_2, FRAC_PI_2);
///
/// let sum = a.add(&b).unwrap();
/// assert_eq!(sum.system(), CoordinateSystem::Cartesian);
/// assert_relative_eq!(sum, Vector::cartesian(1., 2., 0.), epsilon = 1e-12);
///
/// let product = a.component_multiply(&b).unwrap();
/// assert_relative_eq!(product, Vector::cartesian(0., 0., 0.), epsilon = 1e-12);
/// ```
///
/// Conversions out of spherical components are range-checked (see
/// [`spherical_to_cartesian`](crate::transform::spherical_to_cartesian)), so arithmetic involving
/// a spherical vector with, say, a negative radius fails with
/// [`Error::InvalidCoordinateRange`](crate::Error::InvalidCoordinateRange).
///
/// # Equality
///
/// `==` compares the raw components _and_ the tag, so a spherical and a cartesian vector
/// describing the same point are not `==`. The approximate comparisons from [`approx`] (behind
/// the `approx` feature) instead compare cartesian projections, and so work across systems.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector {
    components: [f64; 3],
    system: CoordinateSystem,
}

impl Vector {
    pub(crate) fn from_nalgebra_vector(v: Vector3) -> Self {
        Self::cartesian(v.x, v.y, v.z)
    }

    /// Constructs a vector from three raw components in the given system.
    ///
    /// No range checks happen here; they happen when the vector is converted.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, system: CoordinateSystem) -> Self {
        Self {
            components: [a, b, c],
            system,
        }
    }

    /// Constructs a vector from cartesian (x, y, z) components.
    #[must_use]
    pub fn cartesian(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, CoordinateSystem::Cartesian)
    }

    /// Constructs a vector from spherical (r, θ, φ) components, with angles in radians.
    ///
    /// This follows the physics convention for [spherical coordinates][sph]: θ (theta) is the
    /// polar angle from positive Z and φ (phi) the azimuthal angle from positive X towards positive
    /// Y.
    ///
    /// [sph]: https://en.wikipedia.org/wiki/Spherical_coordinate_system
    #[must_use]
    pub fn spherical(radius: f64, polar: f64, azimuth: f64) -> Self {
        Self::new(radius, polar, azimuth, CoordinateSystem::Spherical)
    }

    /// Constructs a vector from cylindrical (ρ, φ, z) components, with the angle in radians.
    #[must_use]
    pub fn cylindrical(radius: f64, azimuth: f64, elevation: f64) -> Self {
        Self::new(radius, azimuth, elevation, CoordinateSystem::Cylindrical)
    }

    /// Constructs a spherical vector from typed quantities.
    ///
    /// The radius is stored in meters and the angles in radians.
    ///
    /// ```rust
    /// use approx::assert_relative_eq;
    /// use cosy::Vector;
    /// use uom::si::f64::{Angle, Length};
    /// use uom::si::{angle::degree, length::meter};
    ///
    /// let up = Vector::from_spherical(
    ///     Length::new::<meter>(2.),
    ///     Angle::new::<degree>(0.),
    ///     Angle::new::<degree>(0.),
    /// );
    /// assert_relative_eq!(up, Vector::cartesian(0., 0., 2.));
    /// ```
    #[must_use]
    pub fn from_spherical(
        radius: impl Into<Length>,
        polar: impl Into<Angle>,
        azimuth: impl Into<Angle>,
    ) -> Self {
        Self::spherical(
            radius.into().get::<meter>(),
            polar.into().get::<radian>(),
            azimuth.into().get::<radian>(),
        )
    }

    /// Constructs a cylindrical vector from typed quantities.
    #[must_use]
    pub fn from_cylindrical(
        radius: impl Into<Length>,
        azimuth: impl Into<Angle>,
        elevation: impl Into<Length>,
    ) -> Self {
        Self::cylindrical(
            radius.into().get::<meter>(),
            azimuth.into().get::<radian>(),
            elevation.into().get::<meter>(),
        )
    }

    /// Constructs the zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self::cartesian(0., 0., 0.)
    }

    /// Returns the coordinate system the components are expressed in.
    #[must_use]
    pub fn system(&self) -> CoordinateSystem {
        self.system
    }

    /// Returns the raw components, in the order dictated by [`Vector::system`].
    #[must_use]
    pub fn components(&self) -> [f64; 3] {
        self.components
    }

    /// Returns the cartesian (x, y, z) components of this vector.
    pub fn to_cartesian(&self) -> Result<[f64; 3]> {
        match self.system {
            CoordinateSystem::Cartesian => Ok(self.components),
            CoordinateSystem::Spherical => {
                spherical_to_cartesian(self.components, AngleUnit::Radians)
            }
            CoordinateSystem::Cylindrical => Ok(cylindrical_to_cartesian(
                self.components,
                AngleUnit::Radians,
            )),
        }
    }

    /// Returns the spherical (r, θ, φ) components of this vector, with angles in radians.
    pub fn to_spherical(&self) -> Result<[f64; 3]> {
        match self.system {
            CoordinateSystem::Cartesian => {
                Ok(cartesian_to_spherical(self.components, AngleUnit::Radians))
            }
            CoordinateSystem::Spherical => Ok(self.components),
            CoordinateSystem::Cylindrical => Ok(cylindrical_to_spherical(
                self.components,
                AngleUnit::Radians,
            )),
        }
    }

    /// Returns the cylindrical (ρ, φ, z) components of this vector, with the angle in radians.
    pub fn to_cylindrical(&self) -> Result<[f64; 3]> {
        match self.system {
            CoordinateSystem::Cartesian => Ok(cartesian_to_cylindrical(
                self.components,
                AngleUnit::Radians,
            )),
            CoordinateSystem::Spherical => {
                spherical_to_cylindrical(self.components, AngleUnit::Radians)
            }
            CoordinateSystem::Cylindrical => Ok(self.components),
        }
    }

    /// Re-expresses this vector in `system`.
    ///
    /// ```rust
    /// use approx::assert_relative_eq;
    /// use cosy::{CoordinateSystem, Vector};
    ///
    /// let v = Vector::cartesian(0., 3., 4.);
    /// let spherical = v.in_system(CoordinateSystem::Spherical).unwrap();
    /// assert_eq!(spherical.system(), CoordinateSystem::Spherical);
    /// assert_relative_eq!(spherical.components()[0], 5., epsilon = 1e-12);
    /// assert_relative_eq!(spherical, v, epsilon = 1e-12);
    /// ```
    pub fn in_system(&self, system: CoordinateSystem) -> Result<Self> {
        let [a, b, c] = match system {
            CoordinateSystem::Cartesian => self.to_cartesian()?,
            CoordinateSystem::Spherical => self.to_spherical()?,
            CoordinateSystem::Cylindrical => self.to_cylindrical()?,
        };
        Ok(Self::new(a, b, c, system))
    }

    /// Re-expresses this vector in cartesian components.
    pub fn into_cartesian(self) -> Result<Self> {
        self.in_system(CoordinateSystem::Cartesian)
    }

    fn inner(&self) -> Result<Vector3> {
        self.to_cartesian().map(Vector3::from)
    }

    fn operate(&self, rhs: &Self, op: impl FnOnce(Vector3, Vector3) -> Vector3) -> Result<Self> {
        Ok(Self::from_nalgebra_vector(op(self.inner()?, rhs.inner()?)))
    }

    /// Adds `rhs` to this vector in cartesian space.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.operate(rhs, |a, b| a + b)
    }

    /// Subtracts `rhs` from this vector in cartesian space.
    pub fn subtract(&self, rhs: &Self) -> Result<Self> {
        self.operate(rhs, |a, b| a - b)
    }

    /// Multiplies the cartesian components of the two vectors pairwise.
    #[doc(alias = "hadamard")]
    pub fn component_multiply(&self, rhs: &Self) -> Result<Self> {
        self.operate(rhs, |a, b| a.component_mul(&b))
    }

    /// Divides the cartesian components of this vector by those of `rhs` pairwise.
    ///
    /// Division by a zero component follows IEEE 754 (yielding ±∞ or NaN) and is not an error.
    pub fn component_divide(&self, rhs: &Self) -> Result<Self> {
        self.operate(rhs, |a, b| a.component_div(&b))
    }

    /// Computes the dot (scalar) product between this vector and another.
    pub fn dot(&self, rhs: &Self) -> Result<f64> {
        Ok(self.inner()?.dot(&rhs.inner()?))
    }

    /// Computes the cross product `self × rhs`.
    pub fn cross(&self, rhs: &Self) -> Result<Self> {
        self.operate(rhs, |a, b| a.cross(&b))
    }

    /// Computes the Euclidean length of this vector.
    #[doc(alias = "norm")]
    pub fn magnitude(&self) -> Result<f64> {
        Ok(self.inner()?.norm())
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        v.components
    }
}

/// Iterates over the raw components, without any conversion.
impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.components;
        write!(f, "Vector({a}, {b}, {c}, {})", self.system)
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Vector {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    /// Vectors whose components are out of range never compare equal.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self.inner(), other.inner()) {
            (Ok(a), Ok(b)) => a.abs_diff_eq(&b, epsilon),
            _ => false,
        }
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Vector {
    fn default_max_relative() -> Self::Epsilon {
        Vector3::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        match (self.inner(), other.inner()) {
            (Ok(a), Ok(b)) => a.relative_eq(&b, epsilon, max_relative),
            _ => false,
        }
    }
}
