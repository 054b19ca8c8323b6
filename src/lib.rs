//! This library converts 3D (and 2D) points between Cartesian, spherical, cylindrical, and polar
//! coordinates, and provides the small amount of vector algebra needed to place cameras and lights
//! around a subject.
//!
//! There are three layers:
//!
//! - the [`transform`] module has the plain conversion functions on `[f64; 3]` (and `[f64; 2]`)
//!   triples, as well as vector sums of polar and spherical coordinates. Each takes an
//!   [`AngleUnit`] so that angles can be given in radians or degrees.
//! - the [`Vector`] type tags three components with the [`CoordinateSystem`] they are expressed
//!   in, converts between systems on request, and does all of its arithmetic in Cartesian space.
//! - the [`rotation`] and [`linalg`] modules have single-axis rotations and the slice-level
//!   primitives those are built on, and [`viewpoint`] builds camera and light placement on top.
//!
//! Spherical coordinates follow the physics convention throughout: `(r, θ, φ)` where θ is the polar
//! angle measured from positive Z in [0, π] and φ is the azimuth measured from positive X towards
//! positive Y in [-π, π]. Conversions _out_ of spherical coordinates check these ranges and fail
//! with [`Error::InvalidCoordinateRange`] rather than silently producing a different point.
//!
//! # Examples
//!
//! Say we want to photograph an object sitting at the origin from a camera 10m away, 60° down
//! from straight above, and want a light 0.5m off to the side of the camera:
//!
//! ```
//! use approx::assert_relative_eq;
//! use cosy::transform::{cartesian_to_spherical, spherical_to_cartesian};
//! use cosy::viewpoint::{light_position, look_at};
//! use cosy::{AngleUnit, CoordinateSystem, Vector};
//! use uom::si::f64::{Angle, Length};
//! use uom::si::{angle::degree, length::meter};
//!
//! // where the camera goes, using degrees on the way in
//! let camera = spherical_to_cartesian([10., 60., 45.], AngleUnit::Degrees)?;
//!
//! // and back again
//! let [r, polar, azimuth] = cartesian_to_spherical(camera, AngleUnit::Degrees);
//! assert_relative_eq!(r, 10., epsilon = 1e-12);
//! assert_relative_eq!(polar, 60., epsilon = 1e-12);
//! assert_relative_eq!(azimuth, 45., epsilon = 1e-12);
//!
//! // the rotation that points the camera at the subject
//! let [roll, pitch, yaw] = look_at(camera, [0., 0., 0.])?;
//! # let _ = (roll, pitch, yaw);
//!
//! // a light on a small circle around the camera
//! let light = light_position(camera, Angle::new::<degree>(30.), Length::new::<meter>(0.5))?;
//!
//! // vectors can mix coordinate systems; arithmetic always happens in Cartesian space
//! let camera = Vector::cartesian(camera[0], camera[1], camera[2]);
//! let light = Vector::new(light[0], light[1], light[2], CoordinateSystem::Cartesian)
//!     .in_system(CoordinateSystem::Spherical)?;
//! let between = light.subtract(&camera)?;
//! assert_eq!(between.system(), CoordinateSystem::Cartesian);
//! assert_relative_eq!(between.magnitude()?, 0.5, epsilon = 1e-9);
//! # Ok::<(), cosy::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde` (default): `Serialize` and `Deserialize` for [`Vector`], [`CoordinateSystem`], and
//!   [`AngleUnit`].
//! - `approx` (default): [`approx`] comparisons for [`Vector`] (on Cartesian projections).
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade at `debug` level when it substitutes a convention for
//! an undefined answer (eg, the polar angle of the origin, or the direction of a vector sum that
//! cancelled out). It never installs a logger.

mod coordinate_systems;
mod error;
mod vectors;

pub mod angles;
pub mod linalg;
pub mod rotation;
pub mod transform;
pub mod viewpoint;

pub(crate) type Vector3 = nalgebra::Vector3<f64>;

pub use angles::AngleUnit;
pub use coordinate_systems::{CoordinateSystem, UnknownCoordinateSystem};
pub use error::{Component, Error, Result};
pub use vectors::Vector;
