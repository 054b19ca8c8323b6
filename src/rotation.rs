//! Rotations about a single cartesian axis.
//!
//! The three operators are:
//!
//! - roll is rotation about the X axis;
//! - pitch is rotation about the Y axis; and
//! - yaw is rotation about the Z axis.
//!
//! Each one builds its 3×3 rotation matrix from a single angle in degrees and applies it with
//! [`mat3_multiply`]. Rotations do not commute, so when combining them the caller chooses the
//! order by applying one operator to the output of another:
//!
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use cosy::rotation::{rotate_pitch, rotate_yaw};
//!
//! let v = [1., 0., 0.];
//! let yaw_then_pitch = rotate_pitch(rotate_yaw(v, 90.), 90.);
//! let pitch_then_yaw = rotate_yaw(rotate_pitch(v, 90.), 90.);
//! assert_abs_diff_eq!(yaw_then_pitch.as_slice(), [0., 1., 0.].as_slice());
//! assert_abs_diff_eq!(pitch_then_yaw.as_slice(), [0., 0., 1.].as_slice());
//! ```
//!
//! Be aware that rotational angles have high ambiguities in literature and are easy to use wrong.
//! In particular, the pitch matrix here is `[[c, 0, -s], [0, 1, 0], [s, 0, c]]`, which turns
//! positive X towards positive Z for positive angles.

use crate::angles::{cos_deg, sin_deg};
use crate::linalg::mat3_multiply;
use nalgebra::Matrix3;
use uom::si::angle::degree;
use uom::si::f64::Angle;

type Rows = [[f64; 3]; 3];

/// Rounds to 15 decimal places.
///
/// At exact multiples of 90°, `sin`/`cos` are ~1e-16 away from 0 or ±1; this snaps them back.
fn round_15(x: f64) -> f64 {
    const SCALE: f64 = 1e15;
    (x * SCALE).round() / SCALE
}

fn cos_sin(angle_deg: f64) -> (f64, f64) {
    (round_15(cos_deg(angle_deg)), round_15(sin_deg(angle_deg)))
}

fn roll_rows(angle_deg: f64) -> Rows {
    let (c, s) = cos_sin(angle_deg);
    [[1., 0., 0.], [0., c, -s], [0., s, c]]
}

fn pitch_rows(angle_deg: f64) -> Rows {
    let (c, s) = cos_sin(angle_deg);
    [[c, 0., -s], [0., 1., 0.], [s, 0., c]]
}

fn yaw_rows(angle_deg: f64) -> Rows {
    let (c, s) = cos_sin(angle_deg);
    [[c, -s, 0.], [s, c, 0.], [0., 0., 1.]]
}

fn apply(rows: Rows, vec: [f64; 3]) -> [f64; 3] {
    mat3_multiply(rows, vec)
}

/// Rotates `vec` about the X axis by `angle_deg` degrees.
///
/// ```text
/// | 1    0          0      |
/// | 0 cos(roll) -sin(roll) |
/// | 0 sin(roll)  cos(roll) |
/// ```
#[must_use]
pub fn rotate_roll(vec: [f64; 3], angle_deg: f64) -> [f64; 3] {
    apply(roll_rows(angle_deg), vec)
}

/// Rotates `vec` about the Y axis by `angle_deg` degrees.
///
/// ```text
/// | cos(pitch) 0 -sin(pitch) |
/// |     0      1      0      |
/// | sin(pitch) 0  cos(pitch) |
/// ```
#[must_use]
pub fn rotate_pitch(vec: [f64; 3], angle_deg: f64) -> [f64; 3] {
    apply(pitch_rows(angle_deg), vec)
}

/// Rotates `vec` about the Z axis by `angle_deg` degrees.
///
/// ```text
/// | cos(yaw) -sin(yaw) 0 |
/// | sin(yaw)  cos(yaw) 0 |
/// |    0         0     1 |
/// ```
#[must_use]
pub fn rotate_yaw(vec: [f64; 3], angle_deg: f64) -> [f64; 3] {
    apply(yaw_rows(angle_deg), vec)
}

fn to_matrix(rows: Rows) -> Matrix3<f64> {
    Matrix3::from_row_slice(&rows.concat())
}

/// Returns the matrix applied by [`rotate_roll`].
#[must_use]
pub fn roll_matrix(angle: impl Into<Angle>) -> Matrix3<f64> {
    to_matrix(roll_rows(angle.into().get::<degree>()))
}

/// Returns the matrix applied by [`rotate_pitch`].
#[must_use]
pub fn pitch_matrix(angle: impl Into<Angle>) -> Matrix3<f64> {
    to_matrix(pitch_rows(angle.into().get::<degree>()))
}

/// Returns the matrix applied by [`rotate_yaw`].
///
/// Matrices compose by multiplication, rightmost first:
///
/// ```rust
/// use approx::assert_relative_eq;
/// use cosy::rotation::{pitch_matrix, rotate_pitch, rotate_yaw, yaw_matrix};
/// use nalgebra::Vector3;
/// use uom::si::{angle::degree, f64::Angle};
///
/// let combined = pitch_matrix(Angle::new::<degree>(30.)) * yaw_matrix(Angle::new::<degree>(45.));
/// let v = combined * Vector3::new(1., 2., 3.);
/// let expected = rotate_pitch(rotate_yaw([1., 2., 3.], 45.), 30.);
/// assert_relative_eq!(v, Vector3::from(expected), epsilon = 1e-12);
/// ```
#[must_use]
pub fn yaw_matrix(angle: impl Into<Angle>) -> Matrix3<f64> {
    to_matrix(yaw_rows(angle.into().get::<degree>()))
}
