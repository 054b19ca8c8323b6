//! Helpers for placing a camera and a light around a subject sitting at the origin.
//!
//! A typical use samples a viewpoint on a sphere around the subject with [`camera_position`],
//! orients the camera towards the subject with [`look_at`], and then places a light on a circle
//! around the camera's line of sight with [`light_position`]:
//!
//! ```rust
//! use cosy::viewpoint::{camera_position, light_position, look_at};
//! use uom::si::f64::{Angle, Length};
//! use uom::si::{angle::degree, length::meter};
//!
//! let camera = camera_position(
//!     Length::new::<meter>(10.),
//!     Angle::new::<degree>(60.),
//!     Angle::new::<degree>(30.),
//! )?;
//! let [roll, pitch, yaw] = look_at(camera, [0., 0., 0.])?;
//! let light = light_position(camera, Angle::new::<degree>(45.), Length::new::<meter>(0.5))?;
//! println!("camera at {camera:?}, light at {light:?}");
//! println!("camera rotation: ({roll:?}, {pitch:?}, {yaw:?})");
//! # Ok::<(), cosy::Error>(())
//! ```

use crate::angles::{AngleUnit, BoundedAngle};
use crate::error::{Error, Result};
use crate::transform::spherical_to_cartesian;
use crate::Vector3;
use nalgebra::UnitQuaternion;
use uom::si::angle::radian;
use uom::si::f64::{Angle, Length};
use uom::si::length::meter;

fn normalize(v: Vector3) -> Result<Vector3> {
    v.try_normalize(0.).ok_or(Error::ZeroLength)
}

/// Computes where a camera `distance` away from the origin sits for the given spherical angles.
///
/// The polar angle is measured from positive Z and must be in [0, π]. The azimuth may be any
/// angle; it is wrapped into (-π, π] before conversion.
pub fn camera_position(
    distance: impl Into<Length>,
    polar: impl Into<Angle>,
    azimuth: impl Into<Angle>,
) -> Result<[f64; 3]> {
    let azimuth = BoundedAngle::new(azimuth).to_azimuth_range();
    spherical_to_cartesian(
        [
            distance.into().get::<meter>(),
            polar.into().get::<radian>(),
            azimuth,
        ],
        AngleUnit::Radians,
    )
}

/// Returns two unit vectors that are perpendicular to `v` and to each other.
///
/// For `v` on the Z axis, this is the X and Y axes. Otherwise, the first vector lies in the XY
/// plane and the second is `v × first`, normalized.
///
/// Fails with [`Error::ZeroLength`] if `v` is the zero vector.
pub fn perpendicular_basis(v: [f64; 3]) -> Result<([f64; 3], [f64; 3])> {
    let [x, y, z] = v;
    if x == 0. && y == 0. {
        if z == 0. {
            return Err(Error::ZeroLength);
        }
        return Ok(([1., 0., 0.], [0., 1., 0.]));
    }

    // both are rescaled to a largest component of 1 so squaring inside the norms cannot leave
    // the range of f64
    let first = normalize(Vector3::new(-y, x, 0.) / x.abs().max(y.abs()))?;
    let v = Vector3::from(v);
    let second = normalize((v / v.amax()).cross(&first))?;
    Ok((first.into(), second.into()))
}

/// Returns the point on the unit circle at `angle` counter-clockwise from positive X.
#[must_use]
pub fn point_on_unit_circle(angle: impl Into<Angle>) -> [f64; 2] {
    let angle = angle.into().get::<radian>();
    [angle.cos(), angle.sin()]
}

/// Places a light on the circle of `radius` around `camera` that is perpendicular to the
/// camera's position vector, at `angle` along that circle.
///
/// The circle is spanned by [`perpendicular_basis`] of the camera position, so this fails with
/// [`Error::ZeroLength`] if the camera sits at the origin.
pub fn light_position(
    camera: [f64; 3],
    angle: impl Into<Angle>,
    radius: impl Into<Length>,
) -> Result<[f64; 3]> {
    let (first, second) = perpendicular_basis(camera)?;
    let [c, s] = point_on_unit_circle(angle);
    let radius = radius.into().get::<meter>();
    let offset = (Vector3::from(first) * c + Vector3::from(second) * s) * radius;
    Ok((Vector3::from(camera) + offset).into())
}

/// Computes the rotation that makes a camera at `camera` look at `target`, as `[roll, pitch, yaw]`
/// Euler angles.
///
/// Cameras look down their local negative Z axis, so the returned rotation maps local -Z onto the
/// direction from `camera` to `target` while keeping local +Y pointing as close to world +Z as
/// possible. If the camera looks straight up or down, local +Y is kept pointing towards world +Y
/// instead.
///
/// The angles are extrinsic rotations about X, then Y, then Z (ie, the rotation matrix is
/// `yaw · pitch · roll`), and can be fed back into [`UnitQuaternion::from_euler_angles`].
///
/// Fails with [`Error::ZeroLength`] if `camera` and `target` coincide.
///
/// ```rust
/// use approx::assert_relative_eq;
/// use cosy::viewpoint::look_at;
/// use uom::si::angle::degree;
///
/// let [roll, pitch, yaw] = look_at([0., -10., 0.], [0., 0., 0.]).unwrap();
/// assert_relative_eq!(roll.get::<degree>(), 90., epsilon = 1e-9);
/// assert_relative_eq!(pitch.get::<degree>(), 0., epsilon = 1e-9);
/// assert_relative_eq!(yaw.get::<degree>(), 0., epsilon = 1e-9);
/// ```
pub fn look_at(camera: [f64; 3], target: [f64; 3]) -> Result<[Angle; 3]> {
    let direction = normalize(Vector3::from(target) - Vector3::from(camera))?;

    let up = if direction.cross(&Vector3::z()).norm() <= 1e-12 {
        log::debug!("camera looks along the Z axis; keeping its up vector towards +Y");
        Vector3::y()
    } else {
        Vector3::z()
    };

    // face_towards maps local +Z onto its argument
    let rotation = UnitQuaternion::face_towards(&-direction, &up);
    let (roll, pitch, yaw) = rotation.euler_angles();
    Ok([
        Angle::new::<radian>(roll),
        Angle::new::<radian>(pitch),
        Angle::new::<radian>(yaw),
    ])
}
