//! Conversions between Cartesian, spherical, cylindrical, and 2D polar coordinates.
//!
//! The conventions used throughout are:
//!
//! - cartesian: `[x, y, z]`;
//! - spherical: `[r, θ, φ]` in the physics convention, where r is the radial distance, θ (theta)
//!   is the polar angle measured from positive Z and lies in [0, π], and φ (phi) is the azimuthal
//!   angle measured from positive X towards positive Y and lies in [-π, π];
//! - cylindrical: `[ρ, φ, z]`, ie, polar coordinates in the XY plane plus a height along Z;
//! - polar: `[r, φ]` in the XY plane.
//!
//! Every function takes an [`AngleUnit`] that applies to the angular components of both its input
//! and its output. Lengths are never scaled.
//!
//! See also [spherical coordinates][sph] and [cylindrical coordinates][cyl].
//!
//! [sph]: https://en.wikipedia.org/wiki/Spherical_coordinate_system
//! [cyl]: https://en.wikipedia.org/wiki/Cylindrical_coordinate_system

use crate::angles::AngleUnit;
use crate::error::{Component, Error, Result};
use std::f64::consts::PI;

/// Checks that a spherical triple (in radians) lies within the valid ranges.
fn validate_spherical(r: f64, polar: f64, azimuth: f64) -> Result<()> {
    // written as negated containment so that NaN components are rejected too
    if !(r >= 0.) {
        return Err(Error::InvalidCoordinateRange {
            component: Component::Radius,
            value: r,
            min: 0.,
            max: f64::INFINITY,
        });
    }
    if !(0. ..=PI).contains(&polar) {
        return Err(Error::InvalidCoordinateRange {
            component: Component::PolarAngle,
            value: polar,
            min: 0.,
            max: PI,
        });
    }
    if !(-PI..=PI).contains(&azimuth) {
        return Err(Error::InvalidCoordinateRange {
            component: Component::AzimuthAngle,
            value: azimuth,
            min: -PI,
            max: PI,
        });
    }
    Ok(())
}

/// Polar angle of a point at height `z` and distance `r` from origin.
///
/// The polar angle of the origin is ill-defined; by convention we report 0 (ie, the point is
/// treated as lying on positive Z).
fn polar_angle(z: f64, r: f64) -> f64 {
    if r > 0. {
        // clamp guards against |z| exceeding r by an ulp after rounding
        (z / r).clamp(-1., 1.).acos()
    } else {
        log::debug!("polar angle requested at the origin; using 0");
        0.
    }
}

/// Transforms cartesian `[x, y, z]` into spherical `[r, θ, φ]`.
///
/// The azimuth is computed with `atan2` and so lies in (-π, π]. Along the Z axis (and at the
/// origin) the azimuth is ill-defined and its value is unspecified; currently it follows
/// `atan2(±0, ±0)`.
///
/// At the origin the polar angle is 0 by convention. This is not an error.
///
/// # Examples
///
/// ```rust
/// use approx::assert_relative_eq;
/// use cosy::{transform::cartesian_to_spherical, AngleUnit};
///
/// let [r, polar, azimuth] = cartesian_to_spherical([0., 1., 0.], AngleUnit::Degrees);
/// assert_relative_eq!(r, 1.);
/// assert_relative_eq!(polar, 90.);
/// assert_relative_eq!(azimuth, 90.);
/// ```
#[must_use]
pub fn cartesian_to_spherical([x, y, z]: [f64; 3], unit: AngleUnit) -> [f64; 3] {
    let r = x.hypot(y).hypot(z);
    let polar = polar_angle(z, r);
    let azimuth = y.atan2(x);

    [r, unit.from_radians(polar), unit.from_radians(azimuth)]
}

/// Transforms spherical `[r, θ, φ]` into cartesian `[x, y, z]`.
///
/// Fails with [`Error::InvalidCoordinateRange`] if r is negative, θ is outside [0, π], or φ is
/// outside [-π, π] (or [0°, 180°] and [-180°, 180°] respectively for [`AngleUnit::Degrees`]).
///
/// # Examples
///
/// ```rust
/// use approx::assert_relative_eq;
/// use cosy::{transform::spherical_to_cartesian, AngleUnit};
///
/// let xyz = spherical_to_cartesian([2., 90., 0.], AngleUnit::Degrees).unwrap();
/// assert_relative_eq!(xyz[0], 2.);
/// assert_relative_eq!(xyz[1], 0.);
/// assert!(xyz[2].abs() < 1e-15);
///
/// assert!(spherical_to_cartesian([2., 200., 0.], AngleUnit::Degrees).is_err());
/// ```
pub fn spherical_to_cartesian(
    [r, polar, azimuth]: [f64; 3],
    unit: AngleUnit,
) -> Result<[f64; 3]> {
    let polar = unit.to_radians(polar);
    let azimuth = unit.to_radians(azimuth);
    validate_spherical(r, polar, azimuth)?;

    let (sin_polar, cos_polar) = polar.sin_cos();
    let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();
    Ok([
        r * sin_polar * cos_azimuth,
        r * sin_polar * sin_azimuth,
        r * cos_polar,
    ])
}

/// Transforms cylindrical `[ρ, φ, z]` into spherical `[r, θ, φ]`.
///
/// The azimuth is passed through unchanged. A point at the origin gets a polar angle of 0, as in
/// [`cartesian_to_spherical`].
#[must_use]
pub fn cylindrical_to_spherical(
    [radius, azimuth, elevation]: [f64; 3],
    unit: AngleUnit,
) -> [f64; 3] {
    let distance = radius.hypot(elevation);
    let polar = polar_angle(elevation, distance);

    [distance, unit.from_radians(polar), azimuth]
}

/// Transforms spherical `[r, θ, φ]` into cylindrical `[ρ, φ, z]`.
///
/// Applies the same range checks as [`spherical_to_cartesian`].
pub fn spherical_to_cylindrical(
    [r, polar, azimuth]: [f64; 3],
    unit: AngleUnit,
) -> Result<[f64; 3]> {
    let polar_rad = unit.to_radians(polar);
    validate_spherical(r, polar_rad, unit.to_radians(azimuth))?;

    let (sin_polar, cos_polar) = polar_rad.sin_cos();
    Ok([r * sin_polar, azimuth, r * cos_polar])
}

/// Transforms cartesian `[x, y, z]` into cylindrical `[ρ, φ, z]`.
///
/// As with [`cartesian_to_spherical`], the azimuth of points on the Z axis is unspecified.
#[must_use]
pub fn cartesian_to_cylindrical([x, y, z]: [f64; 3], unit: AngleUnit) -> [f64; 3] {
    let radius = x.hypot(y);
    let azimuth = y.atan2(x);

    [radius, unit.from_radians(azimuth), z]
}

/// Transforms cylindrical `[ρ, φ, z]` into cartesian `[x, y, z]`.
#[must_use]
pub fn cylindrical_to_cartesian([radius, azimuth, z]: [f64; 3], unit: AngleUnit) -> [f64; 3] {
    let (sin_azimuth, cos_azimuth) = unit.to_radians(azimuth).sin_cos();
    [radius * cos_azimuth, radius * sin_azimuth, z]
}

/// Transforms 2D polar `[r, φ]` into cartesian `[x, y]`.
#[must_use]
pub fn polar_to_cartesian([r, angle]: [f64; 2], unit: AngleUnit) -> [f64; 2] {
    let (sin, cos) = unit.to_radians(angle).sin_cos();
    [r * cos, r * sin]
}

/// Transforms 2D cartesian `[x, y]` into polar `[r, φ]` with φ in (-π, π].
#[must_use]
pub fn cartesian_to_polar([x, y]: [f64; 2], unit: AngleUnit) -> [f64; 2] {
    [x.hypot(y), unit.from_radians(y.atan2(x))]
}

/// Adds any number of 2D vectors given in polar form `[r, φ]`.
///
/// The vectors are summed through their cartesian decomposition and the sum is converted back
/// to polar form. An empty input sums to `[0, 0]`, and so does any input whose sum is no larger
/// than the floating-point noise of its summands (eg, two equal and opposite vectors).
///
/// # Examples
///
/// ```rust
/// use approx::assert_relative_eq;
/// use cosy::{transform::add_polar_coordinates, AngleUnit};
///
/// let [r, angle] = add_polar_coordinates(&[[1., 0.], [1., 90.]], AngleUnit::Degrees);
/// assert_relative_eq!(r, 2f64.sqrt());
/// assert_relative_eq!(angle, 45.);
/// ```
#[must_use]
pub fn add_polar_coordinates(vectors: &[[f64; 2]], unit: AngleUnit) -> [f64; 2] {
    let (x, y) = vectors
        .iter()
        .map(|&v| polar_to_cartesian(v, unit))
        .fold((0., 0.), |(x, y), [dx, dy]| (x + dx, y + dy));

    if is_cancelled(x.hypot(y), vectors.iter().map(|v| v[0])) {
        return [0., 0.];
    }
    cartesian_to_polar([x, y], unit)
}

/// Whether a sum of magnitude `magnitude` is indistinguishable from rounding noise in the
/// summands with radii `radii`.
fn is_cancelled(magnitude: f64, radii: impl Iterator<Item = f64>) -> bool {
    const NOISE_FLOOR: f64 = 4. * f64::EPSILON;

    let scale: f64 = radii.map(f64::abs).sum();
    if magnitude <= scale * NOISE_FLOOR {
        log::debug!("vector sum of magnitude {magnitude} cancelled out; reporting zero");
        true
    } else {
        false
    }
}

/// Adds any number of 3D vectors given in spherical form `[r, θ, φ]`.
///
/// Each vector is converted to cartesian (and thus range-checked), the vectors are summed
/// component-wise, and the sum is converted back to spherical form. As with
/// [`add_polar_coordinates`], sums that cancel out are reported as `[0, 0, 0]`.
pub fn add_spherical_coordinates(vectors: &[[f64; 3]], unit: AngleUnit) -> Result<[f64; 3]> {
    let mut sum = [0.; 3];
    for &v in vectors {
        let xyz = spherical_to_cartesian(v, unit)?;
        for (total, component) in sum.iter_mut().zip(xyz) {
            *total += component;
        }
    }

    let [x, y, z] = sum;
    if is_cancelled(x.hypot(y).hypot(z), vectors.iter().map(|v| v[0])) {
        return Ok([0., 0., 0.]);
    }
    Ok(cartesian_to_spherical(sum, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angles::BoundedAngle;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use quickcheck::{quickcheck, TestResult};
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, TAU};

    const DEG: AngleUnit = AngleUnit::Degrees;
    const RAD: AngleUnit = AngleUnit::Radians;

    // fixtures in degrees, accurate to well beyond 10 decimal places
    const P1_CARTESIAN: [f64; 3] = [2., 2., 2.];
    const P1_SPHERICAL: [f64; 3] = [3.464_101_615_137_754_6, 54.735_610_317_245_35, 45.];
    const P2_CARTESIAN: [f64; 3] = [1., 2., 3.];
    const P2_SPHERICAL: [f64; 3] = [
        3.741_657_386_773_941_4,
        36.699_225_200_489_88,
        63.434_948_822_922_01,
    ];
    const P1_P2_CARTESIAN: [f64; 3] = [3., 4., 5.];
    const P1_P2_SPHERICAL: [f64; 3] = [7.071_067_811_865_475, 45., 53.130_102_354_155_98];
    const P3_CARTESIAN: [f64; 3] = [30.641_777_724_759_12, 25.711_504_387_461_573, 0.];
    const P3_SPHERICAL: [f64; 3] = [40., 90., 40.];

    const DECIMAL_ACCURACY: f64 = 1e-10;

    #[rstest]
    #[case(P1_CARTESIAN, P1_SPHERICAL)]
    #[case(P2_CARTESIAN, P2_SPHERICAL)]
    #[case(P1_P2_CARTESIAN, P1_P2_SPHERICAL)]
    #[case(P3_CARTESIAN, P3_SPHERICAL)]
    fn cartesian_to_spherical_fixtures(#[case] cartesian: [f64; 3], #[case] spherical: [f64; 3]) {
        let result = cartesian_to_spherical(cartesian, DEG);
        assert_abs_diff_eq!(result.as_slice(), spherical.as_slice(), epsilon = DECIMAL_ACCURACY);
    }

    #[rstest]
    #[case(P1_SPHERICAL, P1_CARTESIAN)]
    #[case(P3_SPHERICAL, P3_CARTESIAN)]
    fn spherical_to_cartesian_fixtures(#[case] spherical: [f64; 3], #[case] cartesian: [f64; 3]) {
        let result = spherical_to_cartesian(spherical, DEG).unwrap();
        assert_abs_diff_eq!(result.as_slice(), cartesian.as_slice(), epsilon = DECIMAL_ACCURACY);
    }

    #[test]
    fn spherical_roundtrip_fixture() {
        let back = cartesian_to_spherical(spherical_to_cartesian(P1_SPHERICAL, DEG).unwrap(), DEG);
        assert_abs_diff_eq!(back.as_slice(), P1_SPHERICAL.as_slice(), epsilon = DECIMAL_ACCURACY);
    }

    #[test]
    fn origin_has_zero_polar_angle() {
        let [r, polar, azimuth] = cartesian_to_spherical([0., 0., 0.], RAD);
        assert_eq!(r, 0.);
        assert_eq!(polar, 0.);
        assert!(azimuth.is_finite());
    }

    #[rstest]
    #[case([0., 0., 5.], 0.)]
    #[case([0., 0., -5.], PI)]
    #[case([5., 0., 0.], FRAC_PI_2)]
    fn polar_angle_along_axes(#[case] cartesian: [f64; 3], #[case] polar: f64) {
        assert_relative_eq!(cartesian_to_spherical(cartesian, RAD)[1], polar);
    }

    #[test]
    fn azimuth_of_negative_x_is_positive_pi() {
        assert_relative_eq!(cartesian_to_spherical([-1., 0., 0.], RAD)[2], PI);
    }

    #[rstest]
    #[case([-1., 0., 0.], Component::Radius)]
    #[case([1., -0.1, 0.], Component::PolarAngle)]
    #[case([1., PI + 1e-9, 0.], Component::PolarAngle)]
    #[case([1., 0.5, -PI - 1e-9], Component::AzimuthAngle)]
    #[case([1., 0.5, 4.], Component::AzimuthAngle)]
    #[case([f64::NAN, 0.5, 0.], Component::Radius)]
    #[case([1., f64::NAN, 0.], Component::PolarAngle)]
    fn spherical_range_violations(#[case] spherical: [f64; 3], #[case] expected: Component) {
        match spherical_to_cartesian(spherical, RAD) {
            Err(Error::InvalidCoordinateRange { component, .. }) => {
                assert_eq!(component, expected)
            }
            other => panic!("expected a range error for {spherical:?}, got {other:?}"),
        }
        assert!(spherical_to_cylindrical(spherical, RAD).is_err());
    }

    #[rstest]
    #[case([1., 180., 180.])]
    #[case([1., 0., -180.])]
    #[case([0., 90., 0.])]
    fn spherical_range_boundaries_in_degrees_are_valid(#[case] spherical: [f64; 3]) {
        assert!(spherical_to_cartesian(spherical, DEG).is_ok());
    }

    #[test]
    fn spherical_range_error_reports_radians() {
        let err = spherical_to_cartesian([1., 190., 0.], DEG).unwrap_err();
        let Error::InvalidCoordinateRange { value, max, .. } = err else {
            panic!("unexpected error {err:?}");
        };
        assert_relative_eq!(value, 190f64.to_radians(), epsilon = 1e-12);
        assert_eq!(max, PI);
    }

    #[rstest]
    #[case([3e-200, 4e-200, 0.], [5e-200, FRAC_PI_2, 0.927_295_218_001_612_2])]
    #[case([3e200, 4e200, 0.], [5e200, FRAC_PI_2, 0.927_295_218_001_612_2])]
    #[case([0., 3e-200, 4e-200], [5e-200, 0.643_501_108_793_284_4, FRAC_PI_2])]
    #[case([0., -3e200, -4e200], [5e200, PI - 0.643_501_108_793_284_4, -FRAC_PI_2])]
    fn cartesian_to_spherical_at_extreme_scales(
        #[case] cartesian: [f64; 3],
        #[case] spherical: [f64; 3],
    ) {
        let [r, polar, azimuth] = cartesian_to_spherical(cartesian, RAD);
        assert_relative_eq!(r, spherical[0], max_relative = 1e-12);
        assert_relative_eq!(polar, spherical[1], epsilon = 1e-12);
        assert_relative_eq!(azimuth, spherical[2], epsilon = 1e-12);
    }

    #[rstest]
    #[case([3e-200, 4e-200, 1.], 5e-200)]
    #[case([3e200, 4e200, -1.], 5e200)]
    fn cartesian_to_cylindrical_at_extreme_scales(
        #[case] cartesian: [f64; 3],
        #[case] radius: f64,
    ) {
        let cylindrical = cartesian_to_cylindrical(cartesian, RAD);
        assert_relative_eq!(cylindrical[0], radius, max_relative = 1e-12);
        assert_relative_eq!(cylindrical[1], 0.927_295_218_001_612_2, epsilon = 1e-12);
        assert_eq!(cylindrical[2], cartesian[2]);
    }

    #[rstest]
    #[case([3e-200, 0.5, 4e-200], 5e-200)]
    #[case([3e200, 0.5, 4e200], 5e200)]
    fn cylindrical_to_spherical_at_extreme_scales(
        #[case] cylindrical: [f64; 3],
        #[case] distance: f64,
    ) {
        let [r, polar, azimuth] = cylindrical_to_spherical(cylindrical, RAD);
        assert_relative_eq!(r, distance, max_relative = 1e-12);
        assert_relative_eq!(polar, 0.643_501_108_793_284_4, epsilon = 1e-12);
        assert_eq!(azimuth, 0.5);
    }

    #[rstest]
    #[case([3., 0., 4.], [5., 0.643_501_108_793_284_4, 0.])]
    #[case([0., 1.2, -2.], [2., PI, 1.2])]
    #[case([0., 0.3, 0.], [0., 0., 0.3])]
    fn cylindrical_to_spherical_known(#[case] cylindrical: [f64; 3], #[case] spherical: [f64; 3]) {
        let result = cylindrical_to_spherical(cylindrical, RAD);
        assert_abs_diff_eq!(result.as_slice(), spherical.as_slice(), epsilon = 1e-12);
    }

    #[test]
    fn cylindrical_spherical_roundtrip() {
        let cylindrical = [3., 120., -4.];
        let spherical = cylindrical_to_spherical(cylindrical, DEG);
        let back = spherical_to_cylindrical(spherical, DEG).unwrap();
        assert_abs_diff_eq!(back.as_slice(), cylindrical.as_slice(), epsilon = 1e-10);
    }

    #[test]
    fn cartesian_cylindrical_roundtrip() {
        let cartesian = [-1.5, 2.5, 7.];
        let cylindrical = cartesian_to_cylindrical(cartesian, DEG);
        assert_relative_eq!(cylindrical[0], (1.5f64 * 1.5 + 2.5 * 2.5).sqrt());
        assert_relative_eq!(cylindrical[2], 7.);
        let back = cylindrical_to_cartesian(cylindrical, DEG);
        assert_abs_diff_eq!(back.as_slice(), cartesian.as_slice(), epsilon = 1e-12);
    }

    #[rstest]
    #[case([2., 0.], [2., 0.])]
    #[case([2., 90.], [0., 2.])]
    #[case([1., 180.], [-1., 0.])]
    #[case([3., -90.], [0., -3.])]
    fn polar_to_cartesian_known(#[case] polar: [f64; 2], #[case] cartesian: [f64; 2]) {
        let result = polar_to_cartesian(polar, DEG);
        assert_abs_diff_eq!(result.as_slice(), cartesian.as_slice(), epsilon = 1e-12);
        let back = cartesian_to_polar(result, DEG);
        assert_abs_diff_eq!(back[0], polar[0], epsilon = 1e-12);
        assert_abs_diff_eq!(
            BoundedAngle::from_radians(back[1].to_radians()),
            BoundedAngle::from_radians(polar[1].to_radians()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn opposite_polar_vectors_cancel() {
        let [r, angle] = add_polar_coordinates(&[[1., 0.], [1., PI]], RAD);
        assert_abs_diff_eq!(r, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(angle, 0., epsilon = 1e-9);
    }

    #[test]
    fn polar_addition_honours_degrees() {
        let [r, angle] = add_polar_coordinates(&[[2., 30.]], DEG);
        assert_relative_eq!(r, 2.);
        assert_relative_eq!(angle, 30., epsilon = 1e-12);

        let [r, angle] = add_polar_coordinates(&[[1., 0.], [1., 90.], [1., 180.]], DEG);
        assert_relative_eq!(r, 1., epsilon = 1e-12);
        assert_relative_eq!(angle, 90., epsilon = 1e-12);
    }

    #[test]
    fn polar_addition_of_nothing_is_zero() {
        assert_eq!(add_polar_coordinates(&[], RAD), [0., 0.]);
    }

    #[test]
    fn spherical_addition_of_nothing_is_zero() {
        assert_eq!(add_spherical_coordinates(&[], DEG).unwrap(), [0., 0., 0.]);
    }

    #[test]
    fn spherical_addition_fixture() {
        let sum = add_spherical_coordinates(&[P1_SPHERICAL, P2_SPHERICAL], DEG).unwrap();
        assert_abs_diff_eq!(sum.as_slice(), P1_P2_SPHERICAL.as_slice(), epsilon = DECIMAL_ACCURACY);
    }

    #[test]
    fn spherical_addition_matches_cartesian_sum() {
        let via_spherical = spherical_to_cartesian(
            add_spherical_coordinates(&[P1_SPHERICAL, P2_SPHERICAL], DEG).unwrap(),
            DEG,
        )
        .unwrap();

        let p1 = spherical_to_cartesian(P1_SPHERICAL, DEG).unwrap();
        let p2 = spherical_to_cartesian(P2_SPHERICAL, DEG).unwrap();
        let via_cartesian = [p1[0] + p2[0], p1[1] + p2[1], p1[2] + p2[2]];

        assert_abs_diff_eq!(
            via_spherical.as_slice(),
            via_cartesian.as_slice(),
            epsilon = DECIMAL_ACCURACY
        );
        assert_abs_diff_eq!(
            via_spherical.as_slice(),
            P1_P2_CARTESIAN.as_slice(),
            epsilon = DECIMAL_ACCURACY
        );
    }

    #[test]
    fn opposite_spherical_vectors_cancel() {
        let sum = add_spherical_coordinates(&[[2., 30., 45.], [2., 150., -135.]], DEG).unwrap();
        assert_eq!(sum, [0., 0., 0.]);
    }

    #[test]
    fn spherical_addition_rejects_invalid_input() {
        assert!(add_spherical_coordinates(&[P1_SPHERICAL, [1., 181., 0.]], DEG).is_err());
    }

    /// quickcheck will give us awkward f64 values -- we ignore those
    fn well_behaved(g: &mut quickcheck::Gen) -> f64 {
        loop {
            match <f64 as quickcheck::Arbitrary>::arbitrary(g) {
                0. => break 0.,
                f if f.is_normal() => break f,
                _ => {}
            }
        }
    }

    /// A spherical triple in radians, away from the origin and the poles.
    #[derive(Clone, Copy, Debug)]
    struct Spherical([f64; 3]);

    impl quickcheck::Arbitrary for Spherical {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let r = well_behaved(g).abs().rem_euclid(1000.) + 1e-3;
            let polar = well_behaved(g).rem_euclid(PI - 0.02) + 0.01;
            let azimuth = well_behaved(g).rem_euclid(TAU) - PI;
            Self([r, polar, azimuth])
        }
    }

    /// A polar pair in radians.
    #[derive(Clone, Copy, Debug)]
    struct Polar([f64; 2]);

    impl quickcheck::Arbitrary for Polar {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let r = well_behaved(g).abs().rem_euclid(100.);
            let angle = well_behaved(g).rem_euclid(TAU) - PI;
            Self([r, angle])
        }
    }

    quickcheck! {
        fn spherical_cartesian_roundtrip(spherical: Spherical) -> () {
            let Spherical([r, polar, azimuth]) = spherical;
            let cartesian = spherical_to_cartesian([r, polar, azimuth], RAD)
                .expect("arbitrary spherical coordinates are in range");
            let [r2, polar2, azimuth2] = cartesian_to_spherical(cartesian, RAD);

            assert_relative_eq!(r2, r, max_relative = 1e-12);
            assert_abs_diff_eq!(polar2, polar, epsilon = 1e-10);
            assert_abs_diff_eq!(
                BoundedAngle::from_radians(azimuth2),
                BoundedAngle::from_radians(azimuth),
                epsilon = 1e-10
            );
        }
    }

    /// A cylindrical triple in radians, kept off the Z axis.
    #[derive(Clone, Copy, Debug)]
    struct Cylindrical([f64; 3]);

    impl quickcheck::Arbitrary for Cylindrical {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let radius = well_behaved(g).abs().rem_euclid(999.) + 1.;
            let azimuth = well_behaved(g).rem_euclid(TAU) - PI;
            let z = well_behaved(g).rem_euclid(2000.) - 1000.;
            Self([radius, azimuth, z])
        }
    }

    fn assert_same_cylindrical(actual: [f64; 3], expected: [f64; 3]) {
        assert_relative_eq!(actual[0], expected[0], epsilon = 1e-9, max_relative = 1e-12);
        assert_abs_diff_eq!(
            BoundedAngle::from_radians(actual[1]),
            BoundedAngle::from_radians(expected[1]),
            epsilon = 1e-10
        );
        assert_abs_diff_eq!(actual[2], expected[2], epsilon = 1e-9);
    }

    quickcheck! {
        fn cylindrical_cartesian_roundtrip(cylindrical: Cylindrical) -> () {
            let cartesian = cylindrical_to_cartesian(cylindrical.0, RAD);
            assert_same_cylindrical(cartesian_to_cylindrical(cartesian, RAD), cylindrical.0);
        }
    }

    quickcheck! {
        fn cylindrical_spherical_roundtrip_holds(cylindrical: Cylindrical) -> () {
            let spherical = cylindrical_to_spherical(cylindrical.0, RAD);
            let back = spherical_to_cylindrical(spherical, RAD)
                .expect("converted spherical coordinates are in range");
            assert_same_cylindrical(back, cylindrical.0);
        }
    }

    quickcheck! {
        fn polar_cartesian_roundtrip(polar: Polar) -> TestResult {
            let Polar([r, angle]) = polar;
            if r < 1e-3 {
                return TestResult::discard();
            }
            let [r2, angle2] = cartesian_to_polar(polar_to_cartesian([r, angle], RAD), RAD);
            assert_relative_eq!(r2, r, epsilon = 1e-12, max_relative = 1e-12);
            assert_abs_diff_eq!(
                BoundedAngle::from_radians(angle2),
                BoundedAngle::from_radians(angle),
                epsilon = 1e-10
            );
            TestResult::passed()
        }
    }

    quickcheck! {
        fn polar_addition_commutes(a: Polar, b: Polar) -> () {
            let ab = add_polar_coordinates(&[a.0, b.0], RAD);
            let ba = add_polar_coordinates(&[b.0, a.0], RAD);
            assert_eq!(ab, ba);
        }
    }

    quickcheck! {
        fn spherical_addition_is_order_independent(a: Spherical, b: Spherical, c: Spherical) -> () {
            let orders = [
                [a.0, b.0, c.0],
                [a.0, c.0, b.0],
                [b.0, a.0, c.0],
                [b.0, c.0, a.0],
                [c.0, a.0, b.0],
                [c.0, b.0, a.0],
            ];
            let reference = spherical_to_cartesian(
                add_spherical_coordinates(&orders[0], RAD).expect("inputs are in range"),
                RAD,
            )
            .expect("sums are in range");
            for order in &orders[1..] {
                let sum = spherical_to_cartesian(
                    add_spherical_coordinates(order, RAD).expect("inputs are in range"),
                    RAD,
                )
                .expect("sums are in range");
                assert_abs_diff_eq!(sum.as_slice(), reference.as_slice(), epsilon = 1e-9);
            }
        }
    }
}
