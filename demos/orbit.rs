use cosy::rotation::rotate_yaw;
use cosy::transform::cartesian_to_spherical;
use cosy::viewpoint::{camera_position, light_position, look_at};
use cosy::{AngleUnit, CoordinateSystem, Vector};
use uom::si::angle::degree;
use uom::si::f64::*;
use uom::si::length::meter;

// a subject sits at the origin; we walk a camera around it on a ring 60° down from straight above
// and keep a light just off to the side of the camera for every shot.
fn main() -> Result<(), cosy::Error> {
    let distance = Length::new::<meter>(2.5);
    let polar = Angle::new::<degree>(60.);
    let light_offset = Length::new::<meter>(0.05);

    for shot in 0..8 {
        let azimuth = Angle::new::<degree>(45. * f64::from(shot));
        let camera = camera_position(distance, polar, azimuth)?;
        let [roll, pitch, yaw] = look_at(camera, [0., 0., 0.])?;
        let light = light_position(camera, Angle::new::<degree>(30.), light_offset)?;

        println!(
            "shot {shot}: camera at {:?} facing (roll {:.1}°, pitch {:.1}°, yaw {:.1}°), light at {:?}",
            camera,
            roll.get::<degree>(),
            pitch.get::<degree>(),
            yaw.get::<degree>(),
            light,
        );
    }

    // the same ring can be walked by rotating the first camera position about Z instead
    let first = camera_position(distance, polar, Angle::new::<degree>(0.))?;
    let quarter = rotate_yaw(first, 90.);
    let [r, polar_deg, azimuth_deg] = cartesian_to_spherical(quarter, AngleUnit::Degrees);
    println!("after a 90° yaw: r = {r:.3}, polar = {polar_deg:.1}°, azimuth = {azimuth_deg:.1}°");

    // and the light's offset from the camera is always the configured distance away
    let camera = Vector::from_spherical(distance, polar, Angle::new::<degree>(0.));
    let light = light_position(camera.to_cartesian()?, Angle::new::<degree>(30.), light_offset)?;
    let light = Vector::new(light[0], light[1], light[2], CoordinateSystem::Cartesian);
    println!(
        "light is {:.3}m from the camera",
        light.subtract(&camera)?.magnitude()?
    );

    Ok(())
}
