//! Pinhole camera demo
//!
//! Mirrors the classic driver scenario: a camera at the origin rolled
//! 90 degrees so it looks down -y, an 800x600 canvas one unit down the
//! view axis, and per-pixel rays under both ray models.
//!
//! Run with: cargo run -p pinhole_demo

use pinhole_camera::camera_info;
use pinhole_camera::glam::Vec3;
use pinhole_camera::pinhole::{Camera, CameraDesc, Error, RayModel, Result};

fn main() -> Result<()> {
    camera_info!("demo", "Building the demo camera");

    let mut camera = Camera::new(CameraDesc {
        center: Vec3::ZERO,
        roll: 90.0,
        width: 600,
        height: 800,
        half_angle_x: 45.0,
        half_angle_y: 45.0,
        ..CameraDesc::default()
    })?;

    camera.canvas_size(1.0);
    let canvas = *camera.canvas().ok_or(Error::UninitializedCanvas)?;

    println!("Camera center:      {:?}", camera.center());
    println!("Camera forward:     {:?}", camera.basis().forward);
    println!("Upper left corner:  {:?}", canvas.upper_left_corner());
    println!("Lower right corner: {:?}", canvas.lower_right_corner());
    println!("Pixel step x:       {:?}", canvas.pixel_step_x());
    println!("Pixel step y:       {:?}", canvas.pixel_step_y());
    println!();

    let ray = camera.pixel_ray(1, 1)?;
    println!("Parallel ray through pixel (1, 1):");
    println!("  origin:    {:?}", ray.origin);
    println!("  direction: {:?}", ray.direction);
    println!();

    // Same pixel again, with rays fanning out from the optical center
    camera.set_ray_model(RayModel::Perspective);
    let ray = camera.pixel_ray(1, 1)?;
    println!("Perspective ray through pixel (1, 1):");
    println!("  origin:    {:?}", ray.origin);
    println!("  direction: {:?}", ray.direction);
    println!();

    println!("Perspective corner directions:");
    for (x, y) in [(0, 0), (599, 0), (0, 799), (599, 799)] {
        let corner = camera.pixel_ray(x, y)?;
        println!("  pixel ({:3}, {:3}): {:?}", x, y, corner.direction);
    }

    camera_info!("demo", "Demo finished");
    Ok(())
}
