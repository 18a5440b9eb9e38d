//! Camera module — basis, canvas, ray, and the pinhole camera itself.
//!
//! Provides the geometric core for ray generation. The library does
//! NOT store or manage cameras — they are tools provided here, owned
//! and driven by the caller.

mod basis;
mod canvas;
mod ray;
mod camera;

pub use basis::Basis;
pub use canvas::Canvas;
pub use ray::{Ray, RayModel};
pub use camera::{Camera, CameraDesc};
