/// Ray — origin plus direction, the camera's output.
///
/// Consumed by an external renderer or raytracer that intersects it
/// against scene geometry. This crate only generates rays.

use glam::Vec3;

/// A ray with a world-space origin and direction.
///
/// The direction is unit length for every ray the camera produces,
/// except for non-finite degenerate inputs which propagate as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point on the view plane
    pub origin: Vec3,
    /// Travel direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from an origin and a direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point reached after travelling `t` along the direction.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// How per-pixel ray directions are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayModel {
    /// Every pixel shares the camera's forward normal. An approximation
    /// valid for narrow fields of view or orthographic-like use.
    Parallel,

    /// Each ray points from the optical center through its pixel, the
    /// physically accurate perspective projection.
    Perspective,
}

impl Default for RayModel {
    fn default() -> Self {
        RayModel::Parallel
    }
}

#[cfg(test)]
#[path = "ray_tests.rs"]
mod tests;
