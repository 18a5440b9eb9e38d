/// Basis — the camera's orthonormal reference frame.
///
/// `right`, `up` and `forward` are the images of the canonical axes
/// (1,0,0), (0,1,0), (0,0,1) under the camera's rotation. A derived
/// basis is always orthonormal because rotation preserves
/// orthonormality.

use glam::Vec3;
use crate::rotation::{EulerAngles, Rotation};

/// Orthonormal camera frame: right (x), up (y), forward/normal (n).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Image of the canonical x axis
    pub right: Vec3,
    /// Image of the canonical y axis
    pub up: Vec3,
    /// Image of the canonical z axis; rays travel along this vector
    pub forward: Vec3,
}

impl Basis {
    /// The canonical frame (no rotation).
    pub const IDENTITY: Self = Self {
        right: Vec3::X,
        up: Vec3::Y,
        forward: Vec3::Z,
    };

    /// Derive the frame for an orientation: the intrinsic XYZ rotation
    /// applied to the canonical axes.
    pub fn from_euler(orientation: EulerAngles) -> Self {
        let [right, up, forward] = Rotation::from_euler(orientation).canonical_axes();
        Self { right, up, forward }
    }

    /// Check unit lengths and pairwise orthogonality within `tolerance`.
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        (self.right.length() - 1.0).abs() < tolerance
            && (self.up.length() - 1.0).abs() < tolerance
            && (self.forward.length() - 1.0).abs() < tolerance
            && self.right.dot(self.up).abs() < tolerance
            && self.up.dot(self.forward).abs() < tolerance
            && self.forward.dot(self.right).abs() < tolerance
    }
}

#[cfg(test)]
#[path = "basis_tests.rs"]
mod tests;
