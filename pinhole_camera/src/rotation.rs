//! Rotation math for camera orientation
//!
//! Euler angles and the intrinsic XYZ rotation built from them, kept
//! separate from the camera so the rotation is testable in isolation.

use glam::{Quat, Vec3};

/// Euler angles in radians.
///
/// `roll`, `pitch` and `yaw` are rotation angles about the X, Y and Z
/// axes respectively. Angles are arbitrary reals; out-of-range values
/// simply rotate the frame further.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    /// Rotation about the X axis, radians
    pub roll: f32,
    /// Rotation about the Y axis, radians
    pub pitch: f32,
    /// Rotation about the Z axis, radians
    pub yaw: f32,
}

impl EulerAngles {
    /// No rotation.
    pub const ZERO: Self = Self { roll: 0.0, pitch: 0.0, yaw: 0.0 };

    /// Create from angles in radians.
    pub fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Create from angles in degrees (`radians = degrees * PI / 180`).
    pub fn from_degrees(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self {
            roll: roll.to_radians(),
            pitch: pitch.to_radians(),
            yaw: yaw.to_radians(),
        }
    }
}

/// Intrinsic XYZ rotation: about X by roll, then about the new Y by
/// pitch, then about the new Z by yaw.
///
/// Stored as a unit quaternion. Rotation composition is always
/// well-defined for real angles, so no operation here can fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    quat: Quat,
}

impl Rotation {
    /// No rotation.
    pub const IDENTITY: Self = Self { quat: Quat::IDENTITY };

    /// Build the intrinsic XYZ rotation from Euler angles.
    pub fn from_euler(angles: EulerAngles) -> Self {
        // Applied to a vector this is Rx * (Ry * (Rz * v)), the
        // intrinsic X-then-Y-then-Z sequence.
        let quat = Quat::from_rotation_x(angles.roll)
            * Quat::from_rotation_y(angles.pitch)
            * Quat::from_rotation_z(angles.yaw);
        Self { quat }
    }

    /// Rotate a vector.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        self.quat * v
    }

    /// The rotated canonical axes: images of (1,0,0), (0,1,0), (0,0,1),
    /// i.e. the columns of the rotation matrix.
    pub fn canonical_axes(&self) -> [Vec3; 3] {
        [self.apply(Vec3::X), self.apply(Vec3::Y), self.apply(Vec3::Z)]
    }

    /// The underlying unit quaternion.
    pub fn quat(&self) -> Quat {
        self.quat
    }
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
