/// Canvas — the view plane derived for one camera configuration.
///
/// Product of `Camera::canvas_size`: the rectangle at a fixed distance
/// along the forward axis, with its corners, half extents and per-pixel
/// steps. Valid for exactly one (distance, orientation, intrinsics)
/// tuple; the camera discards it on any extrinsics change.

use glam::Vec3;
use super::basis::Basis;

/// Derived view-plane state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    image_center: Vec3,
    half_extent_x: Vec3,
    half_extent_y: Vec3,
    upper_left_corner: Vec3,
    lower_right_corner: Vec3,
    pixel_step_x: Vec3,
    pixel_step_y: Vec3,
    distance: f32,
}

impl Canvas {
    /// Compute the view plane at `distance` along `basis.forward`.
    ///
    /// Zero and negative distances are accepted: the plane degenerates
    /// to the camera center or sits behind it, both well defined.
    pub(crate) fn compute(
        center: Vec3,
        basis: &Basis,
        half_angle_x: f32,
        half_angle_y: f32,
        width: u32,
        height: u32,
        distance: f32,
    ) -> Self {
        let image_center = center + basis.forward * distance;
        let half_extent_x = half_angle_x.tan() * distance * basis.right;
        let half_extent_y = half_angle_y.tan() * distance * basis.up;
        let upper_left_corner = image_center - half_extent_x - half_extent_y;
        let lower_right_corner = image_center + half_extent_x + half_extent_y;
        let pixel_step_x = half_extent_x * 2.0 / width as f32;
        let pixel_step_y = half_extent_y * 2.0 / height as f32;

        Self {
            image_center,
            half_extent_x,
            half_extent_y,
            upper_left_corner,
            lower_right_corner,
            pixel_step_x,
            pixel_step_y,
            distance,
        }
    }

    // ===== GETTERS =====

    /// Point on the forward axis at the canvas distance.
    pub fn image_center(&self) -> Vec3 {
        self.image_center
    }

    /// Vector spanning half the canvas width, along the right axis.
    pub fn half_extent_x(&self) -> Vec3 {
        self.half_extent_x
    }

    /// Vector spanning half the canvas height, along the up axis.
    pub fn half_extent_y(&self) -> Vec3 {
        self.half_extent_y
    }

    /// Corner at minus both half extents from the image center.
    pub fn upper_left_corner(&self) -> Vec3 {
        self.upper_left_corner
    }

    /// Corner at plus both half extents from the image center.
    pub fn lower_right_corner(&self) -> Vec3 {
        self.lower_right_corner
    }

    /// World-space increment between horizontally adjacent pixels.
    pub fn pixel_step_x(&self) -> Vec3 {
        self.pixel_step_x
    }

    /// World-space increment between vertically adjacent pixels.
    pub fn pixel_step_y(&self) -> Vec3 {
        self.pixel_step_y
    }

    /// Distance from the camera center used for this canvas.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// World-space center of pixel `(x_index, y_index)`.
    ///
    /// Indices are not bounds-checked: values outside the resolution
    /// continue the affine grid beyond the corners, which is useful for
    /// super-sampling or margin queries.
    pub fn pixel_center(&self, x_index: i32, y_index: i32) -> Vec3 {
        self.upper_left_corner
            + self.pixel_step_x * (x_index as f32 + 0.5)
            + self.pixel_step_y * (y_index as f32 + 0.5)
    }
}

#[cfg(test)]
#[path = "canvas_tests.rs"]
mod tests;
