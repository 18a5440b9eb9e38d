/// Camera — pinhole camera for per-pixel ray generation.
///
/// Holds extrinsic parameters (center, orientation) and intrinsic
/// parameters (half-angles of view, resolution), derives an orthonormal
/// basis from the orientation, computes a view-plane rectangle at a
/// given distance, and maps pixel indices to rays.
///
/// The library does NOT store or manage cameras. They are plain values
/// owned and driven by the caller.

use glam::Vec3;
use crate::error::{Error, Result};
use crate::rotation::EulerAngles;
use super::basis::Basis;
use super::canvas::Canvas;
use super::ray::{Ray, RayModel};

/// Descriptor for creating a camera
///
/// All angles are in degrees at this boundary; they are converted to
/// radians internally.
#[derive(Debug, Clone)]
pub struct CameraDesc {
    /// World-space position of the optical center
    pub center: Vec3,

    /// Rotation about the X axis, degrees
    pub roll: f32,

    /// Rotation about the Y axis, degrees
    pub pitch: f32,

    /// Rotation about the Z axis, degrees
    pub yaw: f32,

    /// Horizontal pixel count (must be non-zero)
    pub width: u32,

    /// Vertical pixel count (must be non-zero)
    pub height: u32,

    /// Horizontal half field of view, degrees
    pub half_angle_x: f32,

    /// Vertical half field of view, degrees
    pub half_angle_y: f32,

    /// How per-pixel ray directions are generated
    pub ray_model: RayModel,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            width: 600,
            height: 800,
            half_angle_x: 45.0,
            half_angle_y: 45.0,
            ray_model: RayModel::Parallel,
        }
    }
}

/// Pinhole camera looking along +Z in its local frame.
///
/// Construction derives the orientation basis immediately; the canvas
/// is populated by [`canvas_size`](Self::canvas_size) and consumed by
/// [`pixel_ray`](Self::pixel_ray). Between those two calls the camera
/// is read-only, so shared references may be handed to worker threads
/// for parallel ray generation.
#[derive(Debug, Clone)]
pub struct Camera {
    center: Vec3,
    orientation: EulerAngles,
    basis: Basis,
    half_angle_x: f32,
    half_angle_y: f32,
    width: u32,
    height: u32,
    ray_model: RayModel,
    canvas: Option<Canvas>,
}

impl Camera {
    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InvalidResolution { width, height } => {
                crate::camera_error!(
                    "pinhole::Camera",
                    "Construction rejected: resolution {}x{}",
                    width,
                    height
                );
            }
            Error::UninitializedCanvas => {
                crate::camera_error!(
                    "pinhole::Camera",
                    "Pixel ray requested before canvas_size()"
                );
            }
        }
        error
    }

    /// Create a new camera from a descriptor.
    ///
    /// The orientation basis is derived immediately. The canvas is not:
    /// call [`canvas_size`](Self::canvas_size) before requesting rays.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResolution` if `width` or `height` is zero.
    pub fn new(desc: CameraDesc) -> Result<Self> {
        if desc.width == 0 || desc.height == 0 {
            return Err(Self::log_and_return_error(Error::InvalidResolution {
                width: desc.width,
                height: desc.height,
            }));
        }

        let orientation = EulerAngles::from_degrees(desc.roll, desc.pitch, desc.yaw);
        let camera = Self {
            center: desc.center,
            orientation,
            basis: Basis::from_euler(orientation),
            half_angle_x: desc.half_angle_x.to_radians(),
            half_angle_y: desc.half_angle_y.to_radians(),
            width: desc.width,
            height: desc.height,
            ray_model: desc.ray_model,
            canvas: None,
        };

        crate::camera_debug!(
            "pinhole::Camera",
            "Camera created: {}x{} px at {:?}, ray model {:?}",
            camera.width,
            camera.height,
            camera.center,
            camera.ray_model
        );

        Ok(camera)
    }

    // ===== GETTERS =====

    /// World-space position of the optical center.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Orientation angles, radians.
    pub fn orientation(&self) -> EulerAngles {
        self.orientation
    }

    /// The derived orthonormal frame, always consistent with the
    /// current orientation.
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Horizontal pixel count.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Vertical pixel count.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Horizontal half field of view, radians.
    pub fn half_angle_x(&self) -> f32 {
        self.half_angle_x
    }

    /// Vertical half field of view, radians.
    pub fn half_angle_y(&self) -> f32 {
        self.half_angle_y
    }

    /// How per-pixel ray directions are generated.
    pub fn ray_model(&self) -> RayModel {
        self.ray_model
    }

    /// The derived canvas, if `canvas_size` has been called since the
    /// last extrinsics change.
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    // ===== SETTERS — extrinsics changes invalidate the canvas =====

    /// Move the optical center. Invalidates the canvas.
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
        self.canvas = None;
    }

    /// Re-orient the camera. Re-derives the basis and invalidates the
    /// canvas.
    pub fn set_orientation(&mut self, orientation: EulerAngles) {
        self.orientation = orientation;
        self.derive_orientation();
        self.canvas = None;
    }

    /// Switch between parallel and perspective ray directions. The
    /// canvas geometry does not depend on the model, so it stays valid.
    pub fn set_ray_model(&mut self, ray_model: RayModel) {
        self.ray_model = ray_model;
    }

    // ===== CANVAS & RAYS =====

    /// Recompute the orthonormal basis from the stored orientation.
    fn derive_orientation(&mut self) {
        self.basis = Basis::from_euler(self.orientation);
    }

    /// Compute the view plane at `distance` along the forward axis.
    ///
    /// Must be called before `pixel_ray`, and again after any center or
    /// orientation change. Idempotent for a fixed (distance,
    /// orientation, intrinsics) tuple. Zero and negative distances are
    /// accepted: the plane degenerates to the camera center or sits
    /// behind it, both mathematically well defined.
    pub fn canvas_size(&mut self, distance: f32) {
        // Always pair the canvas with a freshly derived basis
        self.derive_orientation();
        self.canvas = Some(Canvas::compute(
            self.center,
            &self.basis,
            self.half_angle_x,
            self.half_angle_y,
            self.width,
            self.height,
            distance,
        ));

        crate::camera_trace!(
            "pinhole::Camera",
            "Canvas computed at distance {}",
            distance
        );
    }

    /// The ray through pixel `(x_index, y_index)`.
    ///
    /// The origin sits at the pixel's center on the view plane. The
    /// direction depends on the ray model: the shared forward normal
    /// for `Parallel`, or the normalized vector from the optical center
    /// through the origin for `Perspective`. Indices are zero-based and
    /// not bounds-checked; out-of-range indices extrapolate beyond the
    /// nominal rectangle.
    ///
    /// # Errors
    ///
    /// Returns `UninitializedCanvas` if `canvas_size` has not been
    /// called since construction or the last extrinsics change.
    pub fn pixel_ray(&self, x_index: i32, y_index: i32) -> Result<Ray> {
        let canvas = self
            .canvas
            .as_ref()
            .ok_or_else(|| Self::log_and_return_error(Error::UninitializedCanvas))?;

        let origin = canvas.pixel_center(x_index, y_index);
        let direction = match self.ray_model {
            RayModel::Parallel => self.basis.forward,
            RayModel::Perspective => (origin - self.center).normalize(),
        };

        Ok(Ray::new(origin, direction))
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
