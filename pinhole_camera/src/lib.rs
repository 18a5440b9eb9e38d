/*!
# Pinhole Camera

Geometric core for pinhole-style camera ray generation.

This crate models a virtual camera for a renderer or simulation: given a
position, an orientation and a field of view, it computes the rectangular
view plane (canvas) at a chosen distance and maps discrete pixel indices to
world-space rays. Scene intersection, shading and image I/O are external
collaborators consuming the rays produced here.

## Architecture

- **Camera**: the pinhole camera, built from a `CameraDesc`
- **Basis**: orthonormal frame derived from the orientation
- **Canvas**: view-plane rectangle derived per distance
- **Ray**: per-pixel origin and direction, parallel or perspective
- **Rotation / EulerAngles**: intrinsic XYZ rotation math

## Example

```
use pinhole_camera::pinhole::{Camera, CameraDesc};

let mut camera = Camera::new(CameraDesc::default())?;
camera.canvas_size(1.0);
let ray = camera.pixel_ray(0, 0)?;
assert!(ray.direction.is_normalized());
# Ok::<(), pinhole_camera::pinhole::Error>(())
```
*/

// Internal modules
mod error;
pub mod log;
pub mod rotation;
pub mod camera;

// Main pinhole namespace module
pub mod pinhole {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera types
    pub use crate::camera::{Basis, Camera, CameraDesc, Canvas, Ray, RayModel};

    // Logging sub-module (types and logger control, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger, log, log_detailed};
        // Note: camera_* macros are exported at the crate root only
    }

    // Rotation math sub-module
    pub mod math {
        pub use crate::rotation::{EulerAngles, Rotation};
    }
}

// Re-export math library at crate root
pub use glam;
