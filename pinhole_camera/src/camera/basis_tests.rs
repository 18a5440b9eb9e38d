use glam::Vec3;
use crate::rotation::EulerAngles;
use super::*;

const EPS: f32 = 1e-5;

fn assert_vec3_near(actual: Vec3, expected: Vec3, context: &str) {
    assert!(
        (actual - expected).length() < EPS,
        "{}: expected {:?}, got {:?}",
        context,
        expected,
        actual
    );
}

// ============================================================================
// Canonical frame
// ============================================================================

#[test]
fn test_identity_is_canonical_frame() {
    assert_eq!(Basis::IDENTITY.right, Vec3::X);
    assert_eq!(Basis::IDENTITY.up, Vec3::Y);
    assert_eq!(Basis::IDENTITY.forward, Vec3::Z);
}

#[test]
fn test_zero_rotation_gives_canonical_frame() {
    let basis = Basis::from_euler(EulerAngles::ZERO);
    assert_vec3_near(basis.right, Vec3::X, "right");
    assert_vec3_near(basis.up, Vec3::Y, "up");
    assert_vec3_near(basis.forward, Vec3::Z, "forward");
}

// ============================================================================
// Derived frames
// ============================================================================

#[test]
fn test_roll_90_frame() {
    let basis = Basis::from_euler(EulerAngles::from_degrees(90.0, 0.0, 0.0));
    assert_vec3_near(basis.right, Vec3::X, "right fixed under roll");
    assert_vec3_near(basis.up, Vec3::Z, "up tilts to z");
    assert_vec3_near(basis.forward, Vec3::new(0.0, -1.0, 0.0), "forward tilts to -y");
}

#[test]
fn test_yaw_90_frame() {
    let basis = Basis::from_euler(EulerAngles::from_degrees(0.0, 0.0, 90.0));
    assert_vec3_near(basis.right, Vec3::Y, "right turns to y");
    assert_vec3_near(basis.up, Vec3::new(-1.0, 0.0, 0.0), "up turns to -x");
    assert_vec3_near(basis.forward, Vec3::Z, "forward fixed under yaw");
}

#[test]
fn test_orthonormal_for_varied_orientations() {
    let samples = [
        EulerAngles::new(0.0, 0.0, 0.0),
        EulerAngles::new(0.3, -1.2, 2.5),
        EulerAngles::new(-0.7, 0.9, -3.1),
        EulerAngles::from_degrees(90.0, 45.0, 30.0),
        EulerAngles::from_degrees(400.0, -720.0, 13.0),
    ];

    for angles in samples {
        let basis = Basis::from_euler(angles);
        assert!(
            basis.is_orthonormal(EPS),
            "basis for {:?} must be orthonormal",
            angles
        );
        // Rotated frames keep right-handedness
        assert_vec3_near(basis.right.cross(basis.up), basis.forward, "handedness");
    }
}

// ============================================================================
// is_orthonormal
// ============================================================================

#[test]
fn test_is_orthonormal_rejects_scaled_axis() {
    let basis = Basis {
        right: Vec3::new(2.0, 0.0, 0.0),
        up: Vec3::Y,
        forward: Vec3::Z,
    };
    assert!(!basis.is_orthonormal(EPS));
}

#[test]
fn test_is_orthonormal_rejects_skewed_axes() {
    let basis = Basis {
        right: Vec3::new(1.0, 0.0, 0.0),
        up: Vec3::new(0.7071, 0.7071, 0.0),
        forward: Vec3::Z,
    };
    assert!(!basis.is_orthonormal(EPS));
}

#[test]
fn test_is_orthonormal_tolerance() {
    let basis = Basis {
        right: Vec3::new(1.001, 0.0, 0.0),
        up: Vec3::Y,
        forward: Vec3::Z,
    };
    assert!(!basis.is_orthonormal(1e-4));
    assert!(basis.is_orthonormal(1e-2));
}

// ============================================================================
// Value semantics
// ============================================================================

#[test]
fn test_basis_copy_and_eq() {
    let basis1 = Basis::from_euler(EulerAngles::from_degrees(10.0, 20.0, 30.0));
    let basis2 = basis1; // Copy, not move
    assert_eq!(basis1, basis2);
}
