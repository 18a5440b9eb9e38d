use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};
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
// EulerAngles
// ============================================================================

#[test]
fn test_euler_angles_zero_const() {
    assert_eq!(EulerAngles::ZERO.roll, 0.0);
    assert_eq!(EulerAngles::ZERO.pitch, 0.0);
    assert_eq!(EulerAngles::ZERO.yaw, 0.0);
}

#[test]
fn test_euler_angles_new() {
    let angles = EulerAngles::new(0.1, 0.2, 0.3);
    assert_eq!(angles.roll, 0.1);
    assert_eq!(angles.pitch, 0.2);
    assert_eq!(angles.yaw, 0.3);
}

#[test]
fn test_euler_angles_from_degrees() {
    let angles = EulerAngles::from_degrees(180.0, 90.0, -90.0);
    assert!((angles.roll - PI).abs() < EPS);
    assert!((angles.pitch - FRAC_PI_2).abs() < EPS);
    assert!((angles.yaw + FRAC_PI_2).abs() < EPS);
}

#[test]
fn test_euler_angles_copy() {
    let angles1 = EulerAngles::new(0.5, 0.0, 0.0);
    let angles2 = angles1; // Copy, not move
    assert_eq!(angles1, angles2);
    assert_eq!(angles1.roll, 0.5);
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn test_identity_preserves_axes() {
    let axes = Rotation::IDENTITY.canonical_axes();
    assert_vec3_near(axes[0], Vec3::X, "identity x axis");
    assert_vec3_near(axes[1], Vec3::Y, "identity y axis");
    assert_vec3_near(axes[2], Vec3::Z, "identity z axis");
}

#[test]
fn test_zero_angles_match_identity() {
    let rotation = Rotation::from_euler(EulerAngles::ZERO);
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_vec3_near(rotation.apply(v), v, "zero rotation");
}

// ============================================================================
// Single-axis rotations
// ============================================================================

#[test]
fn test_roll_90_degrees() {
    let rotation = Rotation::from_euler(EulerAngles::from_degrees(90.0, 0.0, 0.0));
    let [x, y, z] = rotation.canonical_axes();
    assert_vec3_near(x, Vec3::X, "roll leaves x axis fixed");
    assert_vec3_near(y, Vec3::Z, "roll 90 sends y to z");
    assert_vec3_near(z, Vec3::new(0.0, -1.0, 0.0), "roll 90 sends z to -y");
}

#[test]
fn test_pitch_90_degrees() {
    let rotation = Rotation::from_euler(EulerAngles::from_degrees(0.0, 90.0, 0.0));
    let [x, y, z] = rotation.canonical_axes();
    assert_vec3_near(x, Vec3::new(0.0, 0.0, -1.0), "pitch 90 sends x to -z");
    assert_vec3_near(y, Vec3::Y, "pitch leaves y axis fixed");
    assert_vec3_near(z, Vec3::X, "pitch 90 sends z to x");
}

#[test]
fn test_yaw_90_degrees() {
    let rotation = Rotation::from_euler(EulerAngles::from_degrees(0.0, 0.0, 90.0));
    let [x, y, z] = rotation.canonical_axes();
    assert_vec3_near(x, Vec3::Y, "yaw 90 sends x to y");
    assert_vec3_near(y, Vec3::new(-1.0, 0.0, 0.0), "yaw 90 sends y to -x");
    assert_vec3_near(z, Vec3::Z, "yaw leaves z axis fixed");
}

#[test]
fn test_negative_roll_inverts_positive_roll() {
    let rotation = Rotation::from_euler(EulerAngles::from_degrees(-90.0, 0.0, 0.0));
    let [_, y, z] = rotation.canonical_axes();
    assert_vec3_near(y, Vec3::new(0.0, 0.0, -1.0), "roll -90 sends y to -z");
    assert_vec3_near(z, Vec3::Y, "roll -90 sends z to y");
}

#[test]
fn test_full_turn_is_identity() {
    let rotation = Rotation::from_euler(EulerAngles::from_degrees(360.0, 0.0, 0.0));
    let v = Vec3::new(0.0, 1.0, 2.0);
    assert_vec3_near(rotation.apply(v), v, "360 degree roll");
}

// ============================================================================
// Composition order
// ============================================================================

#[test]
fn test_intrinsic_composition_order() {
    // Roll 90 then pitch 90 about the *moved* Y axis sends the z axis to x.
    // The extrinsic (world-fixed) reading of the same angles would send it
    // to -y instead, so this pins the intrinsic convention.
    let rotation = Rotation::from_euler(EulerAngles::from_degrees(90.0, 90.0, 0.0));
    let [x, y, z] = rotation.canonical_axes();
    assert_vec3_near(x, Vec3::Y, "roll+pitch x axis");
    assert_vec3_near(y, Vec3::Z, "roll+pitch y axis");
    assert_vec3_near(z, Vec3::X, "roll+pitch z axis");
}

#[test]
fn test_three_axis_composition() {
    // Roll 90, pitch 90, yaw 90: the final yaw spins about the moved Z
    // axis, which after the first two steps points along world x.
    let rotation = Rotation::from_euler(EulerAngles::from_degrees(90.0, 90.0, 90.0));
    let [x, y, z] = rotation.canonical_axes();
    assert_vec3_near(z, Vec3::X, "yaw about own z leaves it fixed");
    assert_vec3_near(x, Vec3::Z, "roll+pitch+yaw x axis");
    assert_vec3_near(y, Vec3::new(0.0, -1.0, 0.0), "roll+pitch+yaw y axis");
}

// ============================================================================
// Rotation invariants
// ============================================================================

#[test]
fn test_rotation_preserves_length() {
    let rotation = Rotation::from_euler(EulerAngles::new(0.3, -1.2, 2.5));
    let v = Vec3::new(3.0, -4.0, 12.0);
    assert!(
        (rotation.apply(v).length() - v.length()).abs() < EPS,
        "rotation must preserve vector length"
    );
}

#[test]
fn test_axes_stay_orthonormal() {
    let rotation = Rotation::from_euler(EulerAngles::new(0.7, 1.9, -0.4));
    let [x, y, z] = rotation.canonical_axes();

    assert!((x.length() - 1.0).abs() < EPS, "x axis must be unit length");
    assert!((y.length() - 1.0).abs() < EPS, "y axis must be unit length");
    assert!((z.length() - 1.0).abs() < EPS, "z axis must be unit length");

    assert!(x.dot(y).abs() < EPS, "x and y must be orthogonal");
    assert!(y.dot(z).abs() < EPS, "y and z must be orthogonal");
    assert!(z.dot(x).abs() < EPS, "z and x must be orthogonal");
}

#[test]
fn test_canonical_axes_match_apply() {
    let rotation = Rotation::from_euler(EulerAngles::new(1.1, 0.2, -2.0));
    let axes = rotation.canonical_axes();
    assert_vec3_near(axes[0], rotation.apply(Vec3::X), "x axis");
    assert_vec3_near(axes[1], rotation.apply(Vec3::Y), "y axis");
    assert_vec3_near(axes[2], rotation.apply(Vec3::Z), "z axis");
}

#[test]
fn test_quat_is_unit() {
    let rotation = Rotation::from_euler(EulerAngles::new(0.9, -0.8, 0.7));
    assert!((rotation.quat().length() - 1.0).abs() < EPS);
}
