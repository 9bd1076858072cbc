use glam::{Quat, Vec3};
use rand::Rng;

/// Layout axis the cloud is strung along.
pub const LAYOUT_AXIS: Vec3 = Vec3::X;

/// Rotation from Euler angles applied in XYZ order (`Rx * Ry * Rz`).
pub fn euler_xyz(angles: Vec3) -> Quat {
    Quat::from_rotation_x(angles.x)
        * Quat::from_rotation_y(angles.y)
        * Quat::from_rotation_z(angles.z)
}

/// Per-instance factor: a uniform draw in `[0, intensity)`, or exactly 1 when
/// intensity is zero.
pub fn draw_factor<R: Rng + ?Sized>(rng: &mut R, intensity: f32) -> f32 {
    if intensity == 0.0 {
        1.0
    } else {
        rng.gen::<f32>() * intensity
    }
}
