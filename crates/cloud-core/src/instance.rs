use glam::{Mat4, Vec3};

use crate::config::GenerationParameters;
use crate::math::{euler_xyz, LAYOUT_AXIS};

/// Transform of one generated primitive, relative to its cloud group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceTransform {
    pub index: u32,
    /// Multiplier shared by rotation and scale for this instance.
    pub factor: f32,
    /// Distance along `LAYOUT_AXIS` before group centring.
    pub position_offset: f32,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

impl InstanceTransform {
    /// Derive the transform for `index` from an already drawn factor.
    ///
    /// Scale is `scale_min + factor * scale_max`: the upper bound is added
    /// directly, it is not a span.
    pub fn from_factor(index: u32, factor: f32, params: &GenerationParameters) -> Self {
        Self {
            index,
            factor,
            position_offset: index as f32 * params.position_step,
            rotation: params.rotation_range() * factor,
            scale: params.scale_min + factor * params.scale_max,
        }
    }

    pub fn translation(&self) -> Vec3 {
        LAYOUT_AXIS * self.position_offset
    }

    /// Local model matrix `T * R * S`.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            euler_xyz(self.rotation),
            self.translation(),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.factor.is_finite()
            && self.position_offset.is_finite()
            && self.rotation.is_finite()
            && self.scale.is_finite()
    }
}
