use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ParameterError;
use crate::geometry::PrimitiveKind;

/// Snapshot of everything the generator reads.
///
/// The panel keeps the live copy and hands a snapshot to each generation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationParameters {
    pub primitive_kind: PrimitiveKind,
    pub count: u32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub position_step: f32,
    pub rotation_range_x: f32,
    pub rotation_range_y: f32,
    pub rotation_range_z: f32,
    /// Upper bound of the per-instance factor draw. Zero pins the factor to 1.
    pub random_intensity: f32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            primitive_kind: PrimitiveKind::Box,
            count: 5,
            scale_min: 0.25,
            scale_max: 1.0,
            position_step: 1.0,
            rotation_range_x: TAU,
            rotation_range_y: TAU,
            rotation_range_z: TAU,
            random_intensity: 1.0,
        }
    }
}

impl GenerationParameters {
    pub fn rotation_range(&self) -> Vec3 {
        Vec3::new(
            self.rotation_range_x,
            self.rotation_range_y,
            self.rotation_range_z,
        )
    }

    pub fn set_rotation_range(&mut self, range: Vec3) {
        self.rotation_range_x = range.x;
        self.rotation_range_y = range.y;
        self.rotation_range_z = range.z;
    }

    /// Reject snapshots that would produce an empty or NaN-laden cloud.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.count == 0 {
            return Err(ParameterError::ZeroCount);
        }
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { field });
            }
        }
        Ok(())
    }

    /// Copy with `count >= 1` and intensity in `[0, 1]`.
    ///
    /// Non-finite values pass through untouched so `validate` still sees them.
    pub fn clamped(&self) -> Self {
        let mut out = self.clone();
        out.count = out.count.max(1);
        if out.random_intensity.is_finite() {
            out.random_intensity = out.random_intensity.clamp(0.0, 1.0);
        }
        out
    }

    /// Set a single numeric field by its panel name.
    pub fn apply(&mut self, field: &str, value: f64) -> Result<(), ParameterError> {
        let v = value as f32;
        match field {
            "count" => {
                if !value.is_finite() {
                    return Err(ParameterError::NonFinite { field: "count" });
                }
                self.count = value.round().max(0.0) as u32;
            }
            "primitiveKind" => {
                self.primitive_kind = PrimitiveKind::from_index(value.max(0.0) as u32)
            }
            "scaleMin" => self.scale_min = v,
            "scaleMax" => self.scale_max = v,
            "positionStep" => self.position_step = v,
            "rotationRangeX" => self.rotation_range_x = v,
            "rotationRangeY" => self.rotation_range_y = v,
            "rotationRangeZ" => self.rotation_range_z = v,
            "randomIntensity" => self.random_intensity = v,
            other => return Err(ParameterError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Read a single numeric field by its panel name.
    pub fn get(&self, field: &str) -> Option<f64> {
        if field == "count" {
            return Some(self.count as f64);
        }
        self.numeric_fields()
            .into_iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value as f64)
    }

    pub fn from_json(json: &str) -> Result<Self, ParameterError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ParameterError> {
        Ok(serde_json::to_string(self)?)
    }

    fn numeric_fields(&self) -> [(&'static str, f32); 7] {
        [
            ("scaleMin", self.scale_min),
            ("scaleMax", self.scale_max),
            ("positionStep", self.position_step),
            ("rotationRangeX", self.rotation_range_x),
            ("rotationRangeY", self.rotation_range_y),
            ("rotationRangeZ", self.rotation_range_z),
            ("randomIntensity", self.random_intensity),
        ]
    }
}
