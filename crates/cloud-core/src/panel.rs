//! Parameter panel model.
//!
//! Describes one control per tunable field and keeps the live parameter copy.
//! Edits land in the live copy only; a commit (or the manual generate action)
//! snapshots it into the host.

use std::f32::consts::TAU;

use rand::Rng;
use serde::Serialize;

use crate::config::GenerationParameters;
use crate::error::ParameterError;
use crate::geometry::PrimitiveKind;
use crate::host::CloudHost;

/// Numeric range and step for one panel control.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ParameterControl {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParameterControl {
    const fn new(name: &'static str, min: f32, max: f32, step: f32) -> Self {
        Self {
            name,
            min,
            max,
            step,
        }
    }

    /// Snap to the step grid anchored at `min`, then clamp into range.
    pub fn constrain(&self, value: f64) -> f64 {
        let (min, max, step) = (self.min as f64, self.max as f64, self.step as f64);
        let snapped = if step > 0.0 {
            ((value - min) / step).round() * step + min
        } else {
            value
        };
        self.clamp(snapped)
    }

    /// Clamp into range without snapping.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min as f64, self.max as f64)
    }
}

pub static CONTROLS: [ParameterControl; 8] = [
    ParameterControl::new("count", 1.0, 20.0, 1.0),
    ParameterControl::new("scaleMin", 0.0, 3.0, 0.1),
    ParameterControl::new("scaleMax", 0.0, 3.0, 0.1),
    ParameterControl::new("positionStep", 0.0, 3.0, 0.1),
    ParameterControl::new("rotationRangeX", -TAU, TAU, 0.1),
    ParameterControl::new("rotationRangeY", -TAU, TAU, 0.1),
    ParameterControl::new("rotationRangeZ", -TAU, TAU, 0.1),
    ParameterControl::new("randomIntensity", 0.0, 1.0, 0.1),
];

pub fn control(name: &str) -> Option<&'static ParameterControl> {
    CONTROLS.iter().find(|c| c.name == name)
}

/// Copy of `params` with every field clamped to its control's range.
///
/// Whole snapshots are not snapped to the step grid, so off-grid values such
/// as the default `scaleMin` of 0.25 survive. Non-finite fields are left alone
/// so validation still reports them.
pub fn constrain_all(params: &GenerationParameters) -> Result<GenerationParameters, ParameterError> {
    let mut out = params.clone();
    for c in CONTROLS.iter() {
        match out.get(c.name) {
            Some(value) if value.is_finite() => out.apply(c.name, c.clamp(value))?,
            _ => {}
        }
    }
    Ok(out)
}

/// Everything a UI needs to lay out the panel.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelLayout {
    pub controls: &'static [ParameterControl],
    pub primitive_kinds: Vec<&'static str>,
}

pub fn panel_layout() -> PanelLayout {
    PanelLayout {
        controls: &CONTROLS,
        primitive_kinds: PrimitiveKind::ALL.iter().map(|k| k.label()).collect(),
    }
}

/// Live parameters bound to a cloud host.
pub struct ParameterPanel {
    params: GenerationParameters,
    host: CloudHost,
}

impl ParameterPanel {
    /// Build the panel and attach the initial cloud.
    pub fn new(params: GenerationParameters) -> Result<Self, ParameterError> {
        let mut panel = Self {
            params: constrain_all(&params)?,
            host: CloudHost::new(),
        };
        panel.generate_new_cloud()?;
        Ok(panel)
    }

    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    pub fn host(&self) -> &CloudHost {
        &self.host
    }

    /// Change a field without regenerating (an in-progress drag).
    ///
    /// Non-finite values are rejected and the live copy is left untouched.
    pub fn edit(&mut self, field: &str, value: f64) -> Result<(), ParameterError> {
        let ctrl = control(field);
        if !value.is_finite() {
            return Err(match ctrl {
                Some(c) => ParameterError::NonFinite { field: c.name },
                None if field == "primitiveKind" => ParameterError::NonFinite {
                    field: "primitiveKind",
                },
                None => ParameterError::UnknownField(field.to_string()),
            });
        }
        let value = match ctrl {
            Some(c) => c.constrain(value),
            None => value,
        };
        self.params.apply(field, value)
    }

    /// Finalise an edit and regenerate.
    pub fn commit(&mut self, field: &str, value: f64) -> Result<usize, ParameterError> {
        self.edit(field, value)?;
        self.generate_new_cloud()
    }

    /// Replace the whole live copy, constrained to the control ranges, then
    /// regenerate. A snapshot with non-finite fields leaves the live copy and
    /// the current cloud untouched.
    pub fn commit_all(&mut self, params: GenerationParameters) -> Result<usize, ParameterError> {
        let params = constrain_all(&params)?;
        params.validate()?;
        self.params = params;
        self.generate_new_cloud()
    }

    /// Manual generate action.
    pub fn generate_new_cloud(&mut self) -> Result<usize, ParameterError> {
        self.host.regenerate(&self.params)
    }

    pub fn generate_new_cloud_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<usize, ParameterError> {
        self.host.regenerate_with_rng(&self.params, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constrain_snaps_and_clamps() {
        let count = control("count").unwrap();
        assert_eq!(count.constrain(7.4), 7.0);
        assert_eq!(count.constrain(0.0), 1.0);
        assert_eq!(count.constrain(55.0), 20.0);

        let intensity = control("randomIntensity").unwrap();
        assert!((intensity.constrain(0.47) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_constrain_all_clamps_without_snapping() {
        let mut p = GenerationParameters::default();
        p.count = 500;
        p.scale_max = 90.0;
        let c = constrain_all(&p).unwrap();
        assert_eq!(c.count, 20);
        assert_eq!(c.scale_max, 3.0);
        assert_eq!(c.scale_min, 0.25);
        assert_eq!(c.rotation_range_x, TAU);
    }

    #[test]
    fn test_every_numeric_field_has_a_control() {
        let mut p = GenerationParameters::default();
        for c in CONTROLS.iter() {
            assert!(p.apply(c.name, c.min as f64).is_ok(), "{} not accepted", c.name);
        }
    }
}
