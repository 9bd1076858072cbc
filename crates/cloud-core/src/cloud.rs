use std::sync::Arc;

use glam::{Mat4, Vec3};

use crate::geometry::{Geometry, PrimitiveKind};
use crate::instance::InstanceTransform;
use crate::math::LAYOUT_AXIS;

pub const CLOUD_NAME: &str = "Cloud";

/// One generation's worth of instances plus the group offset that centres
/// them. Whoever holds it owns it; dropping it is the only disposal.
#[derive(Debug)]
pub struct CloudCollection {
    instances: Vec<InstanceTransform>,
    geometry: Arc<Geometry>,
    group_offset: Vec3,
}

impl CloudCollection {
    pub(crate) fn new(instances: Vec<InstanceTransform>, geometry: Arc<Geometry>) -> Self {
        let group_offset = LAYOUT_AXIS * (-(instances.len() as f32) / 2.0);
        Self {
            instances,
            geometry,
            group_offset,
        }
    }

    pub fn name(&self) -> &'static str {
        CLOUD_NAME
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[InstanceTransform] {
        &self.instances
    }

    /// Geometry shared by every instance in this cloud.
    pub fn geometry(&self) -> &Arc<Geometry> {
        &self.geometry
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.geometry.kind
    }

    /// `-count / 2` along the layout axis, applied once to the whole group.
    pub fn group_offset(&self) -> Vec3 {
        self.group_offset
    }

    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.group_offset)
    }

    /// Instance matrices with the group offset folded in.
    pub fn world_matrices(&self) -> Vec<Mat4> {
        let group = self.group_matrix();
        self.instances
            .iter()
            .map(|inst| group * inst.local_matrix())
            .collect()
    }
}
