//! Shared primitive geometry for cloud instances.
//!
//! Each primitive is an indexed triangle list with counter-clockwise outward
//! winding. A `GeometrySet` builds both shapes once; generation hands out
//! reference-counted handles so every instance in a cloud points at the same
//! buffers.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Shape used for every instance of a cloud.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveKind {
    #[default]
    Box,
    Icosahedron,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 2] = [PrimitiveKind::Box, PrimitiveKind::Icosahedron];

    pub fn index(self) -> u32 {
        match self {
            PrimitiveKind::Box => 0,
            PrimitiveKind::Icosahedron => 1,
        }
    }

    /// Unknown indices fall back to `Box`.
    pub fn from_index(index: u32) -> Self {
        match index {
            1 => PrimitiveKind::Icosahedron,
            _ => PrimitiveKind::Box,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PrimitiveKind::Box => "box",
            PrimitiveKind::Icosahedron => "icosahedron",
        }
    }
}

/// Interleaved vertex: 24 bytes, position then normal.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Debug, PartialEq)]
pub struct Geometry {
    pub kind: PrimitiveKind,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    pub fn build(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Box => box_geometry(),
            PrimitiveKind::Icosahedron => icosahedron_geometry(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as vertex positions.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                Vec3::from(self.vertices[tri[0] as usize].position),
                Vec3::from(self.vertices[tri[1] as usize].position),
                Vec3::from(self.vertices[tri[2] as usize].position),
            ]
        })
    }
}

/// Both primitive geometries, built once and shared across generations.
pub struct GeometrySet {
    box_geometry: Arc<Geometry>,
    icosahedron: Arc<Geometry>,
}

impl GeometrySet {
    pub fn new() -> Self {
        Self {
            box_geometry: Arc::new(Geometry::build(PrimitiveKind::Box)),
            icosahedron: Arc::new(Geometry::build(PrimitiveKind::Icosahedron)),
        }
    }

    pub fn get(&self, kind: PrimitiveKind) -> Arc<Geometry> {
        match kind {
            PrimitiveKind::Box => Arc::clone(&self.box_geometry),
            PrimitiveKind::Icosahedron => Arc::clone(&self.icosahedron),
        }
    }
}

impl Default for GeometrySet {
    fn default() -> Self {
        Self::new()
    }
}

// ---------- Box ----------

/// Unit cube centred on the origin, four vertices per face for flat normals.
fn box_geometry() -> Geometry {
    // (normal, u, v) with u x v == normal so (-,-) (+,-) (+,+) (-,+) winds CCW.
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let corners = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, u, v) in faces {
        let base = vertices.len() as u32;
        for (a, b) in corners {
            let p = normal * 0.5 + u * a + v * b;
            vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Geometry {
        kind: PrimitiveKind::Box,
        vertices,
        indices,
    }
}

// ---------- Icosahedron ----------

/// Radius-1 icosahedron, no subdivision. Vertices lie on the unit sphere so
/// the normal equals the position.
fn icosahedron_geometry() -> Geometry {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    let indices = vec![
        0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, //
        1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7, 1, 8, //
        3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, //
        4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9, 8, 1,
    ];

    let vertices = raw
        .iter()
        .map(|p| {
            let n = p.normalize();
            Vertex {
                position: n.to_array(),
                normal: n.to_array(),
            }
        })
        .collect();

    Geometry {
        kind: PrimitiveKind::Icosahedron,
        vertices,
        indices,
    }
}
