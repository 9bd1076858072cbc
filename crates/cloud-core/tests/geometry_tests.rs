use cloud_core::geometry::{Geometry, Vertex};
use cloud_core::PrimitiveKind;
use glam::Vec3;

fn assert_outward_winding(geometry: &Geometry, name: &str) {
    for (i, [a, b, c]) in geometry.triangles().enumerate() {
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(
            normal.dot(centroid) > 0.0,
            "{} triangle {} winds inward",
            name,
            i
        );
    }
}

#[test]
fn test_vertex_layout_is_24_bytes() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
}

#[test]
fn test_box_geometry() {
    let g = Geometry::build(PrimitiveKind::Box);
    assert_eq!(g.kind, PrimitiveKind::Box);
    assert_eq!(g.vertices.len(), 24);
    assert_eq!(g.indices.len(), 36);
    assert_eq!(g.triangle_count(), 12);
    for v in &g.vertices {
        let p = Vec3::from(v.position);
        assert!((p.abs() - Vec3::splat(0.5)).length() < 1e-6, "corner {:?} off the unit cube", p);
        let n = Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-6);
    }
    assert_outward_winding(&g, "box");
}

#[test]
fn test_icosahedron_geometry() {
    let g = Geometry::build(PrimitiveKind::Icosahedron);
    assert_eq!(g.vertices.len(), 12);
    assert_eq!(g.indices.len(), 60);
    for v in &g.vertices {
        let p = Vec3::from(v.position);
        assert!((p.length() - 1.0).abs() < 1e-5, "vertex {:?} not on unit sphere", p);
        assert_eq!(v.position, v.normal);
    }
    assert!(g.indices.iter().all(|&i| (i as usize) < g.vertices.len()));
    assert_outward_winding(&g, "icosahedron");
}

#[test]
fn test_icosahedron_edges_equal_length() {
    let g = Geometry::build(PrimitiveKind::Icosahedron);
    let mut lengths = Vec::new();
    for [a, b, c] in g.triangles() {
        lengths.push((b - a).length());
        lengths.push((c - b).length());
        lengths.push((a - c).length());
    }
    let first = lengths[0];
    assert!(lengths.iter().all(|l| (l - first).abs() < 1e-4));
}
