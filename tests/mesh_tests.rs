// Host-side tests for procedural meshes and scene records.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene {
    include!("../src/core/scene.rs");
}
mod mesh {
    include!("../src/core/mesh.rs");
}

use glam::{Mat4, Vec3};
use mesh::*;
use scene::*;

fn indices_in_range(m: &MeshData) -> bool {
    m.indices.iter().all(|&i| (i as usize) < m.vertices.len())
}

#[test]
fn sphere_vertices_lie_on_the_unit_sphere() {
    let m = uv_sphere(16, 8);
    assert_eq!(m.vertices.len(), 17 * 9);
    assert_eq!(m.triangle_count(), 16 * 8 * 2);
    assert!(indices_in_range(&m));
    for v in &m.vertices {
        let r = Vec3::from_array(v.position).length();
        assert!((r - 1.0).abs() < 1e-5);
        assert_eq!(v.position, v.normal);
    }
}

#[test]
fn torus_stays_near_its_ring() {
    let tube = 0.1;
    let m = torus(tube, 32, 8);
    assert!(indices_in_range(&m));
    assert_eq!(m.triangle_count(), 32 * 8 * 2);
    for v in &m.vertices {
        let p = Vec3::from_array(v.position);
        let ring = (p.x * p.x + p.y * p.y).sqrt();
        let d = ((ring - 1.0).powi(2) + p.z * p.z).sqrt();
        assert!((d - tube).abs() < 1e-4);
        assert!((Vec3::from_array(v.normal).length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn quad_and_cuboid_are_unit_sized() {
    let q = quad();
    assert_eq!(q.triangle_count(), 2);
    assert!(q.vertices.iter().all(|v| v.position[2] == 0.0));

    let c = cuboid();
    assert_eq!(c.vertices.len(), 24);
    assert_eq!(c.triangle_count(), 12);
    assert!(indices_in_range(&c));
    for v in &c.vertices {
        for k in 0..3 {
            assert!(v.position[k].abs() <= 0.5 + 1e-6);
        }
        assert!((0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn mesh_for_covers_every_kind() {
    for kind in [MeshKind::Sphere, MeshKind::Torus, MeshKind::Quad, MeshKind::Cuboid] {
        let m = mesh_for(kind);
        assert!(!m.indices.is_empty());
        assert_eq!(m.indices.len() % 3, 0);
        assert!(indices_in_range(&m));
    }
}

#[test]
fn transform_composes_scale_rotation_translation() {
    let t = Transform::at(Vec3::new(1.0, 2.0, 3.0))
        .with_rotation(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0))
        .with_uniform_scale(2.0);
    let p = t.matrix().transform_point3(Vec3::X);
    // +X scaled to 2 then turned a quarter about Y lands on -Z
    assert!((p - Vec3::new(1.0, 2.0, 1.0)).length() < 1e-5);
    assert_eq!(Transform::default(), Transform::IDENTITY);
    assert_eq!(Transform::IDENTITY.matrix(), Mat4::IDENTITY);
}

#[test]
fn material_blending_and_node_updates() {
    let solid = Material::glowing(0xFF8C00, 0xFF4500);
    assert!(!solid.is_blended());
    assert!(solid.with_opacity(0.7).is_blended());
    assert!(solid.with_wire(WireMode::Grid).is_blended());
    assert_eq!(hex_rgb(0xFF0000), [1.0, 0.0, 0.0]);
    assert_eq!(WireMode::Edges.shader_code(), 2.0);

    let mut node = SceneNode::new(MeshKind::Sphere, Transform::IDENTITY, solid);
    node.apply(&NodeUpdate::default().with_opacity(0.4));
    assert_eq!(node.material.opacity, 0.4);
    assert_eq!(node.transform, Transform::IDENTITY);

    let moved = Transform::at(Vec3::Y);
    node.apply(&NodeUpdate::transform(moved).with_emissive_intensity(0.9));
    assert_eq!(node.transform, moved);
    assert_eq!(node.material.emissive_intensity, 0.9);

    let item = node.draw_item(Mat4::from_translation(Vec3::X));
    assert!((item.model.w_axis.truncate() - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
}
