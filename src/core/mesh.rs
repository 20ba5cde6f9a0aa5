// Procedural unit meshes shared by both scenes. Sizes are applied through
// node scale, so every mesh here is built around the origin at unit size.

use super::scene::MeshKind;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

// Tube radius relative to the ring radius (0.02 / 1.6).
pub const TORUS_TUBE_RATIO: f32 = 0.0125;

pub fn mesh_for(kind: MeshKind) -> MeshData {
    match kind {
        MeshKind::Sphere => uv_sphere(32, 24),
        MeshKind::Torus => torus(TORUS_TUBE_RATIO, 128, 12),
        MeshKind::Quad => quad(),
        MeshKind::Cuboid => cuboid(),
    }
}

/// Unit-radius sphere; `u` wraps longitude, `v` runs pole to pole.
pub fn uv_sphere(segments: u32, rings: u32) -> MeshData {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    for r in 0..=rings {
        let v = r as f32 / rings as f32;
        let theta = v * PI;
        for s in 0..=segments {
            let u = s as f32 / segments as f32;
            let phi = u * TAU;
            let n = [
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            ];
            vertices.push(Vertex {
                position: n,
                normal: n,
                uv: [u, v],
            });
        }
    }
    let stride = segments + 1;
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
    for r in 0..rings {
        for s in 0..segments {
            let a = r * stride + s;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }
    MeshData { vertices, indices }
}

/// Torus in the XY plane with unit ring radius.
pub fn torus(tube: f32, tubular_segments: u32, radial_segments: u32) -> MeshData {
    let tubular = tubular_segments.max(3);
    let radial = radial_segments.max(3);
    let mut vertices = Vec::with_capacity(((tubular + 1) * (radial + 1)) as usize);
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let center = [u.cos(), u.sin(), 0.0];
            let position = [
                (1.0 + tube * v.cos()) * u.cos(),
                (1.0 + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            ];
            let normal = normalize([
                position[0] - center[0],
                position[1] - center[1],
                position[2] - center[2],
            ]);
            vertices.push(Vertex {
                position,
                normal,
                uv: [i as f32 / tubular as f32, j as f32 / radial as f32],
            });
        }
    }
    let stride = tubular + 1;
    let mut indices = Vec::with_capacity((tubular * radial * 6) as usize);
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    MeshData { vertices, indices }
}

/// Unit square facing +Z.
pub fn quad() -> MeshData {
    let n = [0.0, 0.0, 1.0];
    let vertices = vec![
        Vertex { position: [-0.5, -0.5, 0.0], normal: n, uv: [0.0, 1.0] },
        Vertex { position: [0.5, -0.5, 0.0], normal: n, uv: [1.0, 1.0] },
        Vertex { position: [0.5, 0.5, 0.0], normal: n, uv: [1.0, 0.0] },
        Vertex { position: [-0.5, 0.5, 0.0], normal: n, uv: [0.0, 0.0] },
    ];
    MeshData {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Unit cube with per-face normals and 0..1 uv on each face.
pub fn cuboid() -> MeshData {
    // (normal, u axis, v axis)
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in FACES {
        let base = vertices.len() as u32;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let position = [
                n[0] * 0.5 + u[0] * su + v[0] * sv,
                n[1] * 0.5 + u[1] * su + v[1] * sv,
                n[2] * 0.5 + u[2] * su + v[2] * sv,
            ];
            vertices.push(Vertex {
                position,
                normal: n,
                uv: [su + 0.5, 0.5 - sv],
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshData { vertices, indices }
}

#[inline]
fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len <= f32::EPSILON {
        return [0.0, 0.0, 1.0];
    }
    [v[0] / len, v[1] / len, v[2] / len]
}
