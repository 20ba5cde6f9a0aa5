// Engine-agnostic scene records. The wgpu adapter turns `DrawItem`s into
// instance data; nothing here touches the GPU.

use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_uniform_scale(mut self, s: f32) -> Self {
        self.scale = Vec3::splat(s);
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.translation)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Sphere,
    Torus,
    Quad,
    Cuboid,
}

/// How the fragment shader masks the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WireMode {
    #[default]
    Solid,
    /// Latitude/longitude grid lines, for wireframe spheres.
    Grid,
    /// Only the border of each face, for wireframe boxes.
    Edges,
}

impl WireMode {
    pub fn shader_code(self) -> f32 {
        match self {
            WireMode::Solid => 0.0,
            WireMode::Grid => 1.0,
            WireMode::Edges => 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub wire: WireMode,
    pub textured: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            opacity: 1.0,
            emissive: [0.0, 0.0, 0.0],
            emissive_intensity: 1.0,
            wire: WireMode::Solid,
            textured: false,
        }
    }
}

impl Material {
    pub fn glowing(color: u32, emissive: u32) -> Self {
        Self {
            color: hex_rgb(color),
            emissive: hex_rgb(emissive),
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_emissive_intensity(mut self, intensity: f32) -> Self {
        self.emissive_intensity = intensity;
        self
    }

    pub fn with_wire(mut self, wire: WireMode) -> Self {
        self.wire = wire;
        self
    }

    pub fn with_texture(mut self) -> Self {
        self.textured = true;
        self
    }

    /// Drawn in the alpha-blended pass without depth writes.
    #[inline]
    pub fn is_blended(&self) -> bool {
        self.opacity < 1.0 || self.wire != WireMode::Solid
    }
}

/// `0xRRGGBB` to linear-ish 0..1 floats.
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Partial update applied to an animated node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeUpdate {
    pub transform: Option<Transform>,
    pub opacity: Option<f32>,
    pub emissive_intensity: Option<f32>,
}

impl NodeUpdate {
    pub fn transform(t: Transform) -> Self {
        Self {
            transform: Some(t),
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_emissive_intensity(mut self, intensity: f32) -> Self {
        self.emissive_intensity = Some(intensity);
        self
    }
}

/// Capability handed to animators in place of raw engine handles.
pub trait ApplyTransform {
    fn apply(&mut self, update: &NodeUpdate);
}

/// A placed mesh with its material; the default animated node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneNode {
    pub mesh: MeshKind,
    pub transform: Transform,
    pub material: Material,
}

impl SceneNode {
    pub fn new(mesh: MeshKind, transform: Transform, material: Material) -> Self {
        Self {
            mesh,
            transform,
            material,
        }
    }

    pub fn draw_item(&self, parent: Mat4) -> DrawItem {
        DrawItem {
            mesh: self.mesh,
            model: parent * self.transform.matrix(),
            material: self.material,
        }
    }
}

impl ApplyTransform for SceneNode {
    fn apply(&mut self, update: &NodeUpdate) {
        if let Some(t) = update.transform {
            self.transform = t;
        }
        if let Some(o) = update.opacity {
            self.material.opacity = o;
        }
        if let Some(i) = update.emissive_intensity {
            self.material.emissive_intensity = i;
        }
    }
}

/// One mesh instance ready for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshKind,
    pub model: Mat4,
    pub material: Material,
}
