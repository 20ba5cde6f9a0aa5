// The dragon ball ornament: static layout, per-frame animation and the
// node model the renderer draws from.

use super::clock::FrameSignal;
use super::constants::*;
use super::scene::{
    ApplyTransform, DrawItem, Material, MeshKind, NodeUpdate, SceneNode, Transform, WireMode,
};
use super::scroll::ScrollProgress;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

pub const DRAGON_STAR_COUNT: usize = 7;
pub const ORB_COUNT: usize = 12;
pub const INNER_MOTE_COUNT: usize = 20;
pub const ENERGY_SPECK_COUNT: usize = 30;

// The seven-star constellation on the ball surface, top first.
pub const DRAGON_STAR_POSITIONS: [[f32; 3]; DRAGON_STAR_COUNT] = [
    [0.0, 0.6, 0.2],
    [0.4, 0.3, 0.1],
    [0.5, -0.2, 0.0],
    [0.2, -0.5, -0.1],
    [-0.2, -0.5, -0.1],
    [-0.5, -0.2, 0.0],
    [-0.4, 0.3, 0.1],
];

// (euler rotation, color, emissive, opacity) for each energy ring
const RINGS: [([f32; 3], u32, u32, f32); 4] = [
    ([FRAC_PI_2, 0.0, 0.0], 0xFFD700, 0xFF6B35, 0.4),
    ([0.0, 0.0, 0.0], 0xFFA500, 0xFF4500, 0.3),
    ([FRAC_PI_4, FRAC_PI_4, 0.0], 0xFF8C00, 0xFF0000, 0.2),
    ([-FRAC_PI_4, FRAC_PI_4, 0.0], 0xFF8C00, 0xFF0000, 0.2),
];
const RING_RADIUS: f32 = 1.6;

const SHELL_RADIUS: f32 = 1.8;
const CORE_RADIUS: f32 = 1.3;
const BODY_RADIUS: f32 = 1.2;
const STAR_SHELL_RADIUS: f32 = 1.25;
const DRAGON_STAR_RADIUS: f32 = 0.15;
const MOTE_RADIUS: f32 = 0.04;
const ORB_RADIUS: f32 = 0.08;
const SPECK_RADIUS: f32 = 0.03;

// ---------------- Pure animation curves ----------------

/// Whole-ornament transform imposed by the scroll position.
pub fn group_transform(progress: ScrollProgress) -> Transform {
    let turn = progress.turns();
    Transform::at(Vec3::new(0.0, turn.sin() * ORNAMENT_BOB_AMPLITUDE, 0.0))
        .with_rotation(Vec3::new(0.0, turn, 0.0))
}

#[inline]
pub fn core_scale(t: f32) -> f32 {
    1.0 + (t * CORE_PULSE.0).sin() * CORE_PULSE.1
}

/// Outer shell `(scale, opacity)`.
#[inline]
pub fn shell_pulse(t: f32) -> (f32, f32) {
    let s = (t * SHELL_PULSE.0).sin();
    (
        1.0 + s * SHELL_PULSE.1,
        SHELL_OPACITY_BASE + s * SHELL_OPACITY_SWING,
    )
}

/// Dragon star `(scale, emissive_intensity)` for star `index`.
#[inline]
pub fn star_pulse(t: f32, index: usize) -> (f32, f32) {
    let s = (t * STAR_PULSE_FREQ + index as f32).sin();
    (
        1.0 + s * STAR_SCALE_SWING,
        STAR_EMISSIVE_BASE + s * STAR_EMISSIVE_SWING,
    )
}

/// Orb displacement for one frame.
#[inline]
pub fn orb_drift(t: f32, index: usize) -> Vec3 {
    let i = index as f32;
    Vec3::new(
        (t * 2.0 + i).sin(),
        (t * 2.0 + i).cos(),
        (t * 1.5 + i).sin(),
    ) * ORB_JITTER_PER_FRAME
}

pub fn orb_base_position(index: usize) -> Vec3 {
    let a = index as f32 / ORB_COUNT as f32 * TAU;
    let lift = (a * 3.0).sin() * 0.5;
    Vec3::new(a.cos() * 2.2, a.sin() * 2.2 + lift, (a * 2.0).sin() * 0.8)
}

pub fn mote_position(index: usize) -> Vec3 {
    let a = index as f32 / INNER_MOTE_COUNT as f32 * TAU;
    let r = 0.9;
    Vec3::new(a.cos() * r, a.sin() * r * 0.8, (a * 2.0).sin() * 0.3)
}

pub fn speck_position(index: usize) -> Vec3 {
    let a = index as f32 / ENERGY_SPECK_COUNT as f32 * TAU;
    let r = 2.0;
    Vec3::new(a.cos() * r, (a * 3.0).sin() * r * 0.3, a.sin() * r * 0.5)
}

fn orb_material(index: usize) -> Material {
    let (color, emissive) = match index % 3 {
        0 => (0xFF6B35, 0xFF4500),
        1 => (0x1E90FF, 0x0000FF),
        _ => (0xFFD700, 0xFFA500),
    };
    Material::glowing(color, emissive).with_emissive_intensity(0.8)
}

fn star_transform(index: usize, scale: f32) -> Transform {
    Transform::at(Vec3::from_array(DRAGON_STAR_POSITIONS[index]))
        .with_uniform_scale(DRAGON_STAR_RADIUS * scale)
}

// ---------------- Capability surface ----------------

/// Animated parts of the ornament. A `None` slot is not attached yet and
/// is skipped for the frame.
pub trait OrnamentTargets {
    fn group(&mut self) -> Option<&mut dyn ApplyTransform>;
    fn core(&mut self) -> Option<&mut dyn ApplyTransform>;
    fn shell(&mut self) -> Option<&mut dyn ApplyTransform>;
    fn rings(&mut self) -> Option<&mut dyn ApplyTransform>;
    fn orb(&mut self, index: usize) -> Option<&mut dyn ApplyTransform>;
    fn star(&mut self, index: usize) -> Option<&mut dyn ApplyTransform>;
}

/// Frame-to-frame state of the ornament animation.
#[derive(Clone, Debug, Default)]
pub struct OrnamentAnimator {
    ring_rotation: Vec3,
    orb_offsets: [Vec3; ORB_COUNT],
}

impl OrnamentAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn ring_rotation(&self) -> Vec3 {
        self.ring_rotation
    }

    #[inline]
    pub fn orb_offset(&self, index: usize) -> Vec3 {
        self.orb_offsets.get(index).copied().unwrap_or(Vec3::ZERO)
    }

    pub fn update<T: OrnamentTargets + ?Sized>(&mut self, signal: &FrameSignal, targets: &mut T) {
        let t = signal.elapsed;
        let k = signal.frame_step();

        if let Some(group) = targets.group() {
            group.apply(&NodeUpdate::transform(group_transform(signal.progress)));
        }
        if let Some(core) = targets.core() {
            core.apply(&NodeUpdate::transform(
                Transform::IDENTITY.with_uniform_scale(core_scale(t)),
            ));
        }
        if let Some(shell) = targets.shell() {
            let (scale, opacity) = shell_pulse(t);
            shell.apply(
                &NodeUpdate::transform(
                    Transform::IDENTITY.with_uniform_scale(SHELL_RADIUS * scale),
                )
                .with_opacity(opacity),
            );
        }
        if let Some(rings) = targets.rings() {
            self.ring_rotation += Vec3::from_array(RING_SPIN_PER_FRAME) * k;
            rings.apply(&NodeUpdate::transform(
                Transform::IDENTITY.with_rotation(self.ring_rotation),
            ));
        }
        for i in 0..ORB_COUNT {
            if let Some(orb) = targets.orb(i) {
                self.orb_offsets[i] += orb_drift(t, i) * k;
                orb.apply(&NodeUpdate::transform(
                    Transform::at(orb_base_position(i) + self.orb_offsets[i])
                        .with_uniform_scale(ORB_RADIUS),
                ));
            }
        }
        for i in 0..DRAGON_STAR_COUNT {
            if let Some(star) = targets.star(i) {
                let (scale, emissive) = star_pulse(t, i);
                star.apply(
                    &NodeUpdate::transform(star_transform(i, scale))
                        .with_emissive_intensity(emissive),
                );
            }
        }
    }
}

// ---------------- Node model ----------------

/// A transform shared by a set of child meshes.
#[derive(Clone, Debug, Default)]
pub struct GroupNode {
    pub transform: Transform,
    pub children: Vec<SceneNode>,
}

impl GroupNode {
    pub fn new(children: Vec<SceneNode>) -> Self {
        Self {
            transform: Transform::IDENTITY,
            children,
        }
    }

    pub fn draw(&self, parent: Mat4, out: &mut Vec<DrawItem>) {
        let m = parent * self.transform.matrix();
        out.extend(self.children.iter().map(|c| c.draw_item(m)));
    }
}

impl ApplyTransform for GroupNode {
    fn apply(&mut self, update: &NodeUpdate) {
        if let Some(t) = update.transform {
            self.transform = t;
        }
    }
}

/// Mesh nodes of the ornament. Slots start empty and are filled by
/// [`OrnamentModel::mount`].
#[derive(Clone, Debug, Default)]
pub struct OrnamentModel {
    pub group: Option<GroupNode>,
    pub core: Option<GroupNode>,
    pub shell: Option<SceneNode>,
    pub rings: Option<GroupNode>,
    pub orbs: SmallVec<[Option<SceneNode>; ORB_COUNT]>,
    pub stars: SmallVec<[Option<SceneNode>; DRAGON_STAR_COUNT]>,
    pub specks: Vec<SceneNode>,
}

impl OrnamentModel {
    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn mounted() -> Self {
        let mut m = Self::unmounted();
        m.mount();
        m
    }

    /// Build every node at its rest pose.
    pub fn mount(&mut self) {
        let sphere = |pos: Vec3, radius: f32, material: Material| {
            SceneNode::new(
                MeshKind::Sphere,
                Transform::at(pos).with_uniform_scale(radius),
                material,
            )
        };

        let mut core_children = vec![
            sphere(Vec3::ZERO, CORE_RADIUS, Material::glowing(0xFF8C00, 0xFF4500)),
            sphere(
                Vec3::ZERO,
                BODY_RADIUS,
                Material::glowing(0xFFA500, 0xFF4500).with_opacity(0.7),
            ),
            sphere(
                Vec3::ZERO,
                STAR_SHELL_RADIUS,
                Material::glowing(0xFFD700, 0xFF6B35)
                    .with_opacity(0.3)
                    .with_wire(WireMode::Grid),
            ),
        ];
        core_children.extend((0..INNER_MOTE_COUNT).map(|i| {
            sphere(
                mote_position(i),
                MOTE_RADIUS,
                Material::glowing(0xFFD700, 0xFFD700).with_emissive_intensity(0.8),
            )
        }));

        let ring_children = RINGS
            .iter()
            .map(|(rot, color, emissive, opacity)| {
                SceneNode::new(
                    MeshKind::Torus,
                    Transform::IDENTITY
                        .with_rotation(Vec3::from_array(*rot))
                        .with_uniform_scale(RING_RADIUS),
                    Material::glowing(*color, *emissive).with_opacity(*opacity),
                )
            })
            .collect();

        self.group = Some(GroupNode::new(Vec::new()));
        self.core = Some(GroupNode::new(core_children));
        self.shell = Some(sphere(
            Vec3::ZERO,
            SHELL_RADIUS,
            Material::glowing(0xFF4500, 0xFF0000)
                .with_opacity(0.15)
                .with_wire(WireMode::Grid),
        ));
        self.rings = Some(GroupNode::new(ring_children));
        self.orbs = (0..ORB_COUNT)
            .map(|i| Some(sphere(orb_base_position(i), ORB_RADIUS, orb_material(i))))
            .collect();
        self.stars = (0..DRAGON_STAR_COUNT)
            .map(|i| {
                Some(SceneNode::new(
                    MeshKind::Sphere,
                    star_transform(i, 1.0),
                    Material::glowing(0xFF0000, 0xFF0000),
                ))
            })
            .collect();
        self.specks = (0..ENERGY_SPECK_COUNT)
            .map(|i| {
                sphere(
                    speck_position(i),
                    SPECK_RADIUS,
                    Material::glowing(0xFFD700, 0xFFA500).with_emissive_intensity(0.5),
                )
            })
            .collect();
    }

    /// Flatten the hierarchy into draw items.
    pub fn draw(&self, out: &mut Vec<DrawItem>) {
        let root = self
            .group
            .as_ref()
            .map(|g| g.transform.matrix())
            .unwrap_or(Mat4::IDENTITY);
        if let Some(shell) = &self.shell {
            out.push(shell.draw_item(root));
        }
        if let Some(core) = &self.core {
            core.draw(root, out);
            let core_m = root * core.transform.matrix();
            out.extend(self.stars.iter().flatten().map(|s| s.draw_item(core_m)));
        }
        if let Some(rings) = &self.rings {
            rings.draw(root, out);
        }
        out.extend(self.orbs.iter().flatten().map(|o| o.draw_item(root)));
        out.extend(self.specks.iter().map(|s| s.draw_item(root)));
    }
}

impl OrnamentTargets for OrnamentModel {
    fn group(&mut self) -> Option<&mut dyn ApplyTransform> {
        self.group.as_mut().map(|g| g as &mut dyn ApplyTransform)
    }

    fn core(&mut self) -> Option<&mut dyn ApplyTransform> {
        self.core.as_mut().map(|g| g as &mut dyn ApplyTransform)
    }

    fn shell(&mut self) -> Option<&mut dyn ApplyTransform> {
        self.shell.as_mut().map(|n| n as &mut dyn ApplyTransform)
    }

    fn rings(&mut self) -> Option<&mut dyn ApplyTransform> {
        self.rings.as_mut().map(|g| g as &mut dyn ApplyTransform)
    }

    fn orb(&mut self, index: usize) -> Option<&mut dyn ApplyTransform> {
        self.orbs
            .get_mut(index)
            .and_then(|o| o.as_mut())
            .map(|n| n as &mut dyn ApplyTransform)
    }

    fn star(&mut self, index: usize) -> Option<&mut dyn ApplyTransform> {
        self.stars
            .get_mut(index)
            .and_then(|s| s.as_mut())
            .map(|n| n as &mut dyn ApplyTransform)
    }
}
