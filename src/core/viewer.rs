// Character viewer: modal card scene with an auto/manual rotation state
// machine. Owned by the characters section.

use super::catalog::Entity;
use super::constants::{CARD_HALF_EXTENTS, VIEWER_AUTO_ROTATE_RAD_PER_SEC, VIEWER_BUTTON_STEP_RAD};
use super::scene::{DrawItem, Material, MeshKind, SceneNode, Transform, WireMode};
use glam::Vec3;
use std::f32::consts::PI;

// Faces sit just outside the edge box so they never z-fight with it.
const CARD_FACE_OFFSET: f32 = 0.11;
const CARD_BACK_COLOR: u32 = 0x111111;
const CARD_EDGE_COLOR: u32 = 0xFFD700;
const CARD_EDGE_OPACITY: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerMode {
    AutoRotating,
    ManualControl,
}

/// Discrete user intents, from buttons or the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerAction {
    RotateLeft,
    RotateRight,
    ToggleAuto,
    Close,
}

impl ViewerAction {
    pub fn for_key(key: &str) -> Option<ViewerAction> {
        match key {
            "ArrowLeft" => Some(ViewerAction::RotateLeft),
            "ArrowRight" => Some(ViewerAction::RotateRight),
            "a" | "A" => Some(ViewerAction::ToggleAuto),
            "Escape" => Some(ViewerAction::Close),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureStatus {
    Loading,
    Ready,
    /// Load failed; the card renders its placeholder face.
    Failed,
}

#[derive(Clone, Debug)]
pub struct ViewerState {
    pub entity: &'static Entity,
    /// Manual yaw from the rotate buttons (radians, unbounded).
    pub rotation_angle: f32,
    /// Orbit yaw from auto-rotation and pointer drags.
    pub orbit_yaw: f32,
    pub mode: ViewerMode,
    pub session: u64,
    pub texture: TextureStatus,
}

impl ViewerState {
    #[inline]
    pub fn auto_rotate(&self) -> bool {
        self.mode == ViewerMode::AutoRotating
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.rotation_angle + self.orbit_yaw
    }

    pub fn card_transform(&self) -> Transform {
        Transform::IDENTITY.with_rotation(Vec3::new(0.0, self.yaw(), 0.0))
    }

    /// Front face, back face and gold edge box, rotated by the current yaw.
    pub fn card_nodes(&self) -> [SceneNode; 3] {
        let [hx, hy, hz] = CARD_HALF_EXTENTS;
        let face_scale = Vec3::new(hx * 2.0, hy * 2.0, 1.0);
        let front = match self.texture {
            TextureStatus::Ready => Material::default().with_texture(),
            // placeholder face tinted by the entity's gradient
            TextureStatus::Loading | TextureStatus::Failed => Material {
                color: self.entity.color_tag.primary_rgb(),
                ..Material::default()
            },
        };
        [
            SceneNode::new(
                MeshKind::Quad,
                Transform::at(Vec3::new(0.0, 0.0, CARD_FACE_OFFSET)).with_scale(face_scale),
                front,
            ),
            SceneNode::new(
                MeshKind::Quad,
                Transform::at(Vec3::new(0.0, 0.0, -CARD_FACE_OFFSET))
                    .with_rotation(Vec3::new(0.0, PI, 0.0))
                    .with_scale(face_scale),
                Material::glowing(CARD_BACK_COLOR, 0x000000),
            ),
            SceneNode::new(
                MeshKind::Cuboid,
                Transform::IDENTITY.with_scale(Vec3::new(hx * 2.0, hy * 2.0, hz * 2.0)),
                Material::glowing(CARD_EDGE_COLOR, CARD_EDGE_COLOR)
                    .with_emissive_intensity(0.5)
                    .with_opacity(CARD_EDGE_OPACITY)
                    .with_wire(WireMode::Edges),
            ),
        ]
    }

    pub fn draw(&self, out: &mut Vec<DrawItem>) {
        let parent = self.card_transform().matrix();
        out.extend(self.card_nodes().iter().map(|n| n.draw_item(parent)));
    }

    fn take_manual_control(&mut self) {
        self.mode = ViewerMode::ManualControl;
    }
}

#[derive(Clone, Debug, Default)]
pub struct CharacterViewer {
    state: Option<ViewerState>,
    next_session: u64,
}

impl CharacterViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `entity`, replacing any open card. Returns the session token
    /// that asset loads must present to be accepted.
    pub fn open(&mut self, entity: &'static Entity) -> u64 {
        self.next_session += 1;
        let session = self.next_session;
        self.state = Some(ViewerState {
            entity,
            rotation_angle: 0.0,
            orbit_yaw: 0.0,
            mode: ViewerMode::AutoRotating,
            session,
            texture: if entity.has_image() {
                TextureStatus::Loading
            } else {
                TextureStatus::Failed
            },
        });
        session
    }

    pub fn close(&mut self) {
        self.state = None;
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    #[inline]
    pub fn state(&self) -> Option<&ViewerState> {
        self.state.as_ref()
    }

    pub fn selected(&self) -> Option<&'static Entity> {
        self.state.as_ref().map(|s| s.entity)
    }

    pub fn mode(&self) -> Option<ViewerMode> {
        self.state.as_ref().map(|s| s.mode)
    }

    /// Manual step; any rotation hands control to the user.
    pub fn rotate_by(&mut self, delta: f32) {
        if let Some(s) = self.state.as_mut() {
            s.rotation_angle += delta;
            s.take_manual_control();
        }
    }

    pub fn rotate_left(&mut self) {
        self.rotate_by(-VIEWER_BUTTON_STEP_RAD);
    }

    pub fn rotate_right(&mut self) {
        self.rotate_by(VIEWER_BUTTON_STEP_RAD);
    }

    /// The "Auto" button flips the mode; the manual angle is kept.
    pub fn toggle_auto(&mut self) {
        if let Some(s) = self.state.as_mut() {
            s.mode = match s.mode {
                ViewerMode::AutoRotating => ViewerMode::ManualControl,
                ViewerMode::ManualControl => ViewerMode::AutoRotating,
            };
        }
    }

    /// Pointer grabbed the card.
    pub fn begin_drag(&mut self) {
        if let Some(s) = self.state.as_mut() {
            s.take_manual_control();
        }
    }

    pub fn drag_by(&mut self, yaw_delta: f32) {
        if let Some(s) = self.state.as_mut() {
            s.orbit_yaw += yaw_delta;
            s.take_manual_control();
        }
    }

    pub fn apply(&mut self, action: ViewerAction) {
        match action {
            ViewerAction::RotateLeft => self.rotate_left(),
            ViewerAction::RotateRight => self.rotate_right(),
            ViewerAction::ToggleAuto => self.toggle_auto(),
            ViewerAction::Close => self.close(),
        }
    }

    /// Advance auto-rotation.
    pub fn tick(&mut self, dt_sec: f32) {
        if let Some(s) = self.state.as_mut() {
            if s.auto_rotate() && dt_sec.is_finite() && dt_sec > 0.0 {
                s.orbit_yaw += VIEWER_AUTO_ROTATE_RAD_PER_SEC * dt_sec;
            }
        }
    }

    /// True if a load started for `session` may still be applied.
    pub fn accepts(&self, session: u64) -> bool {
        self.state.as_ref().is_some_and(|s| s.session == session)
    }

    /// Record a texture result. Stale sessions are ignored and return false.
    pub fn resolve_texture(&mut self, session: u64, ok: bool) -> bool {
        match self.state.as_mut() {
            Some(s) if s.session == session => {
                s.texture = if ok {
                    TextureStatus::Ready
                } else {
                    TextureStatus::Failed
                };
                true
            }
            _ => false,
        }
    }
}
