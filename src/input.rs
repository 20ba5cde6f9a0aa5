use glam::{Vec2, Vec3};
use web_sys as web;

/// Pointer drag on the viewer card.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub last_x: f32,
    pub pointer_id: i32,
}

impl DragState {
    pub fn begin(&mut self, x: f32, pointer_id: i32) {
        self.active = true;
        self.last_x = x;
        self.pointer_id = pointer_id;
    }

    /// Horizontal movement since the last call, or `None` when idle.
    pub fn step(&mut self, x: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        let dx = x - self.last_x;
        self.last_x = x;
        Some(dx)
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

/// Yaw for a horizontal drag: the full canvas height is one turn, like an
/// orbit control.
#[inline]
pub fn drag_yaw_delta(dx_px: f32, canvas_height_px: f32) -> f32 {
    if canvas_height_px <= 0.0 || !dx_px.is_finite() {
        return 0.0;
    }
    std::f32::consts::TAU * dx_px / canvas_height_px
}

/// Slab test against an axis-aligned box centred at `center`. Returns the
/// entry distance along the ray, or the exit distance when starting inside.
#[inline]
pub fn ray_box(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, half_extents: Vec3) -> Option<f32> {
    let min = center - half_extents;
    let max = center + half_extents;
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let o = ray_origin[axis];
        let d = ray_dir[axis];
        if d.abs() < 1e-8 {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv;
        let mut t1 = (max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    Vec2::new(
        x_css / w * canvas.width() as f32,
        y_css / h * canvas.height() as f32,
    )
}
