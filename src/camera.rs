use glam::{Mat4, Vec3, Vec4};
use web_sys as web;

use crate::core::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};

/// Compute a world-space ray from canvas pixel coordinates for a camera at
/// `eye` looking at the origin.
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    sx: f32,
    sy: f32,
    eye: Vec3,
) -> (Vec3, Vec3) {
    let width = (canvas.width() as f32).max(1.0);
    let height = (canvas.height() as f32).max(1.0);
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let proj = Mat4::perspective_rh(
        CAMERA_FOV_DEG.to_radians(),
        width / height,
        CAMERA_NEAR,
        CAMERA_FAR,
    );
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let inv = (proj * view).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    (eye, (p1 - eye).normalize())
}
