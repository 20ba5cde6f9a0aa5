use crate::camera;
use crate::core::{CARD_HALF_EXTENTS, VIEWER_CAMERA_Z};
use crate::input;
use crate::page::SharedPage;
use glam::{Mat3, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub page: SharedPage,
    pub drag_state: Rc<RefCell<input::DragState>>,
}

pub fn wire_viewer_pointer(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

/// True if the canvas pixel lies over the card at its current yaw.
fn hits_card(canvas: &web::HtmlCanvasElement, x: f32, y: f32, yaw: f32) -> bool {
    let eye = Vec3::new(0.0, 0.0, VIEWER_CAMERA_Z);
    let (ro, rd) = camera::screen_to_world_ray(canvas, x, y, eye);
    // Test in card space so the box stays axis-aligned
    let inv = Mat3::from_rotation_y(-yaw);
    input::ray_box(
        inv * ro,
        inv * rd,
        Vec3::ZERO,
        Vec3::from_array(CARD_HALF_EXTENTS),
    )
    .is_some()
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let yaw = match w.page.borrow().viewer.state() {
            Some(s) => s.yaw(),
            None => return,
        };
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        if !hits_card(&w.canvas, pos.x, pos.y, yaw) {
            return;
        }
        w.drag_state.borrow_mut().begin(pos.x, ev.pointer_id());
        w.page.borrow_mut().viewer.begin_drag();
        if let Some(document) = crate::dom::window_document() {
            if let Some(mode) = w.page.borrow().viewer.mode() {
                crate::overlay::set_viewer_mode(&document, mode);
            }
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let Some(dx) = w.drag_state.borrow_mut().step(pos.x) else {
            return;
        };
        let delta = input::drag_yaw_delta(dx, w.canvas.height() as f32);
        w.page.borrow_mut().viewer.drag_by(delta);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_dragging = w.drag_state.borrow().active;
        if was_dragging {
            w.drag_state.borrow_mut().end();
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    for event in ["pointerup", "pointercancel"] {
        _ = canvas_for_listener
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
