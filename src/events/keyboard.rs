use crate::constants::*;
use crate::core::ViewerAction;
use crate::dom;
use crate::page::{self, SharedPage};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_viewer_keydown(ev: &web::KeyboardEvent, page_state: &SharedPage) {
    if !page_state.borrow().viewer.is_open() {
        return;
    }
    if let Some(action) = ViewerAction::for_key(&ev.key()) {
        page::apply_viewer_action(page_state, action);
        ev.prevent_default();
    }
}

pub fn wire_viewer_keydown(page_state: SharedPage) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_viewer_keydown(&ev, &page_state);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Modal controls: rotate left/right, auto toggle, close.
pub fn wire_viewer_buttons(document: &web::Document, page_state: &SharedPage) {
    let buttons = [
        (VIEWER_LEFT_ID, ViewerAction::RotateLeft),
        (VIEWER_RIGHT_ID, ViewerAction::RotateRight),
        (VIEWER_AUTO_ID, ViewerAction::ToggleAuto),
        (VIEWER_CLOSE_ID, ViewerAction::Close),
    ];
    for (id, action) in buttons {
        let page_state = page_state.clone();
        dom::add_click_listener(document, id, move || {
            page::apply_viewer_action(&page_state, action);
        });
    }
}
