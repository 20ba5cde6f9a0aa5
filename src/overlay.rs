use crate::constants::*;
use crate::core::{AssetTracker, Entity, ViewerMode};
use web_sys as web;

#[inline]
fn show_id(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.remove_attribute("style");
    }
}

#[inline]
fn hide_id(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

// ---------------- Page loader ----------------

/// Refresh the "N% loaded" label and hide the loader once every asset has
/// settled.
pub fn update_loader(document: &web::Document, tracker: &AssetTracker) {
    if let Some(el) = document.get_element_by_id(LOADER_TEXT_ID) {
        el.set_text_content(Some(&tracker.label()));
    }
    if tracker.is_complete() {
        hide_id(document, LOADER_ID);
    } else {
        show_id(document, LOADER_ID);
    }
}

// ---------------- Character viewer modal ----------------

pub fn show_viewer(document: &web::Document, entity: &Entity) {
    if let Some(el) = document.get_element_by_id(VIEWER_NAME_ID) {
        el.set_text_content(Some(entity.name));
    }
    if let Some(el) = document.get_element_by_id(VIEWER_POWER_ID) {
        el.set_text_content(Some(&format!("Power: {}", entity.display_power)));
    }
    show_id(document, VIEWER_ID);
    set_viewer_loading(document, entity.has_image());
}

pub fn hide_viewer(document: &web::Document) {
    hide_id(document, VIEWER_ID);
}

pub fn set_viewer_loading(document: &web::Document, loading: bool) {
    if loading {
        show_id(document, VIEWER_LOADER_ID);
    } else {
        hide_id(document, VIEWER_LOADER_ID);
    }
}

/// Label of the auto-rotate button reflects the current mode.
pub fn set_viewer_mode(document: &web::Document, mode: ViewerMode) {
    if let Some(el) = document.get_element_by_id(VIEWER_AUTO_ID) {
        let cl = el.class_list();
        match mode {
            ViewerMode::AutoRotating => {
                _ = cl.add_1("active");
                el.set_text_content(Some("Auto: On"));
            }
            ViewerMode::ManualControl => {
                _ = cl.remove_1("active");
                el.set_text_content(Some("Auto: Off"));
            }
        }
    }
}
