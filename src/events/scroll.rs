use crate::dom;
use crate::page::SharedPage;
use crate::sections;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn refresh(page: &SharedPage) {
    if let Some(window) = web::window() {
        if let Some(document) = window.document() {
            sections::apply_scroll(&window, &document, &mut page.borrow_mut());
        }
    }
}

/// Re-sample scroll state on scroll and resize, and once immediately so
/// the page starts consistent.
pub fn wire_scroll(window: &web::Window, page: &SharedPage) {
    for event in ["scroll", "resize"] {
        let page = page.clone();
        let closure = Closure::wrap(Box::new(move || refresh(&page)) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
    refresh(page);
    if let Some(document) = dom::window_document() {
        log::info!(
            "[scroll] initial progress {:.3} ({} px document)",
            page.borrow().scroll.progress().get(),
            document
                .document_element()
                .map(|e| e.scroll_height())
                .unwrap_or(0)
        );
    }
}
