use crate::core::{
    AssetTracker, CharacterViewer, GalleryReveal, SagaSelector, ScrollTracker, ViewerAction,
    CHARACTERS,
};
use crate::{dom, loader, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the DOM listeners and the render loop share.
#[derive(Default)]
pub struct PageState {
    pub scroll: ScrollTracker,
    pub reveal: GalleryReveal,
    pub sagas: SagaSelector,
    pub viewer: CharacterViewer,
    pub assets: AssetTracker,
}

pub type SharedPage = Rc<RefCell<PageState>>;

/// Decoded card image waiting for the viewer renderer, tagged with the
/// session that requested it.
pub type QueuedCardImage = Rc<RefCell<Option<(u64, web::ImageBitmap)>>>;

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn open_viewer(page: &SharedPage, queued: &QueuedCardImage, index: usize) {
    let Some(entity) = CHARACTERS.get(index) else {
        return;
    };
    let (session, mode) = {
        let mut p = page.borrow_mut();
        let session = p.viewer.open(entity);
        (session, p.viewer.mode())
    };
    log::info!("[viewer] open {} (session {})", entity.name, session);
    if let Some(document) = dom::window_document() {
        overlay::show_viewer(&document, entity);
        if let Some(mode) = mode {
            overlay::set_viewer_mode(&document, mode);
        }
        if let Ok(canvas) = dom::canvas_by_id(&document, crate::constants::VIEWER_CANVAS_ID) {
            dom::sync_canvas_backing_size(&canvas);
        }
    }
    // Drop any image decoded for an earlier card
    _ = queued.borrow_mut().take();
    if entity.has_image() {
        loader::request_card_image(page.clone(), queued.clone(), entity, session);
    }
}

pub fn close_viewer(page: &SharedPage) {
    let closed = {
        let mut p = page.borrow_mut();
        let selected = p.viewer.selected();
        p.viewer.close();
        selected
    };
    if let Some(entity) = closed {
        log::info!("[viewer] close {}", entity.name);
    }
    if let Some(document) = dom::window_document() {
        overlay::hide_viewer(&document);
    }
}

/// Route a button or key intent to the viewer and refresh the modal.
pub fn apply_viewer_action(page: &SharedPage, action: ViewerAction) {
    if !page.borrow().viewer.is_open() {
        return;
    }
    if action == ViewerAction::Close {
        close_viewer(page);
        return;
    }
    let mode = {
        let mut p = page.borrow_mut();
        p.viewer.apply(action);
        p.viewer.mode()
    };
    if let (Some(document), Some(mode)) = (dom::window_document(), mode) {
        overlay::set_viewer_mode(&document, mode);
    }
}
