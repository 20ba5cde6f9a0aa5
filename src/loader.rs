use crate::core::{Entity, CHARACTERS};
use crate::page::{QueuedCardImage, SharedPage};
use crate::{dom, overlay};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fetch and decode an image without attaching it to the document.
pub async fn load_image(src: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(src);
    let decoded: js_sys::Promise = img.decode();
    JsFuture::from(decoded)
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", src, e))?;
    Ok(img)
}

pub async fn load_bitmap(src: &str) -> anyhow::Result<web::ImageBitmap> {
    let img = load_image(src).await?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let promise: js_sys::Promise = window
        .create_image_bitmap_with_html_image_element(&img)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let bitmap = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("createImageBitmap {}: {:?}", src, e))?;
    bitmap
        .dyn_into::<web::ImageBitmap>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Register every gallery image with the tracker and load them in the
/// background, refreshing the page loader as each one settles.
pub fn preload_characters(page: &SharedPage) {
    {
        let mut p = page.borrow_mut();
        for entity in CHARACTERS.iter().filter(|e| e.has_image()) {
            p.assets.register(entity.image_ref);
        }
    }
    refresh_loader(page);
    for entity in CHARACTERS.iter().filter(|e| e.has_image()) {
        let page = page.clone();
        spawn_local(async move {
            let key = entity.image_ref;
            match load_image(key).await {
                Ok(_) => {
                    page.borrow_mut().assets.mark_loaded(key);
                }
                Err(e) => {
                    log::warn!("[assets] {} failed: {:?}", key, e);
                    page.borrow_mut().assets.mark_failed(key);
                }
            }
            refresh_loader(&page);
        });
    }
}

fn refresh_loader(page: &SharedPage) {
    if let Some(document) = dom::window_document() {
        overlay::update_loader(&document, &page.borrow().assets);
    }
}

/// Decode the card image for `session`. A result for a session that is no
/// longer open is dropped.
pub fn request_card_image(
    page: SharedPage,
    queued: QueuedCardImage,
    entity: &'static Entity,
    session: u64,
) {
    spawn_local(async move {
        if !page.borrow().viewer.accepts(session) {
            return;
        }
        let result = load_bitmap(entity.image_ref).await;
        let accepted = page.borrow_mut().viewer.resolve_texture(session, result.is_ok());
        if !accepted {
            log::info!("[viewer] discarding stale image for session {}", session);
            return;
        }
        match result {
            Ok(bitmap) => {
                *queued.borrow_mut() = Some((session, bitmap));
            }
            Err(e) => log::warn!("[viewer] {} image failed: {:?}", entity.name, e),
        }
        if let Some(document) = dom::window_document() {
            overlay::set_viewer_loading(&document, false);
        }
    });
}
