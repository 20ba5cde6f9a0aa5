#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{
    AnimationClock, ParticleField, ParticleFieldParams, Starfield, StarfieldParams,
};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod overlay;
mod page;
mod render;
mod sections;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn build_background() -> frame::BackgroundScene {
    let mut rng = StdRng::from_entropy();
    let particles = ParticleField::with_rng(ParticleFieldParams::default(), &mut rng);
    let starfield = Starfield::with_rng(StarfieldParams::default(), &mut rng);
    frame::BackgroundScene::new(particles, starfield)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dbz-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let bg_canvas = dom::canvas_by_id(&document, BG_CANVAS_ID)?;
    let viewer_canvas = dom::canvas_by_id(&document, VIEWER_CANVAS_ID)?;
    wire_canvas_resize(&bg_canvas);
    wire_canvas_resize(&viewer_canvas);

    // ---------------- Page state and sections ----------------
    let page: page::SharedPage = Rc::new(RefCell::new(page::PageState::new()));
    let queued_card_image: page::QueuedCardImage = Rc::new(RefCell::new(None));

    sections::build_gallery(&document, &page, &queued_card_image)?;
    sections::build_saga_buttons(&document, &page)?;
    loader::preload_characters(&page);
    overlay::hide_viewer(&document);

    // ---------------- Interaction ----------------
    events::wire_scroll(&window, &page);
    events::wire_viewer_buttons(&document, &page);
    events::wire_viewer_keydown(page.clone());
    events::wire_viewer_pointer(events::PointerWiring {
        canvas: viewer_canvas.clone(),
        page: page.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    // ---------------- Rendering ----------------
    // Sections stay usable without WebGPU; only the 3D layers go missing.
    let mut bg_gpu = frame::init_gpu(&bg_canvas, BG_CLEAR).await;
    let viewer_gpu = frame::init_gpu(&viewer_canvas, VIEWER_CLEAR).await;
    let mut scene = build_background();
    if let Some(g) = &mut bg_gpu {
        scene.attach(g);
    }
    log::info!(
        "[init] gpu background={} viewer={}",
        bg_gpu.is_some(),
        viewer_gpu.is_some()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        page,
        bg_canvas,
        viewer_canvas,
        bg_gpu,
        viewer_gpu,
        queued_card_image,
        card_session: None,
        scene,
        clock: AnimationClock::new(),
        items: Vec::new(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
