use crate::constants::*;
use crate::core::{
    AnimationClock, CameraRig, DrawItem, FrameSignal, OrnamentAnimator, OrnamentModel,
    ParticleField, Starfield, VIEWER_CAMERA_Z,
};
use crate::page::{QueuedCardImage, SharedPage};
use crate::render::{self, SpriteInstance, SpriteLayerId};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Background scene: ornament, particle field and starfield.
pub struct BackgroundScene {
    pub rig: CameraRig,
    pub ornament: OrnamentModel,
    pub animator: OrnamentAnimator,
    pub particles: ParticleField,
    pub starfield: Starfield,
    particle_layer: Option<SpriteLayerId>,
    star_layer: Option<SpriteLayerId>,
}

impl BackgroundScene {
    pub fn new(particles: ParticleField, starfield: Starfield) -> Self {
        Self {
            rig: CameraRig::default(),
            ornament: OrnamentModel::mounted(),
            animator: OrnamentAnimator::new(),
            particles,
            starfield,
            particle_layer: None,
            star_layer: None,
        }
    }

    /// Upload the static point clouds once the GPU exists.
    pub fn attach(&mut self, gpu: &mut render::GpuState<'_>) {
        let p = &self.particles.params;
        let particle_sprites: Vec<SpriteInstance> = self
            .particles
            .points()
            .map(|pos| SpriteInstance {
                position: pos.to_array(),
                size: p.size,
                color: p.color,
            })
            .collect();
        let star_sprites: Vec<SpriteInstance> = self
            .starfield
            .stars()
            .iter()
            .map(|s| SpriteInstance {
                position: s.position.to_array(),
                size: s.size,
                color: [s.brightness, s.brightness, s.brightness, 1.0],
            })
            .collect();
        self.star_layer = Some(gpu.add_sprite_layer(&star_sprites, STAR_SPRITE_SCALE, STAR_TWINKLE));
        self.particle_layer = Some(gpu.add_sprite_layer(&particle_sprites, 1.0, 0.0));
        log::info!(
            "[frame] sprite layers: {} stars, {} particles",
            star_sprites.len(),
            particle_sprites.len()
        );
    }

    pub fn update(&mut self, signal: &FrameSignal) {
        self.animator.update(signal, &mut self.ornament);
        self.particles.update(signal);
        self.starfield.update(signal);
        self.rig.update(signal.progress);
    }

    pub fn sync_gpu(&self, gpu: &mut render::GpuState<'_>, items: &mut Vec<DrawItem>) {
        items.clear();
        self.ornament.draw(items);
        gpu.set_camera(self.rig.eye(), Vec3::ZERO);
        if let Some(id) = self.particle_layer {
            gpu.set_sprite_layer_model(id, self.particles.model_matrix());
        }
        if let Some(id) = self.star_layer {
            gpu.set_sprite_layer_model(id, self.starfield.model_matrix());
        }
    }
}

pub struct FrameContext<'a> {
    pub page: SharedPage,
    pub bg_canvas: web::HtmlCanvasElement,
    pub viewer_canvas: web::HtmlCanvasElement,

    pub bg_gpu: Option<render::GpuState<'a>>,
    pub viewer_gpu: Option<render::GpuState<'a>>,
    pub queued_card_image: QueuedCardImage,
    /// Session whose image is currently bound on the viewer GPU.
    pub card_session: Option<u64>,

    pub scene: BackgroundScene,
    pub clock: AnimationClock,
    pub items: Vec<DrawItem>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = self.clock.advance(dt);

        let progress = self.page.borrow().scroll.progress();
        let signal = FrameSignal::new(progress, &self.clock, dt_sec);
        self.scene.update(&signal);

        if let Some(g) = &mut self.bg_gpu {
            self.scene.sync_gpu(g, &mut self.items);
            g.resize_if_needed(self.bg_canvas.width(), self.bg_canvas.height());
            if let Err(e) = g.render(dt_sec, &self.items) {
                log::error!("render error: {:?}", e);
            }
        }

        self.viewer_frame(dt_sec);
    }

    fn viewer_frame(&mut self, dt_sec: f32) {
        let mut page = self.page.borrow_mut();
        page.viewer.tick(dt_sec);
        let Some(state) = page.viewer.state() else {
            return;
        };
        let Some(g) = &mut self.viewer_gpu else {
            return;
        };

        if let Some((session, bitmap)) = self.queued_card_image.borrow_mut().take() {
            if page.viewer.accepts(session) {
                g.set_card_image(&bitmap);
                self.card_session = Some(session);
            }
        }
        if self.card_session.is_some() && self.card_session != Some(state.session) {
            g.clear_card_image();
            self.card_session = None;
        }

        self.items.clear();
        state.draw(&mut self.items);
        drop(page);

        g.set_camera(Vec3::new(0.0, 0.0, VIEWER_CAMERA_Z), Vec3::ZERO);
        g.resize_if_needed(self.viewer_canvas.width(), self.viewer_canvas.height());
        if let Err(e) = g.render(dt_sec, &self.items) {
            log::error!("viewer render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    clear: [f64; 3],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, clear).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
