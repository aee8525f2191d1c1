use crate::constants::MAX_FRAME_DT_SEC;
use crate::events::reflect_update;
use crate::render;
use anamorph_core::constants::CAMERA_RADIUS;
use anamorph_core::{Camera, OrientationController, SceneComposer, Update};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub controller: Rc<RefCell<OrientationController>>,
    pub composer: Rc<RefCell<SceneComposer>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        // Animated transition; completion runs the reveal check inside tick
        let (update, orientation) = {
            let mut c = self.controller.borrow_mut();
            (c.tick(Duration::from_secs_f32(dt_sec)), c.orientation())
        };
        if update != Update::Ignored {
            reflect_update(&self.document, orientation, update);
        }

        let elapsed = (now - self.started).as_secs_f32();
        let mut composer = self.composer.borrow_mut();
        composer.apply_ambient(elapsed);

        let Some(g) = &mut self.gpu else {
            return;
        };
        for (kind, cloud) in composer.clouds() {
            if !g.has_cloud(kind) {
                g.upload(kind, cloud);
            }
        }

        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        let camera = Camera::orbit(orientation, CAMERA_RADIUS, g.aspect());
        let point_scale = web::window()
            .map(|w| w.device_pixel_ratio() as f32)
            .unwrap_or(1.0);
        if let Err(e) = g.render(camera.view_proj(), point_scale, composer.clouds()) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
