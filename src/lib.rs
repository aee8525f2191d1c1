#![cfg(target_arch = "wasm32")]
use anamorph_core::constants::{
    HOME_ORIENTATION_DEG, REVEAL_TOLERANCE_DEG, SECRET_ORIENTATION_DEG,
};
use anamorph_core::{
    Orientation, OrientationController, RevealEvaluator, SceneComposer, SceneParams,
};
use constants::CANVAS_ID;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod overlay;
mod render;

pub(crate) static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

// Window resize only touches the canvas backing size; the frame loop picks up
// the new aspect from it.
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

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("anamorph-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);
    overlay::show_loading(&document);

    let home = Orientation::from_degrees(HOME_ORIENTATION_DEG);
    let controller = Rc::new(RefCell::new(OrientationController::new(
        home,
        RevealEvaluator::new(
            Orientation::from_degrees(SECRET_ORIENTATION_DEG),
            REVEAL_TOLERANCE_DEG,
        ),
    )));
    overlay::show_orientation(&document, home);
    let composer = Rc::new(RefCell::new(SceneComposer::new(SceneParams::default())));
    let rng = Rc::new(RefCell::new(StdRng::seed_from_u64(js_sys::Date::now() as u64)));

    // Input is wired now but stays inert until the controller is unlocked
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        controller: controller.clone(),
    });
    events::wire_controls(&document, controller.clone());

    let on_ready: Rc<dyn Fn()> = {
        let controller = controller.clone();
        let document = document.clone();
        Rc::new(move || {
            controller.borrow_mut().mark_ready();
            overlay::show_ready(&document);
        })
    };
    loader::spawn_asset_loads(composer.clone(), rng, on_ready);

    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        composer,
        document,
        canvas,
        gpu,
        started: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
