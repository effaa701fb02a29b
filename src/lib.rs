#![cfg(target_arch = "wasm32")]
use scrollscape_core::{showcase, FrameScheduler, InstantClock, SceneContext, ViewportProfile};
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
mod render;

use constants::{CANVAS_ID, SCENE_SEED};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollscape starting");

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

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let profile = ViewportProfile::for_viewport(dom::is_small_viewport(&window));
    log::info!(
        "[init] small viewport: {} particles={} sparks={}",
        profile.small,
        profile.particle_count,
        profile.spark_count
    );
    let registry = showcase(&profile, SCENE_SEED);
    let scheduler = FrameScheduler::new(SceneContext::new(profile, SCENE_SEED), registry, InstantClock::new());

    // A missing WebGPU adapter leaves the state engine and CSS hooks running.
    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scheduler, window, document, canvas, gpu,
    )));

    events::wire_all(&frame_ctx);
    frame_ctx.borrow_mut().relayout(frame::Layout::Load);
    frame::start_loop(frame_ctx);
    Ok(())
}
