#![cfg(target_arch = "wasm32")]
use crate::constants::TRAIL_CANVAS_SELECTOR;
use crate::core::{with_overrides, PointerSource, TrailParams, TrailSession};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod nav;
mod render;
mod reveal;
mod slider;

// Backing store follows the window size exactly; each resize clears the canvas.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_to_window(canvas);
    let canvas_resize = canvas.clone();
    dom::add_window_listener("resize", move || {
        dom::sync_canvas_to_window(&canvas_resize);
    });
}

fn trail_params(canvas: &web::HtmlCanvasElement) -> TrailParams {
    let defaults = TrailParams::default();
    let (params, rejected) = with_overrides(defaults, |attr| canvas.get_attribute(attr));
    for r in &rejected {
        log::warn!("[trail] ignoring unparseable override {}", r);
    }
    match params.check() {
        Ok(()) => params,
        Err(e) => {
            log::warn!("[trail] invalid overrides ({}), using defaults", e);
            defaults
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("digilab-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page glue first so a missing canvas does not take the menu down with it.
    nav::wire_nav_toggle(&document);
    slider::wire_hero_slider(&document);
    reveal::wire_scroll_reveal(&document);

    let canvas: web::HtmlCanvasElement = document
        .query_selector(TRAIL_CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing <canvas>"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    wire_canvas_resize(&canvas);

    let viewport = dom::viewport_size().ok_or_else(|| anyhow::anyhow!("no viewport size"))?;
    let pointer = Rc::new(RefCell::new(PointerSource::centered(viewport)));
    let params = trail_params(&canvas);
    let session = TrailSession::new(params, pointer.borrow().position());
    log::info!(
        "[trail] points={} width={} spring={} friction={}",
        params.points_number,
        params.width_factor,
        params.spring,
        params.friction
    );

    events::wire_pointer_input(pointer.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        pointer,
        canvas,
        painter: render::CanvasPainter::new(ctx),
        last_ts: None,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
