use crate::constants::FRAME_GAP_LOG_MS;
use crate::core::{PointerSource, TrailSession};
use crate::dom;
use crate::render::CanvasPainter;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: TrailSession,
    pub pointer: Rc<RefCell<PointerSource>>,
    pub canvas: web::HtmlCanvasElement,
    pub painter: CanvasPainter,
    pub last_ts: Option<f64>,
}

impl FrameContext {
    /// One trail frame at host timestamp `t_ms`.
    pub fn frame(&mut self, t_ms: f64) {
        if let Some(prev) = self.last_ts {
            let gap = t_ms - prev;
            if gap > FRAME_GAP_LOG_MS {
                log::debug!("[frame] long gap {:.0} ms", gap);
            }
        }
        self.last_ts = Some(t_ms);

        let viewport = dom::viewport_size().unwrap_or_else(|| {
            DVec2::new(self.canvas.width() as f64, self.canvas.height() as f64)
        });
        let commands = {
            let mut pointer = self.pointer.borrow_mut();
            self.session.step(t_ms, viewport, &mut pointer)
        };
        self.painter.paint(&commands);
    }
}

/// Run the first frame at t = 0, then one per animation frame for the page
/// lifetime. The next frame is requested only after the current one returns.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |t_ms: f64| {
        frame_ctx_tick.borrow_mut().frame(t_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));

    frame_ctx.borrow_mut().frame(0.0);
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
