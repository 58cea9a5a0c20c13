use crate::core::{SwipeDirection, SwipeTracker};
use crate::slider::{HeroSlides, SlideTimer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct SwipeWiring {
    tracker: Rc<RefCell<SwipeTracker>>,
    hero: Rc<RefCell<HeroSlides>>,
    timer: Rc<RefCell<SlideTimer>>,
}

impl SwipeWiring {
    fn navigate(&self, dir: Option<SwipeDirection>) {
        let Some(dir) = dir else {
            return;
        };
        self.hero.borrow_mut().step(dir);
        self.timer.borrow_mut().restart();
        log::debug!("[slider] swipe {:?}", dir);
    }
}

/// Mouse drag and touch swipe navigation on the slider container. A recognised
/// swipe moves one slide and restarts the auto-advance interval.
pub fn wire_swipe_handlers(
    el: &web::Element,
    hero: Rc<RefCell<HeroSlides>>,
    timer: Rc<RefCell<SlideTimer>>,
) {
    let w = SwipeWiring {
        tracker: Rc::new(RefCell::new(SwipeTracker::default())),
        hero,
        timer,
    };

    let wm = w.clone();
    listen(el, "mousedown", move |ev: web::MouseEvent| {
        wm.tracker.borrow_mut().press(ev.page_x() as f64);
    });

    let wm = w.clone();
    listen(el, "mouseup", move |ev: web::MouseEvent| {
        let dir = wm.tracker.borrow_mut().release(ev.page_x() as f64);
        wm.navigate(dir);
    });

    let wm = w.clone();
    listen(el, "mouseleave", move |_ev: web::MouseEvent| {
        wm.tracker.borrow_mut().leave();
    });

    let wt = w.clone();
    listen(el, "touchstart", move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            wt.tracker.borrow_mut().touch_start(t.page_x() as f64);
        }
    });

    let wt = w;
    listen(el, "touchend", move |ev: web::TouchEvent| {
        if let Some(t) = ev.changed_touches().get(0) {
            let dir = wt.tracker.borrow_mut().touch_end(t.page_x() as f64);
            wt.navigate(dir);
        }
    });
}

fn listen<E>(el: &web::Element, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
