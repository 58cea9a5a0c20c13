use crate::core::PointerSource;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed mouse and touch movement into the shared pointer cell. Page
/// coordinates are used as-is; the trail canvas covers the viewport.
pub fn wire_pointer_input(pointer: Rc<RefCell<PointerSource>>) {
    wire_mousemove(pointer.clone());
    wire_touchmove(pointer);
}

fn wire_mousemove(pointer: Rc<RefCell<PointerSource>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let first = !pointer.borrow().has_real_input();
        pointer
            .borrow_mut()
            .record_input(ev.page_x() as f64, ev.page_y() as f64);
        if first {
            log::info!("[trail] pointer input seen, leaving idle path");
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchmove(pointer: Rc<RefCell<PointerSource>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        let first = !pointer.borrow().has_real_input();
        pointer
            .borrow_mut()
            .record_input(touch.page_x() as f64, touch.page_y() as f64);
        if first {
            log::info!("[trail] touch input seen, leaving idle path");
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
