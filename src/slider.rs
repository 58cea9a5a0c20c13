use crate::constants::*;
use crate::core::{slider::translate_for, SlideDeck, SwipeDirection};
use crate::dom;
use crate::events;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Class-toggled hero slides (`.hero-slide`, one carries `active`).
pub struct HeroSlides {
    deck: SlideDeck,
    slides: Vec<web::Element>,
}

impl HeroSlides {
    pub fn new(slides: Vec<web::Element>) -> Self {
        Self {
            deck: SlideDeck::new(slides.len()),
            slides,
        }
    }

    pub fn show(&mut self, index: usize) {
        self.deck.show(index);
        self.apply();
    }

    pub fn step(&mut self, dir: SwipeDirection) {
        self.deck.step(dir);
        self.apply();
    }

    fn apply(&self) {
        let current = self.deck.current();
        for (i, slide) in self.slides.iter().enumerate() {
            let cl = slide.class_list();
            if i == current {
                _ = cl.add_1(SLIDE_ACTIVE_CLASS);
            } else {
                _ = cl.remove_1(SLIDE_ACTIVE_CLASS);
            }
        }
    }
}

/// Auto-advance timer that can be restarted after manual navigation.
pub struct SlideTimer {
    tick: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl SlideTimer {
    pub fn new(tick: impl FnMut() + 'static) -> Self {
        Self {
            tick: Closure::wrap(Box::new(tick) as Box<dyn FnMut()>),
            handle: None,
        }
    }

    pub fn start(&mut self) {
        let Some(w) = web::window() else {
            return;
        };
        match w.set_interval_with_callback_and_timeout_and_arguments_0(
            self.tick.as_ref().unchecked_ref(),
            SLIDE_INTERVAL_MS,
        ) {
            Ok(h) => self.handle = Some(h),
            Err(e) => log::error!("[slider] setInterval failed: {:?}", e),
        }
    }

    pub fn restart(&mut self) {
        if let (Some(w), Some(h)) = (web::window(), self.handle.take()) {
            w.clear_interval_with_handle(h);
        }
        self.start();
    }
}

/// Pick the slider variant present in the markup and start it.
pub fn wire_hero_slider(document: &web::Document) {
    let slides = dom::query_all(document, HERO_SLIDE_SELECTOR);
    let container = document.get_element_by_id(HERO_SLIDER_ID);
    if !slides.is_empty() {
        wire_swipe_deck(slides, container);
    } else if let Some(el) = container {
        wire_translate_timer(el);
    }
}

fn wire_swipe_deck(slides: Vec<web::Element>, container: Option<web::Element>) {
    log::info!("[slider] swipe deck with {} slides", slides.len());
    let hero = Rc::new(RefCell::new(HeroSlides::new(slides)));
    hero.borrow_mut().show(0);

    let hero_tick = hero.clone();
    let timer = Rc::new(RefCell::new(SlideTimer::new(move || {
        hero_tick.borrow_mut().step(SwipeDirection::Next);
    })));
    timer.borrow_mut().start();

    if let Some(el) = container {
        events::wire_swipe_handlers(&el, hero, timer);
    }
}

fn wire_translate_timer(el: web::Element) {
    log::info!("[slider] translate timer with {} panels", TRANSLATE_SLIDE_COUNT);
    let mut deck = SlideDeck::new(TRANSLATE_SLIDE_COUNT);
    let timer = SlideTimer::new(move || {
        let i = deck.next();
        dom::set_style(&el, "transform", &translate_for(i));
    });
    // Runs for the page lifetime.
    Box::leak(Box::new(timer)).start();
}
