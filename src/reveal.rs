use crate::constants::*;
use crate::core::reveal::should_reveal;
use crate::dom;
use web_sys as web;

/// Reveal timeline entries and footer columns once their top edge crosses the
/// trigger line. Reveals are never undone.
pub fn wire_scroll_reveal(document: &web::Document) {
    let timeline = dom::query_all(document, TIMELINE_SELECTOR);
    let footer_cols = dom::query_all(document, FOOTER_COL_SELECTOR);
    if timeline.is_empty() && footer_cols.is_empty() {
        return;
    }
    log::info!(
        "[reveal] {} timeline components, {} footer columns",
        timeline.len(),
        footer_cols.len()
    );

    let reveal = move || {
        let Some(viewport) = dom::viewport_size() else {
            return;
        };
        for comp in &timeline {
            if should_reveal(comp.get_bounding_client_rect().top(), viewport.y) {
                _ = comp.class_list().add_1(TIMELINE_SHOW_CLASS);
            }
        }
        for col in &footer_cols {
            if should_reveal(col.get_bounding_client_rect().top(), viewport.y) {
                dom::set_style(col, "opacity", "1");
                dom::set_style(col, "transform", "translateY(0)");
            }
        }
    };

    let on_scroll = reveal.clone();
    dom::add_window_listener("scroll", on_scroll);
    dom::add_window_listener("load", reveal);
}
