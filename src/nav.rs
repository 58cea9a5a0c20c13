use crate::constants::*;
use crate::dom;
use web_sys as web;

/// Open/close buttons for the mobile navbar menu.
pub fn wire_nav_toggle(document: &web::Document) {
    let Some(menu) = document.get_element_by_id(NAV_MENU_ID) else {
        return;
    };

    let menu_open = menu.clone();
    dom::add_click_listener(document, NAV_TOGGLE_ID, move || {
        _ = menu_open.class_list().add_1(NAV_SHOW_CLASS);
    });

    dom::add_click_listener(document, NAV_CLOSE_ID, move || {
        _ = menu.class_list().remove_1(NAV_SHOW_CLASS);
    });
}
