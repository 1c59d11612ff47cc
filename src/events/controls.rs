use crate::app::{spin, SharedApp};
use crate::constants::{CLOSE_BUTTON_ID, OPTION_INPUT_IDS, SPIN_BUTTON_ID, TOGGLE_TEXT_ID};
use crate::dom;
use crate::overlay;
use web_sys as web;

/// Spin and close buttons.
pub fn wire_buttons(app: &SharedApp, document: &web::Document) {
    let a = app.clone();
    dom::add_click_listener(document, SPIN_BUTTON_ID, move || spin(&a));

    let doc = document.clone();
    dom::add_click_listener(document, CLOSE_BUTTON_ID, move || overlay::hide_result(&doc));
}

/// Redraw slice labels whenever an option or the show-text toggle changes.
pub fn wire_label_inputs(app: &SharedApp, document: &web::Document) {
    for id in OPTION_INPUT_IDS {
        if let Some(el) = document.get_element_by_id(id) {
            let a = app.clone();
            dom::add_listener(el.as_ref(), "input", move |_ev: web::Event| {
                a.borrow().regenerate();
            });
        }
    }
    if let Some(el) = document.get_element_by_id(TOGGLE_TEXT_ID) {
        let a = app.clone();
        dom::add_listener(el.as_ref(), "change", move |_ev: web::Event| {
            log::debug!("[wheel] label text toggled");
            a.borrow().regenerate();
        });
    }
}
