use crate::constants::{CLOSE_BUTTON_ID, LABEL_CHECKBOX_SELECTOR, SPIN_BUTTON_ID};
use crate::dom;
use crate::input::{enter_action, EnterAction};
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

fn label_checkboxes(document: &web::Document) -> Vec<web::HtmlInputElement> {
    let Ok(list) = document.query_selector_all(LABEL_CHECKBOX_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlInputElement>().ok())
        .collect()
}

fn checkbox_focused(document: &web::Document) -> bool {
    let Some(active) = document.active_element() else {
        return false;
    };
    label_checkboxes(document)
        .iter()
        .any(|cb| AsRef::<web::Element>::as_ref(cb) == &active)
}

fn click(document: &web::Document, id: &str) {
    if let Some(btn) = dom::element_by_id::<web::HtmlElement>(document, id) {
        btn.click();
    }
}

pub fn handle_global_keypress(ev: &web::KeyboardEvent, document: &web::Document) {
    let action = enter_action(
        &ev.key(),
        checkbox_focused(document),
        overlay::is_result_open(document),
    );
    match action {
        Some(EnterAction::CloseResult) => {
            log::debug!("[keys] enter closes result");
            click(document, CLOSE_BUTTON_ID);
        }
        // a disabled spin button swallows the click
        Some(EnterAction::Spin) => click(document, SPIN_BUTTON_ID),
        None => {}
    }
}

pub fn wire_global_keypress(document: &web::Document) {
    let doc = document.clone();
    dom::add_listener(document.as_ref(), "keypress", move |ev: web::KeyboardEvent| {
        handle_global_keypress(&ev, &doc);
    });
}

/// Enter on a focused label checkbox toggles it like a click would, and
/// lets `change` listeners know.
pub fn wire_checkbox_enter(document: &web::Document) {
    for checkbox in label_checkboxes(document) {
        let cb = checkbox.clone();
        dom::add_listener(checkbox.as_ref(), "keypress", move |ev: web::KeyboardEvent| {
            if ev.key() != "Enter" {
                return;
            }
            ev.prevent_default();
            cb.set_checked(!cb.checked());
            let init = web::EventInit::new();
            init.set_bubbles(true);
            if let Ok(change) = web::Event::new_with_event_init_dict("change", &init) {
                _ = cb.dispatch_event(&change);
            }
        });
    }
}
