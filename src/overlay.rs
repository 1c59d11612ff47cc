use crate::constants::{
    HIDDEN_CLASS, INTRO_OVERLAY_ID, RESULT_OVERLAY_ID, RESULT_TEXT_ID, SKIP_BUTTON_ID,
};
use wasm_bindgen::JsCast;
use web_sys as web;

fn result_overlay(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(RESULT_OVERLAY_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Put `text` into the result box and show the overlay.
#[inline]
pub fn show_result(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(RESULT_TEXT_ID) {
        el.set_text_content(Some(text));
    }
    if let Some(el) = result_overlay(document) {
        _ = el.style().set_property("display", "flex");
    }
}

#[inline]
pub fn hide_result(document: &web::Document) {
    if let Some(el) = result_overlay(document) {
        _ = el.style().set_property("display", "none");
    }
}

#[inline]
pub fn is_result_open(document: &web::Document) -> bool {
    result_overlay(document)
        .and_then(|el| el.style().get_property_value("display").ok())
        .map(|d| d == "flex")
        .unwrap_or(false)
}

/// Hide the intro overlay and its skip button.
#[inline]
pub fn hide_intro(document: &web::Document) {
    for id in [INTRO_OVERLAY_ID, SKIP_BUTTON_ID] {
        if let Some(el) = document.get_element_by_id(id) {
            _ = el.class_list().add_1(HIDDEN_CLASS);
        }
    }
}
