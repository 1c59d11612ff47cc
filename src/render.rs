//! DOM side of the wheel: slice elements, the rotation transform and the
//! selected-slice marker.

use crate::constants::{SELECTED_CLASS, SLICE_CLASS, SLICE_TEXT_CLASS};
use crate::core::{slice_transform, transform_css, OptionSet, Transition};
use crate::input;
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct WheelView {
    document: web::Document,
    wheel: web::HtmlElement,
}

impl WheelView {
    pub fn new(document: web::Document, wheel: web::HtmlElement) -> Self {
        Self { document, wheel }
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlElement {
        &self.wheel
    }

    /// Visual center of the wheel in client coordinates.
    pub fn center(&self) -> DVec2 {
        let rect = self.wheel.get_bounding_client_rect();
        input::rect_center(rect.left(), rect.top(), rect.width(), rect.height())
    }

    /// Transition first, so the transform change picks it up.
    pub fn apply(&self, rotation: f64, transition: Transition) {
        let style = self.wheel.style();
        _ = style.set_property("transition", transition.css());
        _ = style.set_property("transform", &transform_css(rotation));
    }

    #[inline]
    pub fn set_rotation(&self, rotation: f64) {
        _ = self
            .wheel
            .style()
            .set_property("transform", &transform_css(rotation));
    }

    /// Throw away the slice elements and draw `slice_count` fresh ones.
    pub fn rebuild_slices(&self, options: &OptionSet, slice_count: usize, show_text: bool) {
        self.wheel.set_inner_html("");
        for (i, label) in options.slice_labels(slice_count).into_iter().enumerate() {
            let Ok(slice) = self.document.create_element("div") else {
                continue;
            };
            slice.set_class_name(SLICE_CLASS);
            if let Some(slice) = slice.dyn_ref::<web::HtmlElement>() {
                _ = slice
                    .style()
                    .set_property("transform", &slice_transform(i, slice_count));
            }
            if show_text {
                if let (Ok(wrapper), Ok(span)) = (
                    self.document.create_element("div"),
                    self.document.create_element("span"),
                ) {
                    wrapper.set_class_name(SLICE_TEXT_CLASS);
                    span.set_text_content(Some(label));
                    _ = wrapper.append_child(&span);
                    _ = slice.append_child(&wrapper);
                }
            }
            _ = self.wheel.append_child(&slice);
        }
    }

    /// Slice elements currently in the wheel, in draw order.
    pub fn slices(&self) -> Vec<web::Element> {
        let Ok(list) = self.wheel.query_selector_all(&format!(".{}", SLICE_CLASS)) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web::Element>().ok())
            .collect()
    }

    pub fn clear_selection(&self) {
        for slice in self.slices() {
            _ = slice.class_list().remove_1(SELECTED_CLASS);
        }
    }

    /// Mark slice `index`; false when no such element is rendered.
    pub fn mark_selected(&self, index: usize) -> bool {
        match self.slices().get(index) {
            Some(slice) => {
                _ = slice.class_list().add_1(SELECTED_CLASS);
                true
            }
            None => false,
        }
    }
}
