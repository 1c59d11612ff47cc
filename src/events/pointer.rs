use crate::app::{end_drag, SharedApp};
use crate::dom;
use crate::input;
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn mouse_point(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Client position of the only touch, `None` for multi-touch.
#[inline]
fn single_touch_point(ev: &web::TouchEvent) -> Option<DVec2> {
    let touches = ev.touches();
    if !input::is_single_touch(touches.length()) {
        return None;
    }
    touches
        .get(0)
        .map(|t| DVec2::new(t.client_x() as f64, t.client_y() as f64))
}

/// Drag starts on the wheel; moves and releases are tracked on the whole
/// document so the pointer can leave the wheel mid-gesture.
pub fn wire_input_handlers(app: &SharedApp, document: &web::Document) {
    let wheel_target: web::EventTarget = app.borrow().view.element().clone().unchecked_into();
    let doc_target: &web::EventTarget = document.as_ref();

    wire_mouse(app, &wheel_target, doc_target);
    wire_touch(app, &wheel_target, doc_target);
}

fn wire_mouse(app: &SharedApp, wheel: &web::EventTarget, doc: &web::EventTarget) {
    let a = app.clone();
    dom::add_listener(wheel, "mousedown", move |ev: web::MouseEvent| {
        a.borrow_mut().begin_drag(mouse_point(&ev));
    });

    let a = app.clone();
    dom::add_listener(doc, "mousemove", move |ev: web::MouseEvent| {
        a.borrow_mut().drag_to(mouse_point(&ev));
    });

    let a = app.clone();
    dom::add_listener(doc, "mouseup", move |_ev: web::MouseEvent| {
        end_drag(&a);
    });
}

fn wire_touch(app: &SharedApp, wheel: &web::EventTarget, doc: &web::EventTarget) {
    let a = app.clone();
    dom::add_listener_with_options(wheel, "touchstart", true, false, move |ev: web::TouchEvent| {
        if let Some(p) = single_touch_point(&ev) {
            a.borrow_mut().begin_drag(p);
        }
    });

    let a = app.clone();
    dom::add_listener_with_options(doc, "touchmove", true, false, move |ev: web::TouchEvent| {
        if let Some(p) = single_touch_point(&ev) {
            a.borrow_mut().drag_to(p);
        }
    });

    let a = app.clone();
    dom::add_listener_with_options(doc, "touchend", true, false, move |_ev: web::TouchEvent| {
        end_drag(&a);
    });
}
