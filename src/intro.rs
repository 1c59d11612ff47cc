//! Intro video overlay, its dismiss animation and the small page-level
//! tweaks that run once at startup.

use crate::constants::{
    CHROME_CLASS, DISTORTION_SELECTOR, INTRO_AUTO_DISMISS_MS, INTRO_VIDEO_ID,
    SAFARI_SCROLL_DELAY_MS, SKIP_BUTTON_ID,
};
use crate::core::{base_frequency_attr, distortion_frequency, Clock, InstantClock, IntroOverlay};
use crate::dom;
use crate::input;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire_intro(document: &web::Document) {
    let state = Rc::new(RefCell::new(IntroOverlay::default()));

    if let Some(video) = dom::element_by_id::<web::HtmlVideoElement>(document, INTRO_VIDEO_ID) {
        wire_video(&video, &state, document);
    }

    let (s, doc) = (state.clone(), document.clone());
    dom::set_timeout(INTRO_AUTO_DISMISS_MS, move || dismiss(&s, &doc));

    let (s, doc) = (state, document.clone());
    dom::add_click_listener(document, SKIP_BUTTON_ID, move || dismiss(&s, &doc));
}

fn wire_video(video: &web::HtmlVideoElement, state: &Rc<RefCell<IntroOverlay>>, document: &web::Document) {
    play(video);

    // iOS only allows playback after a user gesture
    let v = video.clone();
    dom::add_listener_with_options(document.as_ref(), "touchstart", false, true, move |_ev: web::Event| {
        play(&v);
    });

    let (s, doc) = (state.clone(), document.clone());
    dom::add_listener(video.as_ref(), "ended", move |_ev: web::Event| dismiss(&s, &doc));

    let v = video.clone();
    dom::add_listener(video.as_ref(), "click", move |_ev: web::Event| enter_fullscreen(&v));
}

fn play(video: &web::HtmlVideoElement) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[intro] playback refused: {:?}", e);
            }
        }),
        Err(e) => log::debug!("[intro] play() failed: {:?}", e),
    }
}

/// Safari's video fullscreen; other browsers don't expose it.
fn enter_fullscreen(video: &web::HtmlVideoElement) {
    let Ok(f) = js_sys::Reflect::get(video, &JsValue::from_str("webkitEnterFullscreen")) else {
        return;
    };
    if let Ok(f) = f.dyn_into::<js_sys::Function>() {
        _ = f.call0(video);
    }
}

fn dismiss(state: &Rc<RefCell<IntroOverlay>>, document: &web::Document) {
    if !state.borrow_mut().dismiss() {
        return;
    }
    log::info!("[intro] overlay dismissed");
    overlay::hide_intro(document);
    animate_distortion(document);
}

/// Fade the turbulence filter out over a second, once.
fn animate_distortion(document: &web::Document) {
    let Ok(Some(turbulence)) = document.query_selector(DISTORTION_SELECTOR) else {
        return;
    };
    let clock = InstantClock;
    let start = clock.now_ms();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let (value, done) = distortion_frequency(clock.now_ms() - start);
        _ = turbulence.set_attribute("baseFrequency", &base_frequency_attr(value));
        if !done {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Nudge mobile Safari into hiding its address bar.
pub fn hide_safari_ui() {
    dom::set_timeout(SAFARI_SCROLL_DELAY_MS, || {
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, 1.0);
        }
    });
}

pub fn mark_chrome(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let nav = window.navigator();
    let ua = nav.user_agent().unwrap_or_default();
    // web-sys has no binding for `navigator.vendor`
    let vendor = js_sys::Reflect::get(&nav, &JsValue::from_str("vendor"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    if input::is_chrome(&ua, &vendor) {
        if let Some(root) = document.document_element() {
            _ = root.class_list().add_1(CHROME_CLASS);
        }
    }
}
