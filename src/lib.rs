#![cfg(target_arch = "wasm32")]
use crate::core::Wheel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod constants;
mod core;
mod dom;
mod events;
mod input;
mod intro;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wheel-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    intro::hide_safari_ui();
    intro::wire_intro(&document);
    intro::mark_chrome(&document);

    let wheel_el: web::HtmlElement = document
        .get_element_by_id(constants::WHEEL_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::WHEEL_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let app = Rc::new(RefCell::new(app::WheelApp::new(
        document.clone(),
        wheel_el,
        Wheel::default(),
    )));
    app.borrow().regenerate();
    log::info!(
        "[wheel] {} slices ready",
        app.borrow().wheel.config().slice_count
    );

    events::wire_input_handlers(&app, &document);
    events::wire_buttons(&app, &document);
    events::wire_label_inputs(&app, &document);
    events::wire_checkbox_enter(&document);
    events::wire_global_keypress(&document);

    Ok(())
}
