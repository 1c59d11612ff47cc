use crate::constants::{OPTION_INPUT_IDS, SPIN_BUTTON_ID, TOGGLE_TEXT_ID};
use crate::core::{
    Clock, InstantClock, OptionSet, Resolution, Resolver, SettlePlan, Settled, Wheel,
};
use crate::dom;
use crate::input;
use crate::overlay;
use crate::render::WheelView;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedApp = Rc<RefCell<WheelApp>>;

/// Everything the listeners share: rotation state, the resolver and the
/// elements they read from or write to. Optional controls stay `None` when
/// the page doesn't have them.
pub struct WheelApp {
    pub wheel: Wheel,
    pub resolver: Resolver,
    pub view: WheelView,
    pub clock: InstantClock,
    document: web::Document,
    spin_button: Option<web::HtmlButtonElement>,
    toggle_text: Option<web::HtmlInputElement>,
    option_inputs: Vec<Option<web::HtmlInputElement>>,
}

impl WheelApp {
    pub fn new(document: web::Document, wheel_el: web::HtmlElement, wheel: Wheel) -> Self {
        let resolver = Resolver::new(wheel.config().slice_count);
        Self {
            spin_button: dom::element_by_id(&document, SPIN_BUTTON_ID),
            toggle_text: dom::element_by_id(&document, TOGGLE_TEXT_ID),
            option_inputs: OPTION_INPUT_IDS
                .iter()
                .map(|id| dom::element_by_id(&document, id))
                .collect(),
            view: WheelView::new(document.clone(), wheel_el),
            document,
            wheel,
            resolver,
            clock: InstantClock,
        }
    }

    pub fn options(&self) -> OptionSet {
        let values: Vec<String> = self
            .option_inputs
            .iter()
            .map(|inp| inp.as_ref().map(|i| i.value()).unwrap_or_default())
            .collect();
        OptionSet::from_inputs(values.as_slice())
    }

    #[inline]
    pub fn show_text(&self) -> bool {
        self.toggle_text.as_ref().is_some_and(|t| t.checked())
    }

    pub fn regenerate(&self) {
        let slice_count = self.wheel.config().slice_count;
        self.view
            .rebuild_slices(&self.options(), slice_count, self.show_text());
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        if let Some(btn) = &self.spin_button {
            btn.set_disabled(!enabled);
        }
    }

    fn pointer_angle(&self, point: DVec2) -> f64 {
        input::pointer_angle_deg(self.view.center(), point)
    }

    pub fn begin_drag(&mut self, point: DVec2) {
        let angle = self.pointer_angle(point);
        let now = self.clock.now_ms();
        if let Some(transition) = self.wheel.begin_drag(angle, now) {
            self.view.apply(self.wheel.rotation(), transition);
            log::debug!("[drag] start at {:.1}deg", angle);
        }
    }

    pub fn drag_to(&mut self, point: DVec2) {
        if !self.wheel.is_dragging() {
            return;
        }
        let angle = self.pointer_angle(point);
        let now = self.clock.now_ms();
        if let Some(rotation) = self.wheel.drag_to(angle, now) {
            self.view.set_rotation(rotation);
        }
    }

    /// Read the result off the settled wheel.
    pub fn resolve(&mut self, settled: Settled) {
        self.view.clear_selection();
        let options = self.options();
        match self.resolver.resolve(settled.rotation, &options) {
            Resolution::Resolved { slice, text, .. } if self.view.mark_selected(slice) => {
                log::info!("[result] slice {} -> {}", slice, text);
                overlay::show_result(&self.document, &text);
            }
            _ => {
                self.resolver.clear();
                log::debug!("[result] nothing under the pointer");
            }
        }
        self.set_trigger_enabled(self.wheel.trigger_enabled());
    }
}

/// Apply a settle plan and come back when the transition is over.
pub fn schedule_settle(app: &SharedApp, plan: SettlePlan) {
    app.borrow().view.apply(plan.rotation, plan.transition);
    let app = app.clone();
    dom::set_timeout(plan.delay_ms.ceil() as i32, move || {
        let mut a = app.borrow_mut();
        if let Some(settled) = a.wheel.settle(plan.token) {
            a.resolve(settled);
        }
    });
}

pub fn end_drag(app: &SharedApp) {
    let plan = {
        let mut a = app.borrow_mut();
        let now = a.clock.now_ms();
        a.wheel.end_drag(now)
    };
    if let Some(plan) = plan {
        log::debug!("[drag] release, coasting to {:.1}deg", plan.rotation);
        schedule_settle(app, plan);
    }
}

pub fn spin(app: &SharedApp) {
    let plan = {
        let mut a = app.borrow_mut();
        let now = a.clock.now_ms();
        let plan = a.wheel.spin(&mut rand::thread_rng(), now);
        if plan.is_some() {
            a.set_trigger_enabled(false);
        }
        plan
    };
    match plan {
        Some(plan) => {
            log::info!("[spin] target {:.1}deg", plan.rotation);
            schedule_settle(app, plan);
        }
        None => log::debug!("[spin] ignored, wheel busy"),
    }
}
