use glam::DVec2;

// ---------------- Pointer geometry ----------------
#[inline]
pub fn rect_center(left: f64, top: f64, width: f64, height: f64) -> DVec2 {
    DVec2::new(left + width / 2.0, top + height / 2.0)
}

/// Angle of `point` around `center` in degrees, screen coordinates
/// (y grows downwards, so positive angles are clockwise).
#[inline]
pub fn pointer_angle_deg(center: DVec2, point: DVec2) -> f64 {
    let d = point - center;
    d.y.atan2(d.x).to_degrees()
}

/// Only single-finger gestures drive the wheel.
#[inline]
pub fn is_single_touch(touch_count: u32) -> bool {
    touch_count == 1
}

// ---------------- Keyboard ----------------
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnterAction {
    CloseResult,
    Spin,
}

/// What a global Enter press does. A focused label checkbox handles Enter
/// itself, so nothing happens here in that case.
#[inline]
pub fn enter_action(key: &str, checkbox_focused: bool, result_open: bool) -> Option<EnterAction> {
    if key != "Enter" || checkbox_focused {
        return None;
    }
    Some(if result_open {
        EnterAction::CloseResult
    } else {
        EnterAction::Spin
    })
}

// ---------------- Browser detection ----------------
#[inline]
pub fn is_chrome(user_agent: &str, vendor: &str) -> bool {
    user_agent.contains("Chrome") && vendor.contains("Google Inc")
}
