// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::DVec2;
use input::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn rect_center_is_box_midpoint() {
    let c = rect_center(100.0, 50.0, 300.0, 200.0);
    assert_eq!(c, DVec2::new(250.0, 150.0));
}

#[test]
fn pointer_angle_uses_screen_axes() {
    let c = DVec2::new(100.0, 100.0);
    // right of center
    assert!(approx(pointer_angle_deg(c, DVec2::new(150.0, 100.0)), 0.0));
    // below center: y grows downwards, so this is clockwise
    assert!(approx(pointer_angle_deg(c, DVec2::new(100.0, 150.0)), 90.0));
    // above center
    assert!(approx(pointer_angle_deg(c, DVec2::new(100.0, 20.0)), -90.0));
    // left of center
    assert!(approx(pointer_angle_deg(c, DVec2::new(10.0, 100.0)).abs(), 180.0));
    assert!(approx(pointer_angle_deg(c, DVec2::new(200.0, 200.0)), 45.0));
}

#[test]
fn only_single_touch_drives_the_wheel() {
    assert!(is_single_touch(1));
    assert!(!is_single_touch(0));
    assert!(!is_single_touch(2));
}

#[test]
fn enter_closes_open_result() {
    assert_eq!(
        enter_action("Enter", false, true),
        Some(EnterAction::CloseResult)
    );
}

#[test]
fn enter_spins_when_result_closed() {
    assert_eq!(enter_action("Enter", false, false), Some(EnterAction::Spin));
}

#[test]
fn focused_checkbox_swallows_enter() {
    assert_eq!(enter_action("Enter", true, true), None);
    assert_eq!(enter_action("Enter", true, false), None);
}

#[test]
fn other_keys_do_nothing() {
    assert_eq!(enter_action(" ", false, false), None);
    assert_eq!(enter_action("enter", false, true), None);
    assert_eq!(enter_action("", false, false), None);
}

#[test]
fn chrome_needs_both_user_agent_and_vendor() {
    let chrome_ua = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
    assert!(is_chrome(chrome_ua, "Google Inc."));
    // UA alone is not enough
    assert!(!is_chrome(chrome_ua, ""));
    assert!(!is_chrome(
        "Mozilla/5.0 (Macintosh) AppleWebKit/605.1.15 Version/17.0 Safari/605.1.15",
        "Apple Computer, Inc."
    ));
    assert!(!is_chrome("Mozilla/5.0 Gecko/20100101 Firefox/128.0", ""));
}
