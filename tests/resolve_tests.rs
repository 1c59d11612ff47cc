// Host-side tests for slice lookup, option labels and result resolution.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod resolve {
    include!("../src/core/resolve.rs");
}
mod wheel {
    include!("../src/core/wheel.rs");
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use resolve::*;
use wheel::Wheel;

const N: usize = 11;

#[test]
fn unrotated_wheel_shows_first_slice() {
    assert_eq!(slice_at(0.0, N), Some(0));
    assert_eq!(slice_at(360.0, N), Some(0));
    assert_eq!(slice_at(-360.0 * 3.0, N), Some(0));
}

#[test]
fn clockwise_rotation_brings_later_slices_up() {
    // turning clockwise by less than a slice uncovers the last slice
    assert_eq!(slice_at(10.0, N), Some(10));
    // turning counter-clockwise moves into slice 0's arc
    assert_eq!(slice_at(-10.0, N), Some(0));
    assert_eq!(slice_at(-40.0, N), Some(1));
}

#[test]
fn every_slice_center_resolves_to_that_slice() {
    let a = slice_angle(N);
    for turns in [-3.0, 0.0, 1.0, 17.0] {
        for i in 0..N {
            let rotation = -(i as f64 + 0.5) * a + 360.0 * turns;
            assert_eq!(slice_at(rotation, N), Some(i), "turns {} slice {}", turns, i);
        }
    }
}

#[test]
fn lookup_never_leaves_range() {
    assert_eq!(slice_at(1e-20, N), Some(N - 1));
    assert_eq!(slice_at(-1e-20, N), Some(0));
    for k in 0..10_000 {
        let r = k as f64 * 0.731 - 3000.0;
        let i = slice_at(r, N).unwrap();
        assert!(i < N);
    }
}

#[test]
fn nothing_to_hit() {
    assert_eq!(slice_at(f64::NAN, N), None);
    assert_eq!(slice_at(f64::INFINITY, N), None);
    assert_eq!(slice_at(12.0, 0), None);
}

#[test]
fn option_inputs_are_trimmed_with_fallbacks() {
    let opts = OptionSet::from_inputs(&["  Pizza ", "", "   "]);
    assert_eq!(opts.labels(), &["Pizza", "No", "Maybe"]);

    let opts = OptionSet::from_inputs(&[String::new(), "Tacos".to_string()]);
    assert_eq!(opts.labels(), &["Yes", "Tacos", "Maybe"]);

    let empty: [&str; 0] = [];
    assert_eq!(OptionSet::from_inputs(&empty), OptionSet::default());
    assert_eq!(OptionSet::default().labels(), &["Yes", "No", "Maybe"]);
}

#[test]
fn slices_cycle_through_options() {
    let opts = OptionSet::from_inputs(&["A", "B", "C"]);
    let labels = opts.slice_labels(N);
    assert_eq!(labels.len(), N);
    for (i, label) in labels.iter().enumerate() {
        assert_eq!(*label, ["A", "B", "C"][i % 3]);
        assert_eq!(opts.label(i), *label);
    }
    // 11 slices: the last one wraps to the second option
    assert_eq!(labels[10], "B");
}

#[test]
fn slice_transforms_step_evenly() {
    assert_eq!(slice_transform(0, N), "rotate(0deg)");
    assert_eq!(slice_transform(2, 4), "rotate(180deg)");
    let a = slice_angle(N);
    assert!((a * N as f64 - 360.0).abs() < 1e-9);
}

#[test]
fn resolved_text_uses_label() {
    let mut r = Resolver::new(N);
    let opts = OptionSet::from_inputs(&["Left", "Right", "Stay"]);
    let rotation = -(4.5) * slice_angle(N);
    match r.resolve(rotation, &opts) {
        Resolution::Resolved { slice, label, text } => {
            assert_eq!(slice, 4);
            assert_eq!(label, "Right");
            assert_eq!(text, "Result: Right");
        }
        Resolution::NoHit => panic!("expected a hit"),
    }
    assert_eq!(r.selected(), Some(4));
}

#[test]
fn selection_is_replaced_or_cleared() {
    let mut r = Resolver::new(N);
    let opts = OptionSet::default();
    r.resolve(-0.5 * slice_angle(N), &opts);
    assert_eq!(r.selected(), Some(0));
    r.resolve(-7.5 * slice_angle(N), &opts);
    assert_eq!(r.selected(), Some(7));

    assert_eq!(r.resolve(f64::NAN, &opts), Resolution::NoHit);
    assert_eq!(r.selected(), None);
}

#[test]
fn default_options_spin_lands_on_a_default_result() {
    let allowed = ["Result: Yes", "Result: No", "Result: Maybe"];
    let opts = OptionSet::from_inputs(&["", "", ""]);
    let mut r = Resolver::new(N);
    let mut w = Wheel::default();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = w.spin(&mut rng, seed as f64 * 10_000.0).unwrap();
        let settled = w.poll(seed as f64 * 10_000.0 + plan.delay_ms).unwrap();
        match r.resolve(settled.rotation, &opts) {
            Resolution::Resolved { text, .. } => assert!(allowed.contains(&text.as_str())),
            Resolution::NoHit => panic!("spin should always land on a slice"),
        }
    }
}

#[test]
fn result_text_format() {
    assert_eq!(result_text("Maybe"), "Result: Maybe");
}
