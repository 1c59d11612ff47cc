// Wheel geometry, motion and overlay timing constants.
//
// Durations are milliseconds and angles are degrees unless the name says
// otherwise. The CSS strings must stay in step with the durations they
// describe, since the settle timers assume the transition has finished.

// Layout
pub const SLICE_COUNT: usize = 11;
pub const OPTION_COUNT: usize = 3;
pub const FALLBACK_OPTIONS: [&str; OPTION_COUNT] = ["Yes", "No", "Maybe"];

// Drag release
pub const MOMENTUM_TIME_CONSTANT_MS: f64 = 600.0; // velocity (deg/ms) * this = coast distance
pub const DRAG_SETTLE_MS: f64 = 2000.0;
pub const DRAG_TRANSITION_CSS: &str = "transform 2s cubic-bezier(0.33,1,0.68,1)";

// Button spin
pub const SPIN_EXTRA_TURNS: u32 = 6;
pub const SPIN_DURATION_MS: f64 = 4000.0;
pub const SPIN_SETTLE_BUFFER_MS: f64 = 100.0; // transition must be visually done before reading
pub const SPIN_TRANSITION_CSS: &str = "transform 4s ease-out";

pub const NO_TRANSITION_CSS: &str = "none";

// Intro overlay
pub const INTRO_AUTO_DISMISS_MS: i32 = 2500;
pub const SAFARI_SCROLL_DELAY_MS: i32 = 50;
pub const DISTORTION_DURATION_MS: f64 = 1000.0;
pub const DISTORTION_START_FREQUENCY: f64 = 0.01;

// DOM hooks
pub const WHEEL_ID: &str = "wheel";
pub const SPIN_BUTTON_ID: &str = "spinBtn";
pub const RESULT_OVERLAY_ID: &str = "resultOverlay";
pub const RESULT_TEXT_ID: &str = "resultText";
pub const CLOSE_BUTTON_ID: &str = "closeBtn";
pub const TOGGLE_TEXT_ID: &str = "toggleText";
pub const OPTION_INPUT_IDS: [&str; OPTION_COUNT] = ["option1", "option2", "option3"];
pub const INTRO_OVERLAY_ID: &str = "startAnimation";
pub const INTRO_VIDEO_ID: &str = "introVideo";
pub const SKIP_BUTTON_ID: &str = "skipBtn";
pub const DISTORTION_SELECTOR: &str = "#distort feTurbulence";
pub const LABEL_CHECKBOX_SELECTOR: &str = ".label-container input[type='checkbox']";

// CSS classes
pub const SLICE_CLASS: &str = "slice";
pub const SLICE_TEXT_CLASS: &str = "text-wrapper";
pub const SELECTED_CLASS: &str = "selected";
pub const HIDDEN_CLASS: &str = "hidden";
pub const CHROME_CLASS: &str = "chrome-only";
