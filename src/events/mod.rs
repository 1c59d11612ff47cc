pub mod controls;
pub mod keyboard;
pub mod pointer;

pub use controls::{wire_buttons, wire_label_inputs};
pub use keyboard::{wire_checkbox_enter, wire_global_keypress};
pub use pointer::wire_input_handlers;
