//! # ErgoDox keymap types
//!
//! Vocabulary shared by the keymap and its callbacks.
//!
//! - [`keycode`] - HID usage ids used by the layout
//! - [`modifier`] - 5-bit modifier combinations
//! - [`action`] - Keymap cells and the actions stored in Fn slots
//! - [`layer_state`] - Active layer bitmask
//! - [`layer_led`] - On/off pattern of the three right-hand LEDs

#![no_std]

pub mod action;
pub mod keycode;
pub mod layer_led;
pub mod layer_state;
pub mod modifier;
