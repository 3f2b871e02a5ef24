//! # ErgoDox keymap
//!
//! A four-layer ErgoDox layout and the glue callbacks the firmware runtime calls into:
//!
//! - [`keymap`] - the layer table, the 32-slot Fn-action table and its build-time validation
//! - [`layer_led`] - layer indicator LEDs and the layer-change hooks
//! - [`keyboard_macro`] - macro dispatch and playback
//! - [`function`] - user function dispatch (the bootloader key)
//! - [`host`] - the firmware services these callbacks consume
//!
//! Matrix scanning, layer resolution, USB reporting and the bootloader itself belong to the
//! firmware runtime, which is reached only through the traits in [`host`].
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub mod config;
pub mod event;
pub mod function;
pub mod host;
pub mod keyboard_macro;
pub mod keymap;
pub mod layer_led;
pub mod layout_macro;

pub use ergodox_keymap_types as types;
