//! Services owned by the firmware runtime.
//!
//! The keymap never scans the matrix, resolves layers or talks USB itself. It reads the default
//! layer through [`DefaultLayerSource`] and drives the keyboard through [`KeyboardHost`].

use crate::types::keycode::KeyCode;
use crate::types::layer_state::LayerState;

/// Read access to the layer engine's persistent default-layer bitmask.
pub trait DefaultLayerSource {
    /// Current default layer state. Exactly one bit is set on a running keyboard.
    fn default_layer_state(&self) -> LayerState;
}

/// A fixed snapshot of the default layer state.
impl DefaultLayerSource for LayerState {
    fn default_layer_state(&self) -> LayerState {
        *self
    }
}

/// Keyboard-level services of the firmware runtime.
pub trait KeyboardHost {
    /// Add a key to the report and send it.
    fn register_code(&mut self, keycode: KeyCode);

    /// Remove a key from the report and send it.
    fn unregister_code(&mut self, keycode: KeyCode);

    /// Release every held key and modifier, then send an empty report.
    fn clear_keyboard(&mut self);

    /// Reset the microcontroller into its USB bootloader. Never returns.
    fn bootloader_jump(&mut self) -> !;
}
