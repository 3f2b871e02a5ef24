//! Keymap cells and the actions behind them.
//!
//! A keymap cell ([`KeyAction`]) is either a plain keycode, a transparent/empty
//! marker, or an index into the Fn-action table. The Fn-action table holds the
//! non-trivial [`Action`]s: modifier combos, layer control, macros and functions.

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// An action that an Fn slot resolves to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// A normal key stroke.
    Key(KeyCode),
    /// Key stroke with modifier combination held.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while the key is held
    LayerMomentary(u8),
    /// Set default layer
    DefaultLayer(u8),
    /// Hold for the modifiers, tap repeatedly to lock them until tapped again.
    ModifierTapToggle(ModifierCombination),
    /// Play the macro with the given id
    TriggerMacro(u8),
    /// Run the user function with the given id
    Function(u8),
}

impl Action {
    /// The layer this action switches to, if it is a layer action.
    pub const fn target_layer(self) -> Option<u8> {
        match self {
            Action::LayerMomentary(layer) | Action::DefaultLayer(layer) => Some(layer),
            _ => None,
        }
    }
}

/// A KeyAction is what a keymap cell holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A plain keycode.
    Key(KeyCode),
    /// Indirection into the Fn-action table, `Fn(n)` is `FNn`.
    Fn(u8),
}

impl KeyAction {
    pub const fn is_transparent(&self) -> bool {
        matches!(self, KeyAction::Transparent)
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }

    /// The Fn slot this cell references, if any.
    pub const fn fn_slot(&self) -> Option<u8> {
        match self {
            KeyAction::Fn(slot) => Some(*slot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_target_layer() {
        assert_eq!(Action::DefaultLayer(3).target_layer(), Some(3));
        assert_eq!(Action::LayerMomentary(2).target_layer(), Some(2));
        assert_eq!(Action::Key(KeyCode::A).target_layer(), None);
        assert_eq!(Action::Function(0).target_layer(), None);
    }

    #[test]
    fn test_fn_slot() {
        assert_eq!(KeyAction::Fn(12).fn_slot(), Some(12));
        assert_eq!(KeyAction::Key(KeyCode::F12).fn_slot(), None);
        assert_eq!(KeyAction::Transparent.fn_slot(), None);
    }
}
