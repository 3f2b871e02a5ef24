//! The ErgoDox layout.
//!
//! Layer 0: QWERTY, geared towards an OS X compliant layout, with easy access to brackets.
//! Layer 1: Same as layer 0, using Colemak.
//! Layer 2: Arrow keys, function keys, media keys and IDE shortcuts.
//! Layer 3: Gaming layout for Windows, most important keys on the left hand.
//!
//! Layers 0, 1 and 3 are default layers, switched with the `DF_*` keys. Layer 2 is pushed while
//! its thumb key is held.

use strum::FromRepr;

use crate::ergodox_layer;
use crate::fk;
use crate::function::FunctionId;
use crate::keyboard_macro::MacroId;
use crate::types::action::{Action, KeyAction};
use crate::types::keycode::KeyCode;
use crate::types::modifier::ModifierCombination;

pub const ROW: usize = 6;
pub const COL: usize = 14;
pub const NUM_LAYER: usize = 4;

/// Max number of Fn keys, `FN0` ~ `FN31`
pub const FN_ACTION_SLOTS: usize = 32;

pub type Keymap = [[[KeyAction; COL]; ROW]; NUM_LAYER];
pub type FnActions = [Option<Action>; FN_ACTION_SLOTS];

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Qwerty = 0,
    Colemak = 1,
    Function = 2,
    Gaming = 3,
}

impl Layer {
    pub const fn name(self) -> &'static str {
        match self {
            Layer::Qwerty => "qwerty",
            Layer::Colemak => "colemak",
            Layer::Function => "function",
            Layer::Gaming => "gaming",
        }
    }
}

// Fn keys used in the layout
const DF_QWERTY: KeyAction = fk!(0);
const DF_COLEMAK: KeyAction = fk!(1);
const DF_GAMING: KeyAction = fk!(3);
const MO_COLEMAK: KeyAction = fk!(11);
const MO_FUNCTION: KeyAction = fk!(12);
const SHADOW_SAVE: KeyAction = fk!(20);
const SHADOW_REC: KeyAction = fk!(21);
const DQUO: KeyAction = fk!(22);
const COLN: KeyAction = fk!(23);
const GOOD_GAME: KeyAction = fk!(24);
const TEST_CLASS: KeyAction = fk!(25);
const TEST_AGAIN: KeyAction = fk!(26);
const SHIFT_TT: KeyAction = fk!(27);
const TEENSY: KeyAction = fk!(31);

const HYPER_LESS_SHIFT: ModifierCombination = ModifierCombination::LCTRL
    .union(ModifierCombination::LALT)
    .union(ModifierCombination::LGUI);

/// Fn action table. Unlisted slots are empty and must not be referenced by the keymap.
pub const FN_ACTIONS: FnActions = {
    let mut fn_actions: FnActions = [None; FN_ACTION_SLOTS];

    // Switch default layer
    fn_actions[0] = Some(Action::DefaultLayer(Layer::Qwerty as u8));
    fn_actions[1] = Some(Action::DefaultLayer(Layer::Colemak as u8));
    fn_actions[2] = Some(Action::DefaultLayer(Layer::Function as u8));
    fn_actions[3] = Some(Action::DefaultLayer(Layer::Gaming as u8));

    // Push layer while held
    fn_actions[11] = Some(Action::LayerMomentary(Layer::Colemak as u8));
    fn_actions[12] = Some(Action::LayerMomentary(Layer::Function as u8));

    // Shadow play: save last X minutes, toggle manual recording
    fn_actions[20] = Some(Action::KeyWithModifier(KeyCode::F10, ModifierCombination::LALT));
    fn_actions[21] = Some(Action::KeyWithModifier(KeyCode::F9, ModifierCombination::LALT));
    // `"` and `:`
    fn_actions[22] = Some(Action::KeyWithModifier(KeyCode::Quote, ModifierCombination::LSHIFT));
    fn_actions[23] = Some(Action::KeyWithModifier(KeyCode::Semicolon, ModifierCombination::LSHIFT));
    fn_actions[24] = Some(Action::TriggerMacro(MacroId::GoodGame as u8));
    // Xcode: test class, test again
    fn_actions[25] = Some(Action::KeyWithModifier(KeyCode::U, HYPER_LESS_SHIFT));
    fn_actions[26] = Some(Action::KeyWithModifier(KeyCode::G, HYPER_LESS_SHIFT));
    fn_actions[27] = Some(Action::ModifierTapToggle(ModifierCombination::LSHIFT));
    fn_actions[28] = Some(Action::KeyWithModifier(KeyCode::Backslash, ModifierCombination::LSHIFT));

    fn_actions[31] = Some(Action::Function(FunctionId::TeensyKey as u8));

    fn_actions
};

#[rustfmt::skip]
pub const DEFAULT_KEYMAP: Keymap = [
    /*
     * Layer 0: QWERTY
     *
     * ,--------------------------------------------------.           ,--------------------------------------------------.
     * |  Esc   |   1  |   2  |   3  |   4  |   5  |  `   |           |  -   |   6  |   7  |   8  |   9  |   0  |   =    |
     * |--------+------+------+------+------+-------------|           |------+------+------+------+------+------+--------|
     * |  Tab   |   Q  |   W  |   E  |   R  |   T  |  [   |           |  ]   |   Y  |   U  |   I  |   O  |   P  |   \    |
     * |--------+------+------+------+------+------|      |           |      |------+------+------+------+------+--------|
     * | LCtrl  |   A  |   S  |   D  |   F  |   G  |------|           |------|   H  |   J  |   K  |   L  |   ;  |   '    |
     * |--------+------+------+------+------+------| DF1  |           |      |------+------+------+------+------+--------|
     * | LShift |   Z  |   X  |   C  |   V  |   B  |      |           |      |   N  |   M  |   ,  |   .  |   /  | RShift |
     * `--------+------+------+------+------+-------------'           `-------------+------+------+------+------+--------'
     *   | LCtrl| LAlt | LGui | Vol- | Vol+ |                                       |   "  |   :  | RGui | RAlt | RCtrl |
     *   `----------------------------------'                                       `----------------------------------'
     *                                        ,-------------.       ,-------------.
     *                                        |CpsLck| Del  |       | PgUp | PgDn |
     *                                 ,------|------|------|       |------+------+------.
     *                                 |      |      | LAlt |       | RAlt |      |      |
     *                                 | BkSp | MO2  |------|       |------| Enter| Space|
     *                                 |      |      | LGui |       | RGui |      |      |
     *                                 `--------------------'       `--------------------'
     */
    ergodox_layer!(
        // left hand
        Escape,  Kc1,     Kc2,     Kc3,     Kc4,     Kc5,     Grave,
        Tab,     Q,       W,       E,       R,       T,       LeftBracket,
        LCtrl,   A,       S,       D,       F,       G,
        LShift,  Z,       X,       C,       V,       B,       {DF_COLEMAK},
        LCtrl,   LAlt,    LGui,    AudioVolDown, AudioVolUp,
                                                     CapsLock, Delete,
                                                               LAlt,
                                            Backspace, {MO_FUNCTION}, LGui,
        // right hand
        Minus,        Kc6,     Kc7,     Kc8,     Kc9,     Kc0,       Equal,
        RightBracket, Y,       U,       I,       O,       P,         Backslash,
                      H,       J,       K,       L,       Semicolon, Quote,
        XXXX,         N,       M,       Comma,   Dot,     Slash,     RShift,
                               {DQUO},  {COLN},  RGui,    RAlt,      RCtrl,
        PageUp, PageDown,
        RAlt,
        RGui, Enter, Space,
    ),
    /*
     * Layer 1: Colemak
     *
     * ,--------------------------------------------------.           ,--------------------------------------------------.
     * |  Esc   |   1  |   2  |   3  |   4  |   5  |  `   |           |  -   |   6  |   7  |   8  |   9  |   0  |   =    |
     * |--------+------+------+------+------+-------------|           |------+------+------+------+------+------+--------|
     * |  Tab   |   Q  |   W  |   F  |   P  |   G  |  [   |           |  ]   |   J  |   L  |   U  |   Y  |   ;  |   \    |
     * |--------+------+------+------+------+------|      |           |      |------+------+------+------+------+--------|
     * | LCtrl  |   A  |   R  |   S  |   T  |   D  |------|           |------|   H  |   N  |   E  |   I  |   O  |   '    |
     * |--------+------+------+------+------+------| DF3  |           | DF0  |------+------+------+------+------+--------|
     * | LShift |   Z  |   X  |   C  |   V  |   B  |      |           |      |   K  |   M  |   ,  |   .  |   /  | RShift |
     * `--------+------+------+------+------+-------------'           `-------------+------+------+------+------+--------'
     *   | LCtrl| LAlt | LGui | Vol- | Vol+ |                                       |   "  |   :  | RGui | RAlt | RCtrl |
     *   `----------------------------------'                                       `----------------------------------'
     *                                        ,-------------.       ,-------------.
     *                                        |CpsLck| Del  |       | PgUp | PgDn |
     *                                 ,------|------|------|       |------+------+------.
     *                                 |      |      | LAlt |       | RAlt |      |      |
     *                                 | BkSp | MO2  |------|       |------| Enter| Space|
     *                                 |      |      | LGui |       | RGui |      |      |
     *                                 `--------------------'       `--------------------'
     */
    ergodox_layer!(
        // left hand
        Escape,  Kc1,     Kc2,     Kc3,     Kc4,     Kc5,     Grave,
        Tab,     Q,       W,       F,       P,       G,       LeftBracket,
        LCtrl,   A,       R,       S,       T,       D,
        LShift,  Z,       X,       C,       V,       B,       {DF_GAMING},
        LCtrl,   LAlt,    LGui,    AudioVolDown, AudioVolUp,
                                                     CapsLock, Delete,
                                                               LAlt,
                                            Backspace, {MO_FUNCTION}, LGui,
        // right hand
        Minus,        Kc6,     Kc7,     Kc8,     Kc9,     Kc0,       Equal,
        RightBracket, J,       L,       U,       Y,       Semicolon, Backslash,
                      H,       N,       E,       I,       O,         Quote,
        {DF_QWERTY},  K,       M,       Comma,   Dot,     Slash,     RShift,
                               {DQUO},  {COLN},  RGui,    RAlt,      RCtrl,
        PageUp, PageDown,
        RAlt,
        RGui, Enter, Space,
    ),
    /*
     * Layer 2: Function keys and extras
     *
     * ,--------------------------------------------------.           ,--------------------------------------------------.
     * | Teensy |  F1  |  F2  |  F3  |  F4  |  F5  |  F11 |           |  F12 |  F6  |  F7  |  F8  |  F9  |  F10 |        |
     * |--------+------+------+------+------+-------------|           |------+------+------+------+------+------+--------|
     * |        |      |      |      |      |      |      |           |      |      |CAG+U |      |      |      |        |
     * |--------+------+------+------+------+------|      |           |      |------+------+------+------+------+--------|
     * | CapsLk |      |      |      |      |CAG+G |------|           |------| Left | Down |  Up  | Right|      |        |
     * |--------+------+------+------+------+------| DF3  |           | DF1  |------+------+------+------+------+--------|
     * |        |      |      |      |      |      |      |           |      |      | Mute |      |      |      |        |
     * `--------+------+------+------+------+-------------'           `-------------+------+------+------+------+--------'
     *   |      |      | Play |  RW  |  FF  |                                       |      |      |      |      |      |
     *   `----------------------------------'                                       `----------------------------------'
     */
    ergodox_layer!(
        // left hand
        {TEENSY}, F1,      F2,      F3,      F4,      F5,      F11,
        ____,     ____,    ____,    ____,    ____,    ____,    ____,
        CapsLock, ____,    ____,    ____,    ____,    {TEST_AGAIN},
        ____,     ____,    ____,    ____,    ____,    ____,    {DF_GAMING},
        ____,     ____,    MediaPlayPause, MediaRewind, MediaFastForward,
                                                       ____, ____,
                                                             ____,
                                                 ____, ____, ____,
        // right hand
        F12,          F6,      F7,      F8,      F9,      F10,       ____,
        ____,         ____,    {TEST_CLASS}, ____, ____,  ____,      ____,
                      Left,    Down,    Up,      Right,   ____,      ____,
        {DF_COLEMAK}, ____,    AudioMute, ____,  ____,    ____,      ____,
                               ____,    ____,    ____,    ____,      ____,
        ____, ____,
        ____,
        ____, ____, ____,
    ),
    /*
     * Layer 3: Gaming (Windows)
     *
     * Left shift is a tap toggle: hold for normal shift, double tap to hold it down until tapped again.
     *
     * ,--------------------------------------------------.           ,--------------------------------------------------.
     * |  Esc   |   1  |   2  |   3  |   4  |   5  | Save |           |  -   |   6  |   7  |   8  |   9  |   0  |   =    |
     * |--------+------+------+------+------+-------------|           |------+------+------+------+------+------+--------|
     * |  Tab   |   Q  |   W  |   E  |   R  |   T  | Rec  |           |  ]   |   Y  |   U  |   I  |   O  |   P  |   \    |
     * |--------+------+------+------+------+------|      |           |      |------+------+------+------+------+--------|
     * | LCtrl  |   A  |   S  |   D  |   F  |   G  |------|           |------|   H  |   J  |   K  |   L  |   ;  |   '    |
     * |--------+------+------+------+------+------|      |           | DF0  |------+------+------+------+------+--------|
     * | Sft TT |   Z  |   X  |   C  |   V  |   B  |      |           |      |   N  |   M  |   ,  |   .  |   /  | RShift |
     * `--------+------+------+------+------+-------------'           `-------------+------+------+------+------+--------'
     *   | LCtrl| LAlt | LGui |      |      |                                       |      |      | RAlt | RGui | RCtrl |
     *   `----------------------------------'                                       `----------------------------------'
     *                                        ,-------------.       ,-------------.
     *                                        |  gg  |  F12 |       | PgUp | PgDn |
     *                                 ,------|------|------|       |------+------+------.
     *                                 |      |      |      |       | RAlt |      |      |
     *                                 | Space| Enter|------|       |------| Enter| BkSp |
     *                                 |      |      | MO1  |       | RGui |      |      |
     *                                 `--------------------'       `--------------------'
     */
    ergodox_layer!(
        // left hand
        Escape,     Kc1,     Kc2,     Kc3,     Kc4,     Kc5,     {SHADOW_SAVE},
        Tab,        Q,       W,       E,       R,       T,       {SHADOW_REC},
        LCtrl,      A,       S,       D,       F,       G,
        {SHIFT_TT}, Z,       X,       C,       V,       B,       XXXX,
        LCtrl,      LAlt,    LGui,    XXXX,    XXXX,
                                                 {GOOD_GAME}, F12,
                                                              XXXX,
                                          Space, Enter, {MO_COLEMAK},
        // right hand
        Minus,        Kc6,     Kc7,     Kc8,     Kc9,     Kc0,       Equal,
        RightBracket, Y,       U,       I,       O,       P,         Backslash,
                      H,       J,       K,       L,       Semicolon, Quote,
        {DF_QWERTY},  N,       M,       Comma,   Dot,     Slash,     RShift,
                               XXXX,    XXXX,    RAlt,    RGui,      RCtrl,
        PageUp, PageDown,
        RAlt,
        RGui, Enter, Backspace,
    ),
];

// A keymap that references an empty Fn slot does not build.
const _: () = assert!(validate_keymap(&DEFAULT_KEYMAP, &FN_ACTIONS).is_ok());

pub const fn get_default_keymap() -> Keymap {
    DEFAULT_KEYMAP
}

/// Configuration errors found by [`validate_keymap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// A cell references an Fn slot beyond the table
    FnSlotOutOfRange { layer: u8, row: u8, col: u8, slot: u8 },
    /// A cell references an empty Fn slot
    UnpopulatedFnSlot { layer: u8, row: u8, col: u8, slot: u8 },
    /// An Fn slot switches to a layer that doesn't exist
    InvalidLayer { slot: u8, layer: u8 },
    /// An Fn slot triggers an undefined macro
    UnknownMacro { slot: u8, id: u8 },
    /// An Fn slot calls an undefined user function
    UnknownFunction { slot: u8, id: u8 },
}

/// Check that every Fn action is well formed and every Fn cell of the keymap points to one.
pub const fn validate_keymap<const R: usize, const C: usize, const L: usize>(
    keymap: &[[[KeyAction; C]; R]; L],
    fn_actions: &FnActions,
) -> Result<(), KeymapError> {
    let mut slot = 0;
    while slot < FN_ACTION_SLOTS {
        if let Some(action) = fn_actions[slot] {
            if let Err(e) = validate_fn_action(slot as u8, action, L) {
                return Err(e);
            }
        }
        slot += 1;
    }

    let mut layer = 0;
    while layer < L {
        let mut row = 0;
        while row < R {
            let mut col = 0;
            while col < C {
                if let KeyAction::Fn(slot) = keymap[layer][row][col] {
                    let (layer, row, col) = (layer as u8, row as u8, col as u8);
                    if slot as usize >= FN_ACTION_SLOTS {
                        return Err(KeymapError::FnSlotOutOfRange { layer, row, col, slot });
                    }
                    if fn_actions[slot as usize].is_none() {
                        return Err(KeymapError::UnpopulatedFnSlot { layer, row, col, slot });
                    }
                }
                col += 1;
            }
            row += 1;
        }
        layer += 1;
    }

    Ok(())
}

const fn validate_fn_action(slot: u8, action: Action, num_layer: usize) -> Result<(), KeymapError> {
    match action {
        Action::LayerMomentary(layer) | Action::DefaultLayer(layer) if layer as usize >= num_layer => {
            Err(KeymapError::InvalidLayer { slot, layer })
        }
        Action::TriggerMacro(id) if !MacroId::is_known(id) => Err(KeymapError::UnknownMacro { slot, id }),
        Action::Function(id) if !FunctionId::is_known(id) => Err(KeymapError::UnknownFunction { slot, id }),
        _ => Ok(()),
    }
}

/// Look up an Fn slot. Out of range and empty slots give `None`.
pub const fn fn_action(fn_actions: &FnActions, slot: u8) -> Option<Action> {
    if slot as usize >= FN_ACTION_SLOTS {
        return None;
    }
    fn_actions[slot as usize]
}

/// The action a single keymap cell stands for.
///
/// `Transparent` gives `None`: choosing the layer underneath is the layer engine's job.
pub const fn resolve_key_action(key_action: KeyAction, fn_actions: &FnActions) -> Option<Action> {
    match key_action {
        KeyAction::No => Some(Action::No),
        KeyAction::Transparent => None,
        KeyAction::Key(keycode) => Some(Action::Key(keycode)),
        KeyAction::Fn(slot) => fn_action(fn_actions, slot),
    }
}

/// Action of the built-in keymap at `(layer, row, col)`, without falling through transparent cells.
pub fn action_at(layer: usize, row: usize, col: usize) -> Option<Action> {
    let key_action = DEFAULT_KEYMAP.get(layer)?.get(row)?.get(col)?;
    resolve_key_action(*key_action, &FN_ACTIONS)
}
