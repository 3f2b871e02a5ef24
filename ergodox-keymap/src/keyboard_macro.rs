use embedded_hal::delay::DelayNs;
use heapless::Vec;
use strum::FromRepr;

use crate::event::KeyRecord;
use crate::host::KeyboardHost;
use crate::types::keycode::KeyCode;

/// Max number of operations in one macro
pub const MACRO_MAX_LEN: usize = 16;

/// A macro as returned by [`action_get_macro`], empty means "no macro".
pub type MacroSequence = Vec<MacroOperation, MACRO_MAX_LEN>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroOperation {
    Press(KeyCode),
    Release(KeyCode),
    /// Press then release, each half followed by the current interval
    Tap(KeyCode),
    /// Wait, in milliseconds
    Delay(u16),
    /// Set the wait after every following operation, in milliseconds
    Interval(u16),
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroId {
    /// Types `tgg` and Enter
    GoodGame = 0,
}

impl MacroId {
    pub const fn is_known(id: u8) -> bool {
        id == MacroId::GoodGame as u8
    }
}

const GOOD_GAME: [MacroOperation; 5] = [
    MacroOperation::Interval(100),
    MacroOperation::Tap(KeyCode::T),
    MacroOperation::Tap(KeyCode::G),
    MacroOperation::Tap(KeyCode::G),
    MacroOperation::Tap(KeyCode::Enter),
];

/// Macro for the given id. Macros only fire on key down, releases give the empty sequence.
pub fn action_get_macro(record: &KeyRecord, id: u8, _opt: u8) -> MacroSequence {
    match MacroId::from_repr(id) {
        Some(MacroId::GoodGame) if record.event.pressed => MacroSequence::from_slice(&GOOD_GAME).unwrap_or_default(),
        Some(_) => MacroSequence::new(),
        None => {
            warn!("Unknown macro id: {}", id);
            MacroSequence::new()
        }
    }
}

/// Play a macro through the host.
///
/// The interval starts at 0 and is waited after every operation, `Interval` and `Delay` included.
pub fn play_macro<H: KeyboardHost + ?Sized, D: DelayNs>(operations: &[MacroOperation], host: &mut H, delay: &mut D) {
    let mut interval_ms: u16 = 0;
    for operation in operations {
        trace!("Macro operation: {:?}", operation);
        match *operation {
            MacroOperation::Press(keycode) => {
                host.register_code(keycode);
            }
            MacroOperation::Release(keycode) => {
                host.unregister_code(keycode);
            }
            MacroOperation::Tap(keycode) => {
                host.register_code(keycode);
                wait(delay, interval_ms);
                host.unregister_code(keycode);
            }
            MacroOperation::Delay(ms) => {
                wait(delay, ms);
            }
            MacroOperation::Interval(ms) => {
                interval_ms = ms;
            }
        }
        wait(delay, interval_ms);
    }
}

fn wait<D: DelayNs>(delay: &mut D, ms: u16) {
    if ms > 0 {
        delay.delay_ms(ms as u32);
    }
}
