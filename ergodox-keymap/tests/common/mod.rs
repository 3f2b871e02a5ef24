#![allow(dead_code)]

use core::convert::Infallible;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use ergodox_keymap::config::LayerLedConfig;
use ergodox_keymap::host::KeyboardHost;
use ergodox_keymap::layer_led::LayerLedController;
use ergodox_keymap::types::keycode::KeyCode;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Everything the fake firmware saw, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Register(KeyCode),
    Unregister(KeyCode),
    Clear,
    DelayMs(u32),
    BootloaderJump,
}

pub type EventLog = Rc<RefCell<Vec<HostEvent>>>;

pub struct FakeHost {
    pub log: EventLog,
}

impl KeyboardHost for FakeHost {
    fn register_code(&mut self, keycode: KeyCode) {
        self.log.borrow_mut().push(HostEvent::Register(keycode));
    }

    fn unregister_code(&mut self, keycode: KeyCode) {
        self.log.borrow_mut().push(HostEvent::Unregister(keycode));
    }

    fn clear_keyboard(&mut self) {
        self.log.borrow_mut().push(HostEvent::Clear);
    }

    fn bootloader_jump(&mut self) -> ! {
        self.log.borrow_mut().push(HostEvent::BootloaderJump);
        panic!("jumped to bootloader");
    }
}

pub struct FakeDelay {
    pub log: EventLog,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(HostEvent::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(HostEvent::DelayMs(ms));
    }
}

/// A host and a delay sharing one event log
pub fn fake_firmware() -> (FakeHost, FakeDelay, EventLog) {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    (FakeHost { log: log.clone() }, FakeDelay { log: log.clone() }, log)
}

/// An output pin that remembers its level
#[derive(Clone, Default)]
pub struct RecordingPin {
    high: Rc<Cell<bool>>,
}

impl RecordingPin {
    pub fn is_high(&self) -> bool {
        self.high.get()
    }
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        Ok(())
    }
}

/// Controller over three active-high recording pins, with handles to read the pins back
pub fn recording_controller() -> (LayerLedController<RecordingPin>, [RecordingPin; 3]) {
    let pins = [RecordingPin::default(), RecordingPin::default(), RecordingPin::default()];
    let config = LayerLedConfig::new(pins[0].clone(), pins[1].clone(), pins[2].clone(), false);
    (LayerLedController::new(config), pins)
}

pub fn levels(pins: &[RecordingPin; 3]) -> [bool; 3] {
    [pins[0].is_high(), pins[1].is_high(), pins[2].is_high()]
}
