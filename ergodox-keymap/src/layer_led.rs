//! Layer indicator LEDs.
//!
//! The three LEDs on the right half show which layer is on top:
//!
//! | layer state   | LED1 | LED2 | LED3 |
//! | ------------- | ---- | ---- | ---- |
//! | `1 << 1`      |  on  |      |      |
//! | `1 << 2`      |      |  on  |      |
//! | `1 << 3`      |      |      |  on  |
//! | `1 << 4`      |      |  on  |  on  |
//! | anything else |      |      |      |
//!
//! The state is matched as a whole, so two layers on at once (e.g. `0b0110`) light nothing.

use embedded_hal::digital::{OutputPin, PinState};

use crate::config::{LayerLedConfig, LedPinConfig};
use crate::host::DefaultLayerSource;
use crate::keymap::Layer;
use crate::types::layer_led::LayerLeds;
use crate::types::layer_state::LayerState;

/// LED pattern for a combined layer state.
pub const fn layer_led_pattern(layer: LayerState) -> LayerLeds {
    match layer.bits() {
        0b0_0010 => LayerLeds::LED1,
        0b0_0100 => LayerLeds::LED2,
        0b0_1000 => LayerLeds::LED3,
        0b1_0000 => LayerLeds::new_from(false, true, true),
        _ => LayerLeds::ALL_OFF,
    }
}

/// A single indicator LED, wired active-high or active-low.
struct IndicatorLed<P: OutputPin> {
    pin: P,
    low_active: bool,
}

impl<P: OutputPin> IndicatorLed<P> {
    fn new(config: LedPinConfig<P>) -> Self {
        Self {
            pin: config.pin,
            low_active: config.low_active,
        }
    }

    fn set(&mut self, on: bool) {
        // The indicator has nowhere to report a failure, ignore it
        self.pin.set_state(PinState::from(on != self.low_active)).ok();
    }
}

/// Drives the layer indicator LEDs from layer state changes.
pub struct LayerLedController<P: OutputPin> {
    led1: IndicatorLed<P>,
    led2: IndicatorLed<P>,
    led3: IndicatorLed<P>,
    leds: LayerLeds,
}

impl<P: OutputPin> LayerLedController<P> {
    /// Create the controller, all LEDs start off.
    pub fn new(config: LayerLedConfig<P>) -> Self {
        let mut controller = Self {
            led1: IndicatorLed::new(config.led1),
            led2: IndicatorLed::new(config.led2),
            led3: IndicatorLed::new(config.led3),
            leds: LayerLeds::ALL_OFF,
        };
        controller.all_off();
        controller
    }

    /// The pattern currently shown.
    pub fn leds(&self) -> LayerLeds {
        self.leds
    }

    pub fn all_off(&mut self) {
        self.led1.set(false);
        self.led2.set(false);
        self.led3.set(false);
        self.leds = LayerLeds::ALL_OFF;
    }

    /// Show the LEDs for `layer`, the union of default and overlay layer bits.
    ///
    /// Every LED is switched off first, then the pattern's LEDs are switched on.
    pub fn show_layer_led(&mut self, layer: LayerState) {
        self.all_off();

        let pattern = layer_led_pattern(layer);
        if pattern.led1() {
            self.led1.set(true);
        }
        if pattern.led2() {
            self.led2.set(true);
        }
        if pattern.led3() {
            self.led3.set(true);
        }
        self.leds = pattern;
    }

    /// Called by the layer engine whenever the overlay layer state changes.
    pub fn hook_layer_change<S: DefaultLayerSource + ?Sized>(&mut self, source: &S, layer_state: LayerState) {
        let combined = source.default_layer_state() | layer_state;
        debug!("Layer changed: {:?}, top layer: {}", combined, top_layer_name(combined));
        self.show_layer_led(combined);
    }

    /// Called by the layer engine whenever the default layer changes.
    pub fn hook_default_layer_change<S: DefaultLayerSource + ?Sized>(&mut self, source: &S, layer_state: LayerState) {
        let combined = source.default_layer_state() | layer_state;
        debug!("Default layer changed: {:?}, top layer: {}", combined, top_layer_name(combined));
        self.show_layer_led(combined);
    }
}

fn top_layer_name(state: LayerState) -> &'static str {
    state
        .highest_layer()
        .and_then(Layer::from_repr)
        .map(Layer::name)
        .unwrap_or("none")
}
