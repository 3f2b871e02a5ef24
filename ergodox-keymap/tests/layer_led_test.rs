pub mod common;

use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
use ergodox_keymap::config::{KeyboardConfig, LayerLedConfig, LedPinConfig};
use ergodox_keymap::layer_led::LayerLedController;
use ergodox_keymap::types::layer_led::LayerLeds;
use ergodox_keymap::types::layer_state::LayerState;

use crate::common::{levels, recording_controller};

#[test]
fn test_show_layer_led_clears_before_setting() {
    // Construction switches everything off, then `show_layer_led(1 << 2)` clears and lights LED2
    let mut led1 = PinMock::new(&[PinTransaction::set(State::Low), PinTransaction::set(State::Low)]);
    let mut led2 = PinMock::new(&[
        PinTransaction::set(State::Low),
        PinTransaction::set(State::Low),
        PinTransaction::set(State::High),
    ]);
    let mut led3 = PinMock::new(&[PinTransaction::set(State::Low), PinTransaction::set(State::Low)]);

    let config = KeyboardConfig::new(LayerLedConfig::new(led1.clone(), led2.clone(), led3.clone(), false));
    let mut controller = LayerLedController::new(config.led_config);
    controller.show_layer_led(LayerState::layer(2));
    assert_eq!(controller.leds(), LayerLeds::LED2);

    led1.done();
    led2.done();
    led3.done();
}

#[test]
fn test_low_active_leds() {
    let mut led1 = PinMock::new(&[PinTransaction::set(State::High), PinTransaction::set(State::High)]);
    let mut led2 = PinMock::new(&[
        PinTransaction::set(State::High),
        PinTransaction::set(State::High),
        PinTransaction::set(State::Low),
    ]);
    let mut led3 = PinMock::new(&[
        PinTransaction::set(State::High),
        PinTransaction::set(State::High),
        PinTransaction::set(State::Low),
    ]);

    let mut controller = LayerLedController::new(LayerLedConfig {
        led1: LedPinConfig {
            pin: led1.clone(),
            low_active: true,
        },
        led2: LedPinConfig {
            pin: led2.clone(),
            low_active: true,
        },
        led3: LedPinConfig {
            pin: led3.clone(),
            low_active: true,
        },
    });
    controller.show_layer_led(LayerState::layer(4));

    led1.done();
    led2.done();
    led3.done();
}

#[test]
fn test_show_layer_led_patterns() {
    let (mut controller, pins) = recording_controller();
    assert_eq!(levels(&pins), [false, false, false]);

    controller.show_layer_led(LayerState::new(2));
    assert_eq!(levels(&pins), [true, false, false]);

    controller.show_layer_led(LayerState::new(4));
    assert_eq!(levels(&pins), [false, true, false]);

    controller.show_layer_led(LayerState::new(8));
    assert_eq!(levels(&pins), [false, false, true]);

    controller.show_layer_led(LayerState::new(16));
    assert_eq!(levels(&pins), [false, true, true]);

    // No stale LED survives a transition to an unhandled state
    controller.show_layer_led(LayerState::new(0));
    assert_eq!(levels(&pins), [false, false, false]);

    controller.show_layer_led(LayerState::new(16));
    controller.show_layer_led(LayerState::new(0b0110));
    assert_eq!(levels(&pins), [false, false, false]);
    assert_eq!(controller.leds(), LayerLeds::ALL_OFF);
}

#[test]
fn test_hooks_match_show_layer_led_of_union() {
    let defaults = [LayerState::NONE, LayerState::layer(0), LayerState::layer(1), LayerState::layer(3)];
    for default_layer in defaults {
        for bits in 0..64u32 {
            let state = LayerState::new(bits);

            let (mut expected, expected_pins) = recording_controller();
            expected.show_layer_led(default_layer | state);

            let (mut overlay, overlay_pins) = recording_controller();
            overlay.hook_layer_change(&default_layer, state);
            assert_eq!(levels(&overlay_pins), levels(&expected_pins));
            assert_eq!(overlay.leds(), expected.leds());

            let (mut default, default_pins) = recording_controller();
            default.hook_default_layer_change(&default_layer, state);
            assert_eq!(levels(&default_pins), levels(&expected_pins));
            assert_eq!(default.leds(), expected.leds());
        }
    }
}

#[test]
fn test_layer_hooks_in_use() {
    let (mut controller, pins) = recording_controller();
    let qwerty = LayerState::layer(0);

    // Holding the function layer key on top of the default QWERTY layer: layers 0 and 2 are on,
    // the exact-match switch finds no pattern and the LEDs stay dark
    controller.hook_layer_change(&qwerty, LayerState::layer(2));
    assert_eq!(levels(&pins), [false, false, false]);

    // Switching the default layer to Colemak with no overlay lights LED1
    let colemak = LayerState::layer(1);
    controller.hook_default_layer_change(&colemak, LayerState::NONE);
    assert_eq!(levels(&pins), [true, false, false]);

    // Gaming layer as default lights LED3
    let gaming = LayerState::layer(3);
    controller.hook_default_layer_change(&gaming, gaming);
    assert_eq!(levels(&pins), [false, false, true]);
}
