pub mod common;

use ergodox_keymap::event::KeyRecord;
use ergodox_keymap::keyboard_macro::{MacroId, MacroOperation, action_get_macro, play_macro};
use ergodox_keymap::keymap::{FN_ACTIONS, fn_action};
use ergodox_keymap::types::action::Action;
use ergodox_keymap::types::keycode::KeyCode;

use crate::common::{HostEvent, fake_firmware};

#[test]
fn test_good_game_sequence() {
    let ops = action_get_macro(&KeyRecord::pressed(5, 5), MacroId::GoodGame as u8, 0);
    assert_eq!(
        ops.as_slice(),
        &[
            MacroOperation::Interval(100),
            MacroOperation::Tap(KeyCode::T),
            MacroOperation::Tap(KeyCode::G),
            MacroOperation::Tap(KeyCode::G),
            MacroOperation::Tap(KeyCode::Enter),
        ]
    );
}

#[test]
fn test_good_game_playback() {
    let (mut host, mut delay, log) = fake_firmware();
    let ops = action_get_macro(&KeyRecord::pressed(5, 5), MacroId::GoodGame as u8, 0);
    play_macro(&ops, &mut host, &mut delay);

    let events = log.borrow();
    // 100ms pass before the first key goes down
    assert_eq!(events[0], HostEvent::DelayMs(100));

    let typed: Vec<KeyCode> = events
        .iter()
        .filter_map(|e| match e {
            HostEvent::Register(k) => Some(*k),
            _ => None,
        })
        .collect();
    assert_eq!(typed, vec![KeyCode::T, KeyCode::G, KeyCode::G, KeyCode::Enter]);

    // Every key is released after it is pressed, and nothing is left held
    let released: Vec<KeyCode> = events
        .iter()
        .filter_map(|e| match e {
            HostEvent::Unregister(k) => Some(*k),
            _ => None,
        })
        .collect();
    assert_eq!(released, typed);
    assert_eq!(events[1], HostEvent::Register(KeyCode::T));
    assert_eq!(events[2], HostEvent::DelayMs(100));
    assert_eq!(events[3], HostEvent::Unregister(KeyCode::T));
    assert_eq!(events.len(), 1 + 4 * 4);
}

#[test]
fn test_release_and_unknown_ids_play_nothing() {
    let (mut host, mut delay, log) = fake_firmware();

    let on_release = action_get_macro(&KeyRecord::released(5, 5), MacroId::GoodGame as u8, 0);
    assert!(on_release.is_empty());
    for id in 1..=u8::MAX {
        assert!(action_get_macro(&KeyRecord::pressed(5, 5), id, 0).is_empty());
        assert!(action_get_macro(&KeyRecord::released(5, 5), id, 0).is_empty());
    }

    play_macro(&on_release, &mut host, &mut delay);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_press_release_and_delay() {
    let (mut host, mut delay, log) = fake_firmware();
    let ops = [
        MacroOperation::Press(KeyCode::LShift),
        MacroOperation::Delay(30),
        MacroOperation::Press(KeyCode::A),
        MacroOperation::Release(KeyCode::A),
        MacroOperation::Release(KeyCode::LShift),
    ];
    play_macro(&ops, &mut host, &mut delay);

    assert_eq!(
        *log.borrow(),
        vec![
            HostEvent::Register(KeyCode::LShift),
            HostEvent::DelayMs(30),
            HostEvent::Register(KeyCode::A),
            HostEvent::Unregister(KeyCode::A),
            HostEvent::Unregister(KeyCode::LShift),
        ]
    );
}

#[test]
fn test_macro_key_is_wired() {
    assert_eq!(fn_action(&FN_ACTIONS, 24), Some(Action::TriggerMacro(MacroId::GoodGame as u8)));
}
