//! Names accepted for bindings in the config file.
//!
//! Keyboard names follow the classic overlay spelling (`Z`, `Num1`, `LShift`,
//! `Tilde`, ...) with the bevy/winit names accepted as aliases. Matching is
//! case-insensitive.

use bevy::input::keyboard::KeyCode;
use bevy::input::mouse::MouseButton;

const KEY_NAMES: &[(&str, KeyCode)] = &[
    ("A", KeyCode::KeyA), ("B", KeyCode::KeyB), ("C", KeyCode::KeyC), ("D", KeyCode::KeyD),
    ("E", KeyCode::KeyE), ("F", KeyCode::KeyF), ("G", KeyCode::KeyG), ("H", KeyCode::KeyH),
    ("I", KeyCode::KeyI), ("J", KeyCode::KeyJ), ("K", KeyCode::KeyK), ("L", KeyCode::KeyL),
    ("M", KeyCode::KeyM), ("N", KeyCode::KeyN), ("O", KeyCode::KeyO), ("P", KeyCode::KeyP),
    ("Q", KeyCode::KeyQ), ("R", KeyCode::KeyR), ("S", KeyCode::KeyS), ("T", KeyCode::KeyT),
    ("U", KeyCode::KeyU), ("V", KeyCode::KeyV), ("W", KeyCode::KeyW), ("X", KeyCode::KeyX),
    ("Y", KeyCode::KeyY), ("Z", KeyCode::KeyZ),
    ("Num0", KeyCode::Digit0), ("Num1", KeyCode::Digit1), ("Num2", KeyCode::Digit2),
    ("Num3", KeyCode::Digit3), ("Num4", KeyCode::Digit4), ("Num5", KeyCode::Digit5),
    ("Num6", KeyCode::Digit6), ("Num7", KeyCode::Digit7), ("Num8", KeyCode::Digit8),
    ("Num9", KeyCode::Digit9),
    ("Digit0", KeyCode::Digit0), ("Digit1", KeyCode::Digit1), ("Digit2", KeyCode::Digit2),
    ("Digit3", KeyCode::Digit3), ("Digit4", KeyCode::Digit4), ("Digit5", KeyCode::Digit5),
    ("Digit6", KeyCode::Digit6), ("Digit7", KeyCode::Digit7), ("Digit8", KeyCode::Digit8),
    ("Digit9", KeyCode::Digit9),
    ("Numpad0", KeyCode::Numpad0), ("Numpad1", KeyCode::Numpad1), ("Numpad2", KeyCode::Numpad2),
    ("Numpad3", KeyCode::Numpad3), ("Numpad4", KeyCode::Numpad4), ("Numpad5", KeyCode::Numpad5),
    ("Numpad6", KeyCode::Numpad6), ("Numpad7", KeyCode::Numpad7), ("Numpad8", KeyCode::Numpad8),
    ("Numpad9", KeyCode::Numpad9),
    ("Add", KeyCode::NumpadAdd), ("Subtract", KeyCode::NumpadSubtract),
    ("Multiply", KeyCode::NumpadMultiply), ("Divide", KeyCode::NumpadDivide),
    ("F1", KeyCode::F1), ("F2", KeyCode::F2), ("F3", KeyCode::F3), ("F4", KeyCode::F4),
    ("F5", KeyCode::F5), ("F6", KeyCode::F6), ("F7", KeyCode::F7), ("F8", KeyCode::F8),
    ("F9", KeyCode::F9), ("F10", KeyCode::F10), ("F11", KeyCode::F11), ("F12", KeyCode::F12),
    ("F13", KeyCode::F13), ("F14", KeyCode::F14), ("F15", KeyCode::F15),
    ("Escape", KeyCode::Escape), ("Space", KeyCode::Space), ("Tab", KeyCode::Tab),
    ("Enter", KeyCode::Enter), ("Return", KeyCode::Enter), ("Backspace", KeyCode::Backspace),
    ("LControl", KeyCode::ControlLeft), ("RControl", KeyCode::ControlRight),
    ("ControlLeft", KeyCode::ControlLeft), ("ControlRight", KeyCode::ControlRight),
    ("LShift", KeyCode::ShiftLeft), ("RShift", KeyCode::ShiftRight),
    ("ShiftLeft", KeyCode::ShiftLeft), ("ShiftRight", KeyCode::ShiftRight),
    ("LAlt", KeyCode::AltLeft), ("RAlt", KeyCode::AltRight),
    ("AltLeft", KeyCode::AltLeft), ("AltRight", KeyCode::AltRight),
    ("LSystem", KeyCode::SuperLeft), ("RSystem", KeyCode::SuperRight),
    ("Menu", KeyCode::ContextMenu),
    ("LBracket", KeyCode::BracketLeft), ("RBracket", KeyCode::BracketRight),
    ("Semicolon", KeyCode::Semicolon), ("Comma", KeyCode::Comma), ("Period", KeyCode::Period),
    ("Quote", KeyCode::Quote), ("Apostrophe", KeyCode::Quote), ("Slash", KeyCode::Slash),
    ("Backslash", KeyCode::Backslash), ("Tilde", KeyCode::Backquote), ("Grave", KeyCode::Backquote),
    ("Equal", KeyCode::Equal), ("Hyphen", KeyCode::Minus), ("Dash", KeyCode::Minus),
    ("Minus", KeyCode::Minus),
    ("PageUp", KeyCode::PageUp), ("PageDown", KeyCode::PageDown), ("End", KeyCode::End),
    ("Home", KeyCode::Home), ("Insert", KeyCode::Insert), ("Delete", KeyCode::Delete),
    ("Left", KeyCode::ArrowLeft), ("Right", KeyCode::ArrowRight),
    ("Up", KeyCode::ArrowUp), ("Down", KeyCode::ArrowDown), ("Pause", KeyCode::Pause),
    ("CapsLock", KeyCode::CapsLock),
];

const MOUSE_NAMES: &[(&str, MouseButton)] = &[
    ("Left", MouseButton::Left),
    ("Right", MouseButton::Right),
    ("Middle", MouseButton::Middle),
    ("XButton1", MouseButton::Back),
    ("XButton2", MouseButton::Forward),
    ("Back", MouseButton::Back),
    ("Forward", MouseButton::Forward),
];

pub fn keyboard_key(name: &str) -> Option<KeyCode> {
    lookup(KEY_NAMES, name)
}

pub fn mouse_button(name: &str) -> Option<MouseButton> {
    lookup(MOUSE_NAMES, name)
}

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
}
