//! Device-level key state, read straight from evdev so keys register while
//! the overlay is not focused.

#[cfg(all(target_os = "linux", feature = "global-input"))]
pub use evdev_backend::GlobalInput;

#[cfg(not(all(target_os = "linux", feature = "global-input")))]
pub use unsupported::GlobalInput;

#[cfg(all(target_os = "linux", feature = "global-input"))]
mod evdev_backend {
    use bevy::input::keyboard::KeyCode;
    use bevy::input::mouse::MouseButton;
    use bevy::log::debug;
    use evdev::{AttributeSet, Device, Key};

    use crate::engine::InputId;
    use crate::overlay::input::InputSampler;

    pub struct GlobalInput {
        devices: Vec<Device>,
        pressed: Vec<AttributeSet<Key>>,
    }

    impl GlobalInput {
        /// Open every readable device that has keys or mouse buttons.
        pub fn open() -> Option<Self> {
            let devices: Vec<Device> = evdev::enumerate()
                .map(|(_, device)| device)
                .filter(|device| {
                    device.supported_keys().is_some_and(|keys| {
                        keys.contains(Key::KEY_A) || keys.contains(Key::BTN_LEFT)
                    })
                })
                .collect();
            if devices.is_empty() {
                return None;
            }
            Some(Self {
                devices,
                pressed: Vec::new(),
            })
        }

        pub fn device_count(&self) -> usize {
            self.devices.len()
        }

        /// Snapshot the key state of every device for this frame.
        pub fn refresh(&mut self) {
            self.pressed.clear();
            for device in &self.devices {
                match device.get_key_state() {
                    Ok(state) => self.pressed.push(state),
                    Err(err) => debug!(
                        "Failed to read key state of {}: {err}",
                        device.name().unwrap_or("unnamed device")
                    ),
                }
            }
        }
    }

    impl InputSampler for GlobalInput {
        fn is_pressed(&self, id: InputId) -> bool {
            let key = match id {
                InputId::Keyboard(code) => evdev_key(code),
                InputId::Mouse(button) => evdev_button(button),
            };
            key.is_some_and(|key| self.pressed.iter().any(|state| state.contains(key)))
        }
    }

    fn evdev_button(button: MouseButton) -> Option<Key> {
        Some(match button {
            MouseButton::Left => Key::BTN_LEFT,
            MouseButton::Right => Key::BTN_RIGHT,
            MouseButton::Middle => Key::BTN_MIDDLE,
            MouseButton::Back => Key::BTN_SIDE,
            MouseButton::Forward => Key::BTN_EXTRA,
            MouseButton::Other(_) => return None,
        })
    }

    fn evdev_key(code: KeyCode) -> Option<Key> {
        Some(match code {
            KeyCode::KeyA => Key::KEY_A, KeyCode::KeyB => Key::KEY_B, KeyCode::KeyC => Key::KEY_C,
            KeyCode::KeyD => Key::KEY_D, KeyCode::KeyE => Key::KEY_E, KeyCode::KeyF => Key::KEY_F,
            KeyCode::KeyG => Key::KEY_G, KeyCode::KeyH => Key::KEY_H, KeyCode::KeyI => Key::KEY_I,
            KeyCode::KeyJ => Key::KEY_J, KeyCode::KeyK => Key::KEY_K, KeyCode::KeyL => Key::KEY_L,
            KeyCode::KeyM => Key::KEY_M, KeyCode::KeyN => Key::KEY_N, KeyCode::KeyO => Key::KEY_O,
            KeyCode::KeyP => Key::KEY_P, KeyCode::KeyQ => Key::KEY_Q, KeyCode::KeyR => Key::KEY_R,
            KeyCode::KeyS => Key::KEY_S, KeyCode::KeyT => Key::KEY_T, KeyCode::KeyU => Key::KEY_U,
            KeyCode::KeyV => Key::KEY_V, KeyCode::KeyW => Key::KEY_W, KeyCode::KeyX => Key::KEY_X,
            KeyCode::KeyY => Key::KEY_Y, KeyCode::KeyZ => Key::KEY_Z,
            KeyCode::Digit0 => Key::KEY_0, KeyCode::Digit1 => Key::KEY_1, KeyCode::Digit2 => Key::KEY_2,
            KeyCode::Digit3 => Key::KEY_3, KeyCode::Digit4 => Key::KEY_4, KeyCode::Digit5 => Key::KEY_5,
            KeyCode::Digit6 => Key::KEY_6, KeyCode::Digit7 => Key::KEY_7, KeyCode::Digit8 => Key::KEY_8,
            KeyCode::Digit9 => Key::KEY_9,
            KeyCode::Numpad0 => Key::KEY_KP0, KeyCode::Numpad1 => Key::KEY_KP1,
            KeyCode::Numpad2 => Key::KEY_KP2, KeyCode::Numpad3 => Key::KEY_KP3,
            KeyCode::Numpad4 => Key::KEY_KP4, KeyCode::Numpad5 => Key::KEY_KP5,
            KeyCode::Numpad6 => Key::KEY_KP6, KeyCode::Numpad7 => Key::KEY_KP7,
            KeyCode::Numpad8 => Key::KEY_KP8, KeyCode::Numpad9 => Key::KEY_KP9,
            KeyCode::NumpadAdd => Key::KEY_KPPLUS, KeyCode::NumpadSubtract => Key::KEY_KPMINUS,
            KeyCode::NumpadMultiply => Key::KEY_KPASTERISK, KeyCode::NumpadDivide => Key::KEY_KPSLASH,
            KeyCode::F1 => Key::KEY_F1, KeyCode::F2 => Key::KEY_F2, KeyCode::F3 => Key::KEY_F3,
            KeyCode::F4 => Key::KEY_F4, KeyCode::F5 => Key::KEY_F5, KeyCode::F6 => Key::KEY_F6,
            KeyCode::F7 => Key::KEY_F7, KeyCode::F8 => Key::KEY_F8, KeyCode::F9 => Key::KEY_F9,
            KeyCode::F10 => Key::KEY_F10, KeyCode::F11 => Key::KEY_F11, KeyCode::F12 => Key::KEY_F12,
            KeyCode::F13 => Key::KEY_F13, KeyCode::F14 => Key::KEY_F14, KeyCode::F15 => Key::KEY_F15,
            KeyCode::Escape => Key::KEY_ESC, KeyCode::Space => Key::KEY_SPACE, KeyCode::Tab => Key::KEY_TAB,
            KeyCode::Enter => Key::KEY_ENTER, KeyCode::Backspace => Key::KEY_BACKSPACE,
            KeyCode::ControlLeft => Key::KEY_LEFTCTRL, KeyCode::ControlRight => Key::KEY_RIGHTCTRL,
            KeyCode::ShiftLeft => Key::KEY_LEFTSHIFT, KeyCode::ShiftRight => Key::KEY_RIGHTSHIFT,
            KeyCode::AltLeft => Key::KEY_LEFTALT, KeyCode::AltRight => Key::KEY_RIGHTALT,
            KeyCode::SuperLeft => Key::KEY_LEFTMETA, KeyCode::SuperRight => Key::KEY_RIGHTMETA,
            KeyCode::ContextMenu => Key::KEY_COMPOSE,
            KeyCode::BracketLeft => Key::KEY_LEFTBRACE, KeyCode::BracketRight => Key::KEY_RIGHTBRACE,
            KeyCode::Semicolon => Key::KEY_SEMICOLON, KeyCode::Comma => Key::KEY_COMMA,
            KeyCode::Period => Key::KEY_DOT, KeyCode::Quote => Key::KEY_APOSTROPHE,
            KeyCode::Slash => Key::KEY_SLASH, KeyCode::Backslash => Key::KEY_BACKSLASH,
            KeyCode::Backquote => Key::KEY_GRAVE, KeyCode::Equal => Key::KEY_EQUAL,
            KeyCode::Minus => Key::KEY_MINUS,
            KeyCode::PageUp => Key::KEY_PAGEUP, KeyCode::PageDown => Key::KEY_PAGEDOWN,
            KeyCode::End => Key::KEY_END, KeyCode::Home => Key::KEY_HOME,
            KeyCode::Insert => Key::KEY_INSERT, KeyCode::Delete => Key::KEY_DELETE,
            KeyCode::ArrowLeft => Key::KEY_LEFT, KeyCode::ArrowRight => Key::KEY_RIGHT,
            KeyCode::ArrowUp => Key::KEY_UP, KeyCode::ArrowDown => Key::KEY_DOWN,
            KeyCode::Pause => Key::KEY_PAUSE, KeyCode::CapsLock => Key::KEY_CAPSLOCK,
            _ => return None,
        })
    }

}

#[cfg(not(all(target_os = "linux", feature = "global-input")))]
mod unsupported {
    use crate::engine::InputId;
    use crate::overlay::input::InputSampler;

    /// Placeholder for builds without device-level input; never opens.
    pub struct GlobalInput {
        _private: (),
    }

    impl GlobalInput {
        pub fn open() -> Option<Self> {
            None
        }

        pub fn device_count(&self) -> usize {
            0
        }

        pub fn refresh(&mut self) {}
    }

    impl InputSampler for GlobalInput {
        fn is_pressed(&self, _id: InputId) -> bool {
            false
        }
    }
}
