use bevy::input::keyboard::KeyCode;
use bevy::input::mouse::MouseButton;
use thiserror::Error;

use crate::engine::keymap;

/// The physical input a binding listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputId {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputId {
    pub fn is_keyboard(&self) -> bool {
        matches!(self, InputId::Keyboard(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("Invalid key {0}")]
    UnknownIdentifier(String),

    #[error("Empty key identifier")]
    EmptyIdentifier,
}

/// A tracked key or mouse button with the text drawn on its square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub id: InputId,
    pub label: String,
}

impl Binding {
    /// Resolve a config identifier. Keyboard names win over mouse buttons, so
    /// `M` is the M key while `mLeft` is the left mouse button. Mouse names
    /// take any one-character prefix, conventionally `m`. A non-empty `label`
    /// replaces the default label.
    pub fn new(identifier: &str, label: Option<&str>) -> Result<Self, BindingError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(BindingError::EmptyIdentifier);
        }

        let (id, default_label) = if let Some(key) = keymap::keyboard_key(identifier) {
            (InputId::Keyboard(key), identifier)
        } else {
            let button_name = strip_mouse_prefix(identifier)
                .ok_or_else(|| BindingError::UnknownIdentifier(identifier.to_string()))?;
            let button = keymap::mouse_button(button_name)
                .ok_or_else(|| BindingError::UnknownIdentifier(identifier.to_string()))?;
            (InputId::Mouse(button), button_name)
        };

        let label = label
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(default_label)
            .to_string();

        Ok(Self { id, label })
    }
}

fn strip_mouse_prefix(identifier: &str) -> Option<&str> {
    let mut chars = identifier.chars();
    chars.next()?;
    Some(chars.as_str()).filter(|rest| !rest.is_empty())
}
