// Input module - host keyboard/gamepad to Controller button translation
//
// The Controller itself is a shift-register latch (`controller::Controller`);
// this module only knows how to turn host input events into the
// `(button_id, pressed)` pairs the Frame Loop feeds it.

use crate::controller::{
    BUTTON_A, BUTTON_B, BUTTON_DOWN, BUTTON_LEFT, BUTTON_RIGHT, BUTTON_SELECT, BUTTON_START,
    BUTTON_UP,
};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keyboard-to-button mapping for a single player.
#[derive(Debug, Clone)]
pub struct KeyboardMapping {
    pub button_a: KeyCode,
    pub button_b: KeyCode,
    pub select: KeyCode,
    pub start: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl KeyboardMapping {
    /// Arrow keys for the D-pad, X/Z for A/B, Enter/Right Shift for Start/Select.
    pub fn default_player1() -> Self {
        KeyboardMapping {
            button_a: KeyCode::KeyX,
            button_b: KeyCode::KeyZ,
            select: KeyCode::ShiftRight,
            start: KeyCode::Enter,
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
        }
    }

    /// Translate a physical key into a controller button id, if mapped.
    pub fn translate(&self, key: PhysicalKey) -> Option<usize> {
        let PhysicalKey::Code(code) = key else {
            return None;
        };
        match code {
            c if c == self.button_a => Some(BUTTON_A),
            c if c == self.button_b => Some(BUTTON_B),
            c if c == self.select => Some(BUTTON_SELECT),
            c if c == self.start => Some(BUTTON_START),
            c if c == self.up => Some(BUTTON_UP),
            c if c == self.down => Some(BUTTON_DOWN),
            c if c == self.left => Some(BUTTON_LEFT),
            c if c == self.right => Some(BUTTON_RIGHT),
            _ => None,
        }
    }
}

impl Default for KeyboardMapping {
    fn default() -> Self {
        Self::default_player1()
    }
}

/// Translate a `gilrs` standard-gamepad button into a controller button id.
pub fn translate_gamepad_button(button: gilrs::Button) -> Option<usize> {
    use gilrs::Button;
    match button {
        Button::South => Some(BUTTON_A),
        Button::East => Some(BUTTON_B),
        Button::Select => Some(BUTTON_SELECT),
        Button::Start => Some(BUTTON_START),
        Button::DPadUp => Some(BUTTON_UP),
        Button::DPadDown => Some(BUTTON_DOWN),
        Button::DPadLeft => Some(BUTTON_LEFT),
        Button::DPadRight => Some(BUTTON_RIGHT),
        _ => None,
    }
}
