//! Keyboard and mouse polling
//!
//! Input is re-read from macroquad every frame and handed to the
//! simulation as a plain `Intents` record. Nothing is latched or
//! buffered here; the fire cooldown lives in the simulation and click
//! hit-testing in the state machine.

use macroquad::prelude::*;

/// What the player is asking for this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Intents {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Read the held keys for this frame.
pub fn poll_intents() -> Intents {
    Intents {
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        fire: is_key_down(KeyCode::Space),
    }
}

/// Position of a left click that started this frame, if any. The window
/// is fixed at the surface size, so these are surface coordinates.
pub fn pointer_click() -> Option<(f32, f32)> {
    if is_mouse_button_pressed(MouseButton::Left) {
        Some(mouse_position())
    } else {
        None
    }
}
