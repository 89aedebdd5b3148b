//! Pointer input delivered to the editor.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { x: i32, y: i32, button: MouseButton },
    Up { x: i32, y: i32, button: MouseButton },
    Move { x: i32, y: i32 },
}

impl PointerEvent {
    /// A left-button press at `(x, y)`.
    pub fn press(x: i32, y: i32) -> Self {
        PointerEvent::Down {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        match *self {
            PointerEvent::Down { x, y, .. }
            | PointerEvent::Up { x, y, .. }
            | PointerEvent::Move { x, y } => (x, y),
        }
    }
}

/// Tracks pointer position and held buttons across events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last known pointer position.
    pub pointer_position: (i32, i32),
    pressed_buttons: HashSet<MouseButton>,
    /// Position of the most recent press, if a button is held.
    pub press_origin: Option<(i32, i32)>,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a pointer event.
    /// Returns true when the event starts a new press (the button was not held).
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        self.pointer_position = event.position();
        match event {
            PointerEvent::Down { x, y, button } => {
                let fresh = self.pressed_buttons.insert(button);
                if fresh {
                    self.press_origin = Some((x, y));
                }
                fresh
            }
            PointerEvent::Up { button, .. } => {
                self.pressed_buttons.remove(&button);
                if self.pressed_buttons.is_empty() {
                    self.press_origin = None;
                }
                false
            }
            PointerEvent::Move { .. } => false,
        }
    }

    /// Check if a button is currently pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }
}
