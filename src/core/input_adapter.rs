use std::collections::HashSet;
use glam::IVec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{Button, Controller};

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Last cursor position, snapped to whole pixels
    cursor_position: Option<IVec2>,
    /// Cursor movement since last reset
    pointer_delta: IVec2,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            cursor_position: None,
            pointer_delta: IVec2::ZERO,
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = Self::mouse_button_to_button(*button) {
                    self.set_button(button, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(IVec2::new(position.x.round() as i32, position.y.round() as i32));
            }
            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => {
                // Re-entry must not register as one large jump
                self.cursor_position = None;
            }
            _ => {}
        }
    }

    fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    fn move_cursor(&mut self, position: IVec2) {
        if let Some(old) = self.cursor_position {
            self.pointer_delta += position - old;
        }
        self.cursor_position = Some(position);
    }

    /// Reset per-frame state (pointer delta)
    /// Call this at the end of each frame after the camera has polled input
    pub fn reset_deltas(&mut self) {
        self.pointer_delta = IVec2::ZERO;
    }

    /// Release everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
        self.reset_deltas();
    }

    pub fn cursor_position(&self) -> Option<IVec2> {
        self.cursor_position
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn pointer_delta(&self) -> IVec2 {
        self.pointer_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit event construction requires internal fields that are not publicly accessible,
    // so these go through the private helpers instead

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys().len(), 0);
        assert_eq!(controller.cursor_position(), None);
        assert_eq!(controller.pointer_delta(), IVec2::ZERO);
    }

    #[test]
    fn test_first_cursor_sample_has_no_delta() {
        let mut controller = WinitController::new();
        controller.move_cursor(IVec2::new(100, 200));

        assert_eq!(controller.pointer_delta(), IVec2::ZERO);
        assert_eq!(controller.cursor_position(), Some(IVec2::new(100, 200)));
    }

    #[test]
    fn test_cursor_deltas_accumulate_until_reset() {
        let mut controller = WinitController::new();
        controller.move_cursor(IVec2::new(100, 200));
        controller.move_cursor(IVec2::new(104, 198));
        controller.move_cursor(IVec2::new(110, 195));

        assert_eq!(controller.pointer_delta(), IVec2::new(10, -5));

        controller.reset_deltas();
        assert_eq!(controller.pointer_delta(), IVec2::ZERO);
        assert_eq!(controller.cursor_position(), Some(IVec2::new(110, 195)));
    }

    #[test]
    fn test_press_and_release() {
        let mut controller = WinitController::new();
        controller.set_button(Button::MouseLeft, ElementState::Pressed);
        controller.set_button(Button::MouseLeft, ElementState::Pressed);
        assert_eq!(controller.get_down_keys(), &[Button::MouseLeft]);

        controller.set_button(Button::MouseLeft, ElementState::Released);
        assert!(!controller.is_down(Button::MouseLeft));
        assert!(controller.get_down_keys().is_empty());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(WinitController::keycode_to_button(KeyCode::ShiftRight), Some(Button::Shift));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyQ), None);
        assert_eq!(
            WinitController::mouse_button_to_button(MouseButton::Left),
            Some(Button::MouseLeft)
        );
    }

    #[test]
    fn test_clear() {
        let mut controller = WinitController::new();
        controller.set_button(Button::KeyW, ElementState::Pressed);
        controller.move_cursor(IVec2::ZERO);
        controller.move_cursor(IVec2::new(3, 3));

        controller.clear();
        assert!(controller.get_down_keys().is_empty());
        assert_eq!(controller.pointer_delta(), IVec2::ZERO);
    }
}
