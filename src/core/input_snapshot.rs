use glam::IVec2;

use crate::traits::{Button, Controller};

/// Fixed input state, for scripted runs and tests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pressed: Vec<Button>,
    pointer_delta: IVec2,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_button(mut self, button: Button) -> Self {
        self.press(button);
        self
    }

    pub fn with_pointer_delta(mut self, delta: IVec2) -> Self {
        self.pointer_delta = delta;
        self
    }

    pub fn press(&mut self, button: Button) {
        if !self.pressed.contains(&button) {
            self.pressed.push(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        self.pressed.retain(|&b| b != button);
    }
}

impl FromIterator<Button> for InputSnapshot {
    fn from_iter<I: IntoIterator<Item = Button>>(buttons: I) -> Self {
        buttons
            .into_iter()
            .fold(Self::new(), |snapshot, button| snapshot.with_button(button))
    }
}

impl Controller for InputSnapshot {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed
    }

    fn pointer_delta(&self) -> IVec2 {
        self.pointer_delta
    }
}
