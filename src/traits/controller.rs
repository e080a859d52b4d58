use clap::ValueEnum;
use glam::IVec2;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    Shift,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Controller - polled input state for the current frame
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Pointer movement in whole pixels since the last poll
    fn pointer_delta(&self) -> IVec2;
}
