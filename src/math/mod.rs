mod euler;
mod viewport;

pub use euler::{clamp_pitch, orientation_from_euler, wrap_angle, PITCH_LIMIT};
pub use viewport::aspect_ratio;
