use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

pub const PITCH_LIMIT: f32 = FRAC_PI_2;

/// Orientation for pitch/yaw/roll stored as `(x, y, z)`.
/// Roll is applied first, then pitch, then yaw.
pub fn orientation_from_euler(pitch_yaw_roll: Vec3) -> Quat {
    Quat::from_rotation_y(pitch_yaw_roll.y)
        * Quat::from_rotation_x(pitch_yaw_roll.x)
        * Quat::from_rotation_z(pitch_yaw_roll.z)
}

pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Wraps into `[-PI, PI)`.
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}
