use glam::{Mat4, Quat, Vec3};

use crate::math::{clamp_pitch, orientation_from_euler};

/// Local position, Euler rotation and scale of one entity or camera.
///
/// Rotation is stored as `(pitch, yaw, roll)` in radians. Pitch is kept within
/// `[-PI/2, PI/2]` by every mutator.
///
/// The world matrix places scale and rotation before translation. In glam's
/// column-vector form that is `T * R * S`; its column-major array is the
/// row-major array of the row-vector product `S * R * T`.
#[derive(Debug, Clone)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
    world: Mat4,
    world_inverse_transpose: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            world: Mat4::IDENTITY,
            world_inverse_transpose: Mat4::IDENTITY,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.set_position(position);
        self
    }

    pub fn with_rotation(mut self, pitch_yaw_roll: Vec3) -> Self {
        self.set_rotation(pitch_yaw_roll);
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.set_scale(scale);
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn pitch_yaw_roll(&self) -> Vec3 {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, pitch_yaw_roll: Vec3) {
        self.rotation = pitch_yaw_roll;
        self.rotation.x = clamp_pitch(self.rotation.x);
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Offset in world axes.
    pub fn move_absolute(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Offset in the transform's own axes: `+Z` is always its current forward.
    pub fn move_relative(&mut self, offset: Vec3) {
        self.position += self.orientation() * offset;
    }

    pub fn rotate(&mut self, delta: Vec3) {
        self.rotation += delta;
        self.rotation.x = clamp_pitch(self.rotation.x);
    }

    /// Multiplies the current scale component-wise.
    pub fn scale_by(&mut self, factor: Vec3) {
        self.scale *= factor;
    }

    pub fn orientation(&self) -> Quat {
        orientation_from_euler(self.rotation)
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::Z
    }

    pub fn up(&self) -> Vec3 {
        self.orientation() * Vec3::Y
    }

    pub fn right(&self) -> Vec3 {
        self.orientation() * Vec3::X
    }

    /// Recalculates and returns the world matrix.
    ///
    /// Also refreshes the value returned by
    /// [`world_inverse_transpose_matrix`](Self::world_inverse_transpose_matrix).
    pub fn world_matrix(&mut self) -> Mat4 {
        self.recalculate_world_matrix();
        self.world
    }

    /// Normal matrix from the most recent [`world_matrix`](Self::world_matrix) call.
    ///
    /// A zero scale component makes the world matrix singular; the result is then
    /// non-finite and passed through as is.
    pub fn world_inverse_transpose_matrix(&self) -> Mat4 {
        self.world_inverse_transpose
    }

    pub fn recalculate_world_matrix(&mut self) {
        self.world =
            Mat4::from_scale_rotation_translation(self.scale, self.orientation(), self.position);
        self.world_inverse_transpose = self.world.inverse().transpose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_transform_default() {
        let t = Transform::default();
        assert_eq!(t.position(), Vec3::ZERO);
        assert_eq!(t.pitch_yaw_roll(), Vec3::ZERO);
        assert_eq!(t.scale(), Vec3::ONE);
        assert_eq!(t.world_inverse_transpose_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_builder_clamps_pitch() {
        let t = Transform::new().with_rotation(Vec3::new(3.0, 1.0, 0.5));
        assert_eq!(t.pitch_yaw_roll(), Vec3::new(FRAC_PI_2, 1.0, 0.5));
    }

    #[test]
    fn test_inverse_transpose_is_stale_until_world_read() {
        let mut t = Transform::new();
        t.set_scale(Vec3::new(2.0, 1.0, 1.0));
        assert_eq!(t.world_inverse_transpose_matrix(), Mat4::IDENTITY);

        t.world_matrix();
        assert_ne!(t.world_inverse_transpose_matrix(), Mat4::IDENTITY);
    }
}
