use glam::{Mat4, Vec3};

use crate::math::wrap_angle;
use crate::traits::{Button, Controller};
use crate::transform::Transform;

pub const NEAR_PLANE: f32 = 0.05;
pub const FAR_PLANE: f32 = 900.0;
pub const LOOK_PITCH_SENSITIVITY: f32 = 0.025;
pub const LOOK_YAW_SENSITIVITY: f32 = 0.01;

const PARALLEL_EPSILON: f32 = 1e-6;

const MOVEMENT_KEYS: [(Button, Vec3); 6] = [
    (Button::KeyW, Vec3::Z),
    (Button::KeyS, Vec3::NEG_Z),
    (Button::KeyD, Vec3::X),
    (Button::KeyA, Vec3::NEG_X),
    (Button::Space, Vec3::Y),
    (Button::Shift, Vec3::NEG_Y),
];

/// Free-flying perspective camera.
///
/// View and projection are rebuilt whenever they are read, so a read always
/// reflects the current transform, fov and aspect ratio.
#[derive(Debug, Clone)]
pub struct Camera {
    transform: Transform,
    fov: f32,
    movespeed: f32,
    aspect_ratio: f32,
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    /// `fov` is the vertical field of view in radians, `movespeed` is in units per second.
    pub fn new(position: Vec3, fov: f32, movespeed: f32, aspect_ratio: f32) -> Self {
        let mut camera = Self {
            transform: Transform::new().with_position(position),
            fov,
            movespeed,
            aspect_ratio,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix(aspect_ratio);
        camera.update_view_matrix();
        camera
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    pub fn forward(&self) -> Vec3 {
        self.transform.forward()
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    pub fn movespeed(&self) -> f32 {
        self.movespeed
    }

    pub fn set_movespeed(&mut self, movespeed: f32) {
        self.movespeed = movespeed;
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Applies one frame of polled input.
    ///
    /// Movement keys add up without normalization. Look input only applies while
    /// the left pointer button is held.
    pub fn update<C: Controller + ?Sized>(&mut self, delta_time: f32, input: &C) {
        let step = self.movespeed * delta_time;
        for (button, direction) in MOVEMENT_KEYS {
            if input.is_down(button) {
                self.transform.move_relative(direction * step);
            }
        }

        if input.is_down(Button::MouseLeft) {
            let delta = input.pointer_delta().as_vec2();
            self.transform.rotate(Vec3::new(
                delta.y * LOOK_PITCH_SENSITIVITY,
                delta.x * LOOK_YAW_SENSITIVITY,
                0.0,
            ));

            let mut rotation = self.transform.pitch_yaw_roll();
            rotation.y = wrap_angle(rotation.y);
            self.transform.set_rotation(rotation);
        }

        self.update_view_matrix();
    }

    /// Looking straight up or down, forward is parallel to world up; the
    /// camera's own up vector keeps the view basis finite there.
    pub fn update_view_matrix(&mut self) {
        let forward = self.transform.forward();
        let up = if forward.cross(Vec3::Y).length_squared() < PARALLEL_EPSILON {
            self.transform.up()
        } else {
            Vec3::Y
        };
        self.view = Mat4::look_to_lh(self.transform.position(), forward, up);
    }

    /// Called on construction and whenever the output surface is resized.
    pub fn update_projection_matrix(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
        self.projection = Mat4::perspective_lh(self.fov, aspect_ratio, NEAR_PLANE, FAR_PLANE);
    }

    pub fn view_matrix(&mut self) -> Mat4 {
        self.update_view_matrix();
        self.view
    }

    pub fn projection_matrix(&mut self) -> Mat4 {
        self.update_projection_matrix(self.aspect_ratio);
        self.projection
    }

    pub fn view_projection_matrix(&mut self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputSnapshot;
    use glam::IVec2;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_new_camera_faces_world_forward() {
        let camera = Camera::new(Vec3::ZERO, FRAC_PI_2, 5.0, 1.0);
        assert!(camera.forward().abs_diff_eq(Vec3::Z, EPSILON));
        assert_eq!(camera.movespeed(), 5.0);
    }

    #[test]
    fn test_look_requires_mouse_button() {
        let mut camera = Camera::new(Vec3::ZERO, FRAC_PI_2, 5.0, 1.0);
        let input = InputSnapshot::new().with_pointer_delta(IVec2::new(40, 40));

        camera.update(0.016, &input);

        assert_eq!(camera.transform().pitch_yaw_roll(), Vec3::ZERO);
    }

    #[test]
    fn test_look_sensitivity() {
        let mut camera = Camera::new(Vec3::ZERO, FRAC_PI_2, 5.0, 1.0);
        let input = InputSnapshot::new()
            .with_button(Button::MouseLeft)
            .with_pointer_delta(IVec2::new(10, 4));

        camera.update(0.016, &input);

        let rotation = camera.transform().pitch_yaw_roll();
        assert!((rotation.x - 0.1).abs() < EPSILON);
        assert!((rotation.y - 0.1).abs() < EPSILON);
        assert_eq!(rotation.z, 0.0);
    }

    #[test]
    fn test_yaw_wraps() {
        let mut camera = Camera::new(Vec3::ZERO, FRAC_PI_2, 5.0, 1.0);
        let input = InputSnapshot::new()
            .with_button(Button::MouseLeft)
            .with_pointer_delta(IVec2::new(400, 0));

        camera.update(0.016, &input);

        let yaw = camera.transform().pitch_yaw_roll().y;
        assert!((-PI..PI).contains(&yaw));
        assert!((yaw - (4.0 - 2.0 * PI)).abs() < 1e-4);
    }

    #[test]
    fn test_diagonal_movement_is_not_normalized() {
        let mut camera = Camera::new(Vec3::ZERO, FRAC_PI_2, 2.0, 1.0);
        let input = InputSnapshot::new()
            .with_button(Button::KeyW)
            .with_button(Button::KeyD);

        camera.update(1.0, &input);

        assert!(camera.position().abs_diff_eq(Vec3::new(2.0, 0.0, 2.0), EPSILON));
    }
}
