use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::wrap_angle;
use crate::transform::Transform;

/// Per-frame motion driven through an entity's transform setters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Motion {
    /// Bounces an offset between `-extent` and `extent` along `axis`,
    /// relative to the position the entity had when the motion started
    Oscillate { axis: Vec3, extent: f32, speed: f32 },
    /// Bounces a uniform XY scale between `min` and `max`; `mirror` flips X and Y
    Pulse {
        min: f32,
        max: f32,
        speed: f32,
        #[serde(default)]
        mirror: bool,
    },
    /// Constant angular rate in radians per second as (pitch, yaw, roll).
    /// Pitch is clamped to ±π/2 and cannot turn continuously, so the pitch
    /// rate is ignored; scene files reject a non-zero one.
    Spin { rate: Vec3 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    motion: Motion,
    value: f32,
    direction: f32,
    angles: Vec3,
    origin: Option<Vec3>,
}

impl Animator {
    pub fn new(motion: Motion) -> Self {
        let value = match motion {
            Motion::Pulse { min, max, .. } => 1.0_f32.clamp(min.min(max), max.max(min)),
            _ => 0.0,
        };

        Self {
            motion,
            value,
            direction: 1.0,
            angles: Vec3::ZERO,
            origin: None,
        }
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn apply(&mut self, delta_time: f32, transform: &mut Transform) {
        match self.motion {
            Motion::Oscillate { axis, extent, speed } => {
                let origin = *self.origin.get_or_insert(transform.position());
                self.bounce(speed * delta_time, -extent, extent);
                transform.set_position(origin + axis * self.value);
            }
            Motion::Pulse {
                min,
                max,
                speed,
                mirror,
            } => {
                self.bounce(speed * delta_time, min, max);
                let sign = if mirror { -1.0 } else { 1.0 };
                let s = self.value * sign;
                transform.set_scale(Vec3::new(s, s, transform.scale().z));
            }
            Motion::Spin { rate } => {
                let origin = *self.origin.get_or_insert(transform.pitch_yaw_roll());
                let angles = self.angles + Vec3::new(0.0, rate.y, rate.z) * delta_time;
                self.angles = Vec3::new(0.0, wrap_angle(angles.y), wrap_angle(angles.z));
                transform.set_rotation(origin + self.angles);
            }
        }
    }

    fn bounce(&mut self, step: f32, low: f32, high: f32) {
        self.value += step * self.direction;
        if self.value >= high {
            self.direction = -1.0;
        } else if self.value <= low {
            self.direction = 1.0;
        }
    }
}
