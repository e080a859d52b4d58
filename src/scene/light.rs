use glam::Vec3;
use serde::{Deserialize, Serialize};

pub const LIGHT_TYPE_DIRECTIONAL: u32 = 0;
pub const LIGHT_TYPE_POINT: u32 = 1;
pub const LIGHT_TYPE_SPOT: u32 = 2;

/// Light data for the GPU, 64 bytes to stay on 16-byte boundaries
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightData {
    pub kind: u32,
    pub direction: [f32; 3],
    pub range: f32,
    pub position: [f32; 3],
    pub intensity: f32,
    pub color: [f32; 3],
    pub spot_inner_angle: f32,
    pub spot_outer_angle: f32,
    pub _pad: [f32; 2],
}

/// Scene light. Angles are cone half-angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Light {
    Directional {
        direction: Vec3,
        color: Vec3,
        intensity: f32,
    },
    Point {
        position: Vec3,
        range: f32,
        color: Vec3,
        intensity: f32,
    },
    Spot {
        position: Vec3,
        direction: Vec3,
        range: f32,
        color: Vec3,
        intensity: f32,
        inner_angle: f32,
        outer_angle: f32,
    },
}

impl Light {
    pub fn kind(&self) -> u32 {
        match self {
            Light::Directional { .. } => LIGHT_TYPE_DIRECTIONAL,
            Light::Point { .. } => LIGHT_TYPE_POINT,
            Light::Spot { .. } => LIGHT_TYPE_SPOT,
        }
    }

    pub fn to_gpu(&self) -> LightData {
        let mut data = LightData {
            kind: self.kind(),
            ..<LightData as bytemuck::Zeroable>::zeroed()
        };

        match *self {
            Light::Directional {
                direction,
                color,
                intensity,
            } => {
                data.direction = direction.normalize_or_zero().to_array();
                data.color = color.to_array();
                data.intensity = intensity;
            }
            Light::Point {
                position,
                range,
                color,
                intensity,
            } => {
                data.position = position.to_array();
                data.range = range;
                data.color = color.to_array();
                data.intensity = intensity;
            }
            Light::Spot {
                position,
                direction,
                range,
                color,
                intensity,
                inner_angle,
                outer_angle,
            } => {
                data.position = position.to_array();
                data.direction = direction.normalize_or_zero().to_array();
                data.range = range;
                data.color = color.to_array();
                data.intensity = intensity;
                data.spot_inner_angle = inner_angle;
                data.spot_outer_angle = outer_angle.max(inner_angle);
            }
        }

        data
    }
}
