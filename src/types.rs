use glam::{Mat4, Vec3, Vec4};
use serde::Serialize;

/// Per-frame camera and lighting data for the GPU
///
/// Matrices are row-major for row-vector shaders (`mul(v, M)`).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub time: f32,
    pub ambient: [f32; 3],
    pub light_count: u32,
}

impl FrameUniform {
    pub fn new(view: Mat4, projection: Mat4, camera_position: Vec3, time: f32) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            camera_position: camera_position.to_array(),
            time,
            ambient: [0.0; 3],
            light_count: 0,
        }
    }

    pub fn with_lighting(mut self, ambient: Vec3, light_count: usize) -> Self {
        self.ambient = ambient.to_array();
        self.light_count = light_count as u32;
        self
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.projection)
    }
}

/// Per-entity data for the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub world: [[f32; 4]; 4],
    pub world_inverse_transpose: [[f32; 4]; 4],
    pub color_tint: [f32; 4],
    pub roughness: f32,
    pub _pad: [f32; 3],
}

impl ObjectUniform {
    pub fn new(world: Mat4, world_inverse_transpose: Mat4, color_tint: Vec4, roughness: f32) -> Self {
        Self {
            world: world.to_cols_array_2d(),
            world_inverse_transpose: world_inverse_transpose.to_cols_array_2d(),
            color_tint: color_tint.to_array(),
            roughness,
            _pad: [0.0; 3],
        }
    }

    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.world)
    }

    pub fn world_inverse_transpose_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.world_inverse_transpose)
    }
}
