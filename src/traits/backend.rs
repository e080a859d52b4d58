use crate::scene::{LightData, Material, Mesh};
use crate::types::{FrameUniform, ObjectUniform};

/// One entity's draw for the current frame
#[derive(Debug, Clone, Copy)]
pub struct DrawCall<'a> {
    pub entity: usize,
    pub mesh: &'a Mesh,
    pub material: &'a Material,
    pub object: ObjectUniform,
}

/// Rendering backend - receives up-to-date matrices once per frame
pub trait RenderBackend {
    /// Start a frame with the active camera's matrices and the scene lights
    fn begin_frame(&mut self, frame: &FrameUniform, lights: &[LightData]);

    /// Queue one entity
    fn draw(&mut self, call: DrawCall<'_>);

    /// Submit and present the frame
    fn end_frame(&mut self) -> anyhow::Result<()>;
}
