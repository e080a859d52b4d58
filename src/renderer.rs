use std::collections::VecDeque;

use anyhow::{bail, Result};
use serde::Serialize;

use crate::frame::FrameInfo;
use crate::scene::{LightData, Scene};
use crate::traits::{DrawCall, RenderBackend};
use crate::types::{FrameUniform, ObjectUniform};

/// Counters for one rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub draw_calls: usize,
    pub skipped: usize,
}

/// Drives one frame: active camera matrices first, then every entity's world matrices
#[derive(Debug, Default)]
pub struct Renderer {
    frames_rendered: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Hands the scene to the backend for one frame.
    ///
    /// Must run after all of the frame's transform mutations; every matrix is
    /// recomputed from the state at call time.
    pub fn render_frame<B: RenderBackend + ?Sized>(
        &mut self,
        scene: &mut Scene,
        frame: FrameInfo,
        backend: &mut B,
    ) -> Result<FrameStats> {
        let ambient = scene.ambient();
        let lights: Vec<LightData> = scene.lights().iter().map(|l| l.to_gpu()).collect();

        let Some(camera) = scene.active_camera_mut() else {
            bail!("scene has no camera to render from");
        };
        let frame_uniform = FrameUniform::new(
            camera.view_matrix(),
            camera.projection_matrix(),
            camera.position(),
            frame.time,
        )
        .with_lighting(ambient, lights.len());

        backend.begin_frame(&frame_uniform, &lights);

        let mut stats = FrameStats::default();
        let (entities, assets) = scene.entities_with_assets();
        for (index, entity) in entities.iter_mut().enumerate() {
            let (Some(mesh), Some(material)) =
                (assets.mesh(entity.mesh()), assets.material(entity.material()))
            else {
                log::warn!("entity {} references a missing mesh or material, skipped", index);
                stats.skipped += 1;
                continue;
            };

            let transform = entity.transform_mut();
            let world = transform.world_matrix();
            let object = ObjectUniform::new(
                world,
                transform.world_inverse_transpose_matrix(),
                material.color_tint(),
                material.roughness(),
            );

            backend.draw(DrawCall {
                entity: index,
                mesh,
                material,
                object,
            });
            stats.draw_calls += 1;
        }

        backend.end_frame()?;
        self.frames_rendered += 1;
        Ok(stats)
    }
}

/// A draw as seen by [`RecordingBackend`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedDraw {
    pub entity: usize,
    pub mesh: String,
    pub material: String,
    pub shader: String,
    pub index_count: usize,
    pub object: ObjectUniform,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedFrame {
    pub frame: FrameUniform,
    pub lights: Vec<LightData>,
    pub draws: Vec<RecordedDraw>,
}

/// Backend that keeps the most recent frames in memory, for headless runs and tests
#[derive(Debug)]
pub struct RecordingBackend {
    capacity: usize,
    frames: VecDeque<RecordedFrame>,
    pending: Option<RecordedFrame>,
    presented: u64,
}

impl RecordingBackend {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            frames: VecDeque::new(),
            pending: None,
            presented: 0,
        }
    }

    pub fn frames(&self) -> impl Iterator<Item = &RecordedFrame> {
        self.frames.iter()
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.back()
    }

    pub fn frames_presented(&self) -> u64 {
        self.presented
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RenderBackend for RecordingBackend {
    fn begin_frame(&mut self, frame: &FrameUniform, lights: &[LightData]) {
        self.pending = Some(RecordedFrame {
            frame: *frame,
            lights: lights.to_vec(),
            draws: Vec::new(),
        });
    }

    fn draw(&mut self, call: DrawCall<'_>) {
        if let Some(pending) = &mut self.pending {
            pending.draws.push(RecordedDraw {
                entity: call.entity,
                mesh: call.mesh.name().to_string(),
                material: call.material.name().to_string(),
                shader: call.material.shader().to_string(),
                index_count: call.mesh.index_count(),
                object: call.object,
            });
        }
    }

    fn end_frame(&mut self) -> Result<()> {
        let Some(frame) = self.pending.take() else {
            bail!("end_frame called without begin_frame");
        };
        if self.frames.len() == self.capacity {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
        self.presented += 1;
        Ok(())
    }
}

/// Backend that only reports what it would draw, at trace level
#[derive(Debug, Default)]
pub struct LogBackend {
    draws_this_frame: usize,
    indices_this_frame: usize,
}

impl RenderBackend for LogBackend {
    fn begin_frame(&mut self, frame: &FrameUniform, lights: &[LightData]) {
        self.draws_this_frame = 0;
        self.indices_this_frame = 0;
        log::trace!(
            "frame at t={:.3}s, camera {:?}, {} lights",
            frame.time,
            frame.camera_position,
            lights.len()
        );
    }

    fn draw(&mut self, call: DrawCall<'_>) {
        self.draws_this_frame += 1;
        self.indices_this_frame += call.mesh.index_count();
        log::trace!(
            "  entity {} mesh={} material={} world row 3 = {:?}",
            call.entity,
            call.mesh.name(),
            call.material.name(),
            call.object.world[3]
        );
    }

    fn end_frame(&mut self) -> Result<()> {
        log::trace!(
            "presented {} draws ({} indices)",
            self.draws_this_frame,
            self.indices_this_frame
        );
        Ok(())
    }
}
