//! Scene state: shared assets, entities, lights and cameras.

mod animation;
mod assets;
mod entity;
mod light;
mod material;
mod mesh;

pub use animation::{Animator, Motion};
pub use assets::{Assets, MaterialId, MeshId};
pub use entity::Entity;
pub use light::{Light, LightData, LIGHT_TYPE_DIRECTIONAL, LIGHT_TYPE_POINT, LIGHT_TYPE_SPOT};
pub use material::Material;
pub use mesh::{Mesh, Vertex};

use glam::Vec3;

use crate::camera::Camera;
use crate::math::aspect_ratio;
use crate::traits::Controller;

#[derive(Debug, Default)]
pub struct Scene {
    pub assets: Assets,
    entities: Vec<Entity>,
    cameras: Vec<Camera>,
    active_camera: usize,
    lights: Vec<Light>,
    ambient: Vec3,
}

impl Scene {
    pub fn new(assets: Assets) -> Self {
        Self {
            assets,
            ..Self::default()
        }
    }

    pub fn add_entity(&mut self, entity: Entity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn entity_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    /// Mutable entities alongside the assets they reference
    pub fn entities_with_assets(&mut self) -> (&mut [Entity], &Assets) {
        (&mut self.entities, &self.assets)
    }

    pub fn add_camera(&mut self, camera: Camera) -> usize {
        self.cameras.push(camera);
        self.cameras.len() - 1
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn active_camera_index(&self) -> usize {
        self.active_camera
    }

    /// Out-of-range indices are ignored and the current camera stays active
    pub fn set_active_camera(&mut self, index: usize) -> bool {
        if index >= self.cameras.len() {
            log::warn!(
                "camera {} does not exist ({} cameras), keeping camera {}",
                index,
                self.cameras.len(),
                self.active_camera
            );
            return false;
        }
        self.active_camera = index;
        log::info!("active camera: {}", index);
        true
    }

    pub fn next_camera(&mut self) {
        if !self.cameras.is_empty() {
            self.set_active_camera((self.active_camera + 1) % self.cameras.len());
        }
    }

    pub fn active_camera(&self) -> Option<&Camera> {
        self.cameras.get(self.active_camera)
    }

    pub fn active_camera_mut(&mut self) -> Option<&mut Camera> {
        self.cameras.get_mut(self.active_camera)
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn ambient(&self) -> Vec3 {
        self.ambient
    }

    pub fn set_ambient(&mut self, ambient: Vec3) {
        self.ambient = ambient;
    }

    /// Rebuilds every camera's projection for a new surface size.
    /// A zero-sized surface (minimized window) leaves projections untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        let Some(aspect) = aspect_ratio(width, height) else {
            log::debug!("ignoring resize to {}x{}", width, height);
            return;
        };

        log::debug!("resize to {}x{} (aspect {:.3})", width, height, aspect);
        for camera in &mut self.cameras {
            camera.update_projection_matrix(aspect);
        }
    }

    /// Camera input first, then entity animation
    pub fn update<C: Controller + ?Sized>(&mut self, delta_time: f32, input: &C) {
        if let Some(camera) = self.cameras.get_mut(self.active_camera) {
            camera.update(delta_time, input);
        }

        for entity in &mut self.entities {
            entity.update(delta_time);
        }
    }
}
