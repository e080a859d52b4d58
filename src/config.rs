//! Scene description files.
//!
//! A scene file is JSON; every section is optional and falls back to the
//! built-in demo layout. Angles in the file are in degrees, except entity and
//! camera rotations, which are radians like [`Transform`].

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::math::aspect_ratio;
use crate::scene::{Animator, Assets, Entity, Light, Material, Motion, Scene};
use crate::transform::Transform;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Scene Renderer".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    pub fov_degrees: f32,
    pub movespeed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialConfig {
    pub name: String,
    pub color_tint: Vec4,
    pub roughness: f32,
    #[serde(default = "default_shader")]
    pub shader: String,
}

fn default_shader() -> String {
    Material::DEFAULT_SHADER.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityConfig {
    pub mesh: String,
    pub material: String,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
    #[serde(default)]
    pub motion: Option<Motion>,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub cameras: Vec<CameraConfig>,
    pub active_camera: usize,
    pub materials: Vec<MaterialConfig>,
    pub entities: Vec<EntityConfig>,
    pub lights: Vec<Light>,
    pub ambient: Vec3,
}

impl Default for SceneConfig {
    fn default() -> Self {
        crate::scenes::demo()
    }
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse scene file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the runtime scene; every camera starts with the window's aspect ratio
    pub fn build(&self) -> Result<Scene> {
        let aspect = aspect_ratio(self.window.width, self.window.height).ok_or_else(|| {
            anyhow!("window size {}x{} is empty", self.window.width, self.window.height)
        })?;
        if self.cameras.is_empty() {
            bail!("scene defines no cameras");
        }
        if self.active_camera >= self.cameras.len() {
            bail!(
                "active camera {} out of range ({} cameras)",
                self.active_camera,
                self.cameras.len()
            );
        }

        let mut assets = Assets::new();
        for material in &self.materials {
            if assets.find_material(&material.name).is_some() {
                bail!("material '{}' is defined twice", material.name);
            }
            assets.add_material(
                Material::new(material.name.as_str(), material.color_tint, material.roughness)
                    .with_shader(material.shader.as_str()),
            );
        }

        let mut scene = Scene::new(assets);

        for (index, entity) in self.entities.iter().enumerate() {
            let mesh = scene
                .assets
                .primitive(&entity.mesh)
                .ok_or_else(|| anyhow!("entity {}: unknown mesh '{}'", index, entity.mesh))?;
            let material = scene
                .assets
                .find_material(&entity.material)
                .ok_or_else(|| anyhow!("entity {}: unknown material '{}'", index, entity.material))?;

            let transform = Transform::new()
                .with_position(entity.position)
                .with_rotation(entity.rotation)
                .with_scale(entity.scale);
            let mut built = Entity::new(mesh, material).with_transform(transform);
            if let Some(motion) = entity.motion {
                if let Motion::Spin { rate } = motion {
                    if rate.x != 0.0 {
                        bail!(
                            "entity {}: spin cannot turn pitch (rate {}), pitch is clamped to ±π/2",
                            index,
                            rate.x
                        );
                    }
                }
                built = built.with_animator(Animator::new(motion));
            }
            scene.add_entity(built);
        }

        for camera in &self.cameras {
            let mut built = Camera::new(
                camera.position,
                camera.fov_degrees.to_radians(),
                camera.movespeed,
                aspect,
            );
            built.transform_mut().set_rotation(camera.rotation);
            built.update_view_matrix();
            scene.add_camera(built);
        }
        scene.set_active_camera(self.active_camera);

        for light in &self.lights {
            scene.add_light(*light);
        }
        scene.set_ambient(self.ambient);

        log::info!(
            "scene built: {} entities, {} meshes, {} materials, {} cameras, {} lights",
            scene.entities().len(),
            scene.assets.mesh_count(),
            scene.assets.material_count(),
            scene.cameras().len(),
            scene.lights().len()
        );

        Ok(scene)
    }
}
