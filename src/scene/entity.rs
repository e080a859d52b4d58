use super::animation::Animator;
use super::assets::{MaterialId, MeshId};
use crate::transform::Transform;

/// A drawable: shared mesh and material handles plus its own transform
#[derive(Debug, Clone)]
pub struct Entity {
    mesh: MeshId,
    material: MaterialId,
    transform: Transform,
    animator: Option<Animator>,
}

impl Entity {
    pub fn new(mesh: MeshId, material: MaterialId) -> Self {
        Self {
            mesh,
            material,
            transform: Transform::new(),
            animator: None,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_animator(mut self, animator: Animator) -> Self {
        self.animator = Some(animator);
        self
    }

    pub fn mesh(&self) -> MeshId {
        self.mesh
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }

    pub fn set_material(&mut self, material: MaterialId) {
        self.material = material;
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn animator(&self) -> Option<&Animator> {
        self.animator.as_ref()
    }

    pub fn update(&mut self, delta_time: f32) {
        if let Some(animator) = &mut self.animator {
            animator.apply(delta_time, &mut self.transform);
        }
    }
}
