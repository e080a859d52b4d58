use super::material::Material;
use super::mesh::Mesh;

/// Type-safe handle to a mesh stored in [`Assets`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(usize);

/// Type-safe handle to a material stored in [`Assets`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(usize);

/// Single owner of every mesh and material in a scene.
///
/// Entities hold handles only. Editing a material through
/// [`material_mut`](Self::material_mut) is seen by every entity that uses it.
#[derive(Debug, Default)]
pub struct Assets {
    meshes: Vec<Mesh>,
    materials: Vec<Material>,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0)
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    pub fn material_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.materials.get_mut(id.0)
    }

    pub fn find_mesh(&self, name: &str) -> Option<MeshId> {
        self.meshes.iter().position(|m| m.name() == name).map(MeshId)
    }

    pub fn find_material(&self, name: &str) -> Option<MaterialId> {
        self.materials.iter().position(|m| m.name() == name).map(MaterialId)
    }

    /// Returns the existing handle for a built-in primitive, loading it on first use
    pub fn primitive(&mut self, name: &str) -> Option<MeshId> {
        if let Some(id) = self.find_mesh(name) {
            return Some(id);
        }
        Mesh::primitive(name).map(|mesh| self.add_mesh(mesh))
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_primitive_loaded_once() {
        let mut assets = Assets::new();
        let a = assets.primitive("diamond").unwrap();
        let b = assets.primitive("diamond").unwrap();

        assert_eq!(a, b);
        assert_eq!(assets.mesh_count(), 1);
        assert!(assets.primitive("teapot").is_none());
    }

    #[test]
    fn test_material_lookup_and_edit() {
        let mut assets = Assets::new();
        let id = assets.add_material(Material::new("red", Vec4::new(1.0, 0.0, 0.0, 1.0), 0.2));

        assert_eq!(assets.find_material("red"), Some(id));
        assert_eq!(assets.find_material("blue"), None);

        assets.material_mut(id).unwrap().set_roughness(0.9);
        assert_eq!(assets.material(id).unwrap().roughness(), 0.9);
    }
}
