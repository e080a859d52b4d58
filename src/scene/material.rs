use glam::Vec4;

/// Surface parameters shared by every entity that references this material
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    color_tint: Vec4,
    roughness: f32,
    shader: String,
}

impl Material {
    pub const DEFAULT_SHADER: &'static str = "unlit";

    /// Roughness is clamped to `[0, 1]`
    pub fn new(name: impl Into<String>, color_tint: Vec4, roughness: f32) -> Self {
        Self {
            name: name.into(),
            color_tint,
            roughness: roughness.clamp(0.0, 1.0),
            shader: Self::DEFAULT_SHADER.to_string(),
        }
    }

    pub fn with_shader(mut self, shader: impl Into<String>) -> Self {
        self.shader = shader.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color_tint(&self) -> Vec4 {
        self.color_tint
    }

    pub fn set_color_tint(&mut self, color_tint: Vec4) {
        self.color_tint = color_tint;
    }

    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    pub fn set_roughness(&mut self, roughness: f32) {
        self.roughness = roughness.clamp(0.0, 1.0);
    }

    /// Name of the shader program the backend should bind
    pub fn shader(&self) -> &str {
        &self.shader
    }

    pub fn set_shader(&mut self, shader: impl Into<String>) {
        self.shader = shader.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roughness_clamped() {
        assert_eq!(Material::new("a", Vec4::ONE, 1.5).roughness(), 1.0);
        assert_eq!(Material::new("b", Vec4::ONE, -0.2).roughness(), 0.0);

        let mut material = Material::new("c", Vec4::ONE, 0.4);
        assert_eq!(material.roughness(), 0.4);
        material.set_roughness(7.0);
        assert_eq!(material.roughness(), 1.0);
    }

    #[test]
    fn test_default_shader() {
        let material = Material::new("plain", Vec4::ONE, 0.5);
        assert_eq!(material.shader(), Material::DEFAULT_SHADER);
        assert_eq!(material.with_shader("lit").shader(), "lit");
    }
}
