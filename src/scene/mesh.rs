/// Vertex layout shared with the vertex stage: position then RGBA colour
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const MAGENTA: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Indexed triangle list. Upload to the GPU is the backend's business.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            vertices,
            indices,
        }
    }

    /// Looks up a built-in primitive by name
    pub fn primitive(name: &str) -> Option<Self> {
        match name {
            "triangle" => Some(Self::triangle()),
            "diamond" => Some(Self::diamond()),
            "hexagon" => Some(Self::hexagon()),
            "cube" => Some(Self::cube()),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle() -> Self {
        Self::new(
            "triangle",
            vec![
                Vertex::new([0.0, 0.3, 0.0], RED),
                Vertex::new([0.3, -0.3, 0.0], BLUE),
                Vertex::new([-0.3, -0.3, 0.0], GREEN),
            ],
            vec![0, 1, 2],
        )
    }

    pub fn diamond() -> Self {
        Self::new(
            "diamond",
            vec![
                Vertex::new([0.0, 0.1, 0.0], MAGENTA),
                Vertex::new([0.05, 0.0, 0.0], CYAN),
                Vertex::new([0.0, -0.1, 0.0], YELLOW),
                Vertex::new([-0.05, 0.0, 0.0], BLACK),
            ],
            vec![0, 1, 3, 1, 2, 3],
        )
    }

    pub fn hexagon() -> Self {
        Self::new(
            "hexagon",
            vec![
                Vertex::new([-0.1, 0.0, 0.0], RED),
                Vertex::new([-0.05, -0.2, 0.0], YELLOW),
                Vertex::new([0.0, 0.2, 0.0], RED),
                Vertex::new([0.05, -0.2, 0.0], YELLOW),
                Vertex::new([0.1, 0.0, 0.0], RED),
            ],
            vec![0, 2, 1, 2, 3, 1, 2, 4, 3],
        )
    }

    /// Unit cube centred on the origin, clockwise front faces
    pub fn cube() -> Self {
        let corners = [
            [-0.5, -0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, -0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [0.5, -0.5, 0.5],
        ];
        let colors = [BLACK, GREEN, YELLOW, RED, BLUE, CYAN, WHITE, MAGENTA];
        let vertices = corners
            .iter()
            .zip(colors)
            .map(|(&position, color)| Vertex::new(position, color))
            .collect();

        #[rustfmt::skip]
        let indices = vec![
            0, 1, 2, 0, 2, 3, // -Z
            4, 6, 5, 4, 7, 6, // +Z
            4, 5, 1, 4, 1, 0, // -X
            3, 2, 6, 3, 6, 7, // +X
            1, 5, 6, 1, 6, 2, // +Y
            4, 0, 3, 4, 3, 7, // -Y
        ];

        Self::new("cube", vertices, indices)
    }
}
