pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod traits;
pub mod transform;
pub mod types;

pub use camera::Camera;
pub use config::SceneConfig;
pub use renderer::{FrameStats, RecordingBackend, Renderer};
pub use scene::Scene;
pub use transform::Transform;
