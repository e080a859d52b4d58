// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::core::InputSnapshot;
use crate::traits::Button;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-renderer")]
#[command(about = "Scene renderer with a free-look camera", long_about = None)]
pub struct Cli {
    /// Scene description (JSON); the built-in demo scene when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Run without a window, feeding scripted input for a fixed number of frames
    #[arg(long)]
    pub headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 60)]
    pub frames: u64,

    /// Fixed time step in seconds for headless mode
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Override the scene's window width
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the scene's window height
    #[arg(long)]
    pub height: Option<u32>,

    /// Initial active camera
    #[arg(long)]
    pub camera: Option<usize>,

    /// Button held down during every headless frame (repeatable)
    #[arg(long = "hold", value_enum)]
    pub hold: Vec<Button>,

    /// Pointer movement per headless frame, in pixels
    #[arg(long, num_args = 2, value_names = ["DX", "DY"], allow_negative_numbers = true)]
    pub look: Option<Vec<i32>>,

    /// Write the last headless frame (uniforms and draws) as JSON
    #[arg(long)]
    pub dump: Option<PathBuf>,
}

impl Cli {
    /// Input replayed on every headless frame
    pub fn scripted_input(&self) -> InputSnapshot {
        let mut input: InputSnapshot = self.hold.iter().copied().collect();
        if let Some([dx, dy]) = self.look.as_deref() {
            input = input.with_pointer_delta(glam::IVec2::new(*dx, *dy));
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Controller;
    use glam::IVec2;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["scene-renderer"]);

        assert!(!cli.headless);
        assert_eq!(cli.frames, 60);
        assert!(cli.scene.is_none());
        assert_eq!(cli.scripted_input(), InputSnapshot::default());
    }

    #[test]
    fn test_scripted_input() {
        let cli = Cli::parse_from([
            "scene-renderer",
            "--headless",
            "--hold",
            "key-w",
            "--hold",
            "mouse-left",
            "--look",
            "-4",
            "2",
        ]);

        let input = cli.scripted_input();
        assert!(input.is_down(Button::KeyW));
        assert!(input.is_down(Button::MouseLeft));
        assert!(!input.is_down(Button::KeyS));
        assert_eq!(input.pointer_delta(), IVec2::new(-4, 2));
    }

    #[test]
    fn test_look_needs_two_values() {
        assert!(Cli::try_parse_from(["scene-renderer", "--look", "3"]).is_err());
    }
}
