use std::path::PathBuf;

use glam::Vec3;
use winit::dpi::LogicalSize;

use coupe_engine::window::RuntimeConfig;

/// Compiled-in viewer settings.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub size: LogicalSize<f64>,
    /// Directory holding the texture PNGs.
    pub asset_root: PathBuf,
    pub clear_color: wgpu::Color,

    pub camera_start: Vec3,
    pub near: f32,
    pub far: f32,

    /// Keyboard travel speed in units per second. The wheel adjusts it.
    pub key_speed: f32,
    /// Floor the wheel snaps to once speed would go negative.
    pub min_speed: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "The Car--Maybe".to_string(),
            size: LogicalSize::new(800.0, 600.0),
            asset_root: PathBuf::from("Resources/Textures"),
            clear_color: wgpu::Color::BLACK,
            camera_start: Vec3::new(0.0, 8.0, 25.0),
            near: 0.1,
            far: 10_000.0,
            key_speed: 8.0,
            min_speed: 0.1,
        }
    }
}

impl ViewerConfig {
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: self.size,
            capture_cursor: true,
            ..RuntimeConfig::default()
        }
    }
}
