//! "The Car--Maybe": a fixed low-poly car on a paved plane, lit by a sun and
//! one point light, explored with a fly camera.

pub mod config;
pub mod controls;
pub mod programs;
pub mod scene;
pub mod viewer;

pub use config::ViewerConfig;
pub use viewer::Viewer;
