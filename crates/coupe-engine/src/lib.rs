//! Coupe engine crate.
//!
//! Owns the platform + GPU runtime, the procedural geometry generators and the
//! 3D draw stream consumed by the viewer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod camera;
pub mod geometry;
pub mod render;
pub mod scene;
pub mod shader;
