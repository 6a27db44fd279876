//! Free-fly camera.

mod fly;

pub use fly::{CameraMovement, FlyCamera};
