//! The fixed scene: meshes and textures it needs, lighting presets and the
//! composer that turns them into draw commands.

pub mod assets;
pub mod compose;
pub mod lighting;

pub use assets::{SceneAssets, SceneMeshes, SceneTextures, TexturePair, TEXTURE_FILES};
pub use compose::{
    compose_scene, draw_car, draw_ground, draw_wheel, draw_wing, CameraUniforms, CarParams, SceneFrame,
    WheelParams, CAR, WHEELS,
};
pub use lighting::{DirLight, LightConfig, PointLight};
