//! GPU rendering subsystem.
//!
//! Owns uploaded meshes and textures, the shared bind group layouts, and the
//! `SceneRenderer` that replays a `scene::DrawList` into one depth-tested pass.
//!
//! Convention:
//! - right-handed world space, +Y up
//! - clip depth 0..1, cleared to 1.0, `Less` compare

mod ctx;
mod layouts;
mod mesh;
mod renderer;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use layouts::BindingLayouts;
pub use mesh::{Mesh, MeshStore};
pub use renderer::{fan_indices, SceneRenderer, SceneResources};
pub use texture::{mip_level_count, open_image, prepare_image, Texture, TextureError, TextureImage, TextureStore};
