//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in submission order
//! - enforce program → mesh → material → draw ordering through the builder types

mod cmd;
mod ids;
mod list;

pub use cmd::{DrawCmd, Material, MeshInfo, Topology, WrapMode};
pub use ids::{MeshId, ProgramId, TextureId};
pub use list::{DrawBuilder, DrawList, MeshScope, ProgramScope};
