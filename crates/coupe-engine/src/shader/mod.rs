//! Shader programs and their uniform blocks.
//!
//! A program is WGSL validated up front with naga, compiled once into one
//! pipeline per primitive topology, and paired with a [`UniformLayout`] that
//! maps uniform names to byte offsets. Draws carry a [`UniformBlock`] written
//! through that layout.

mod error;
mod program;
mod uniforms;

pub use error::ShaderError;
pub use program::{validate_wgsl, PipelineTargets, ProgramDesc, ProgramStore, ShaderProgram};
pub use uniforms::{UniformBlock, UniformKind, UniformLayout, UniformSlot};
